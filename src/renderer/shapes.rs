//! Scene geometry built from game state
//!
//! The renderer is a pure function of the state: every frame a fresh vertex
//! list is assembled here (back to front) and uploaded in one draw call.
//! Coordinates are logical canvas pixels, y growing downward; the pipeline
//! maps them to NDC.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::{Vertex, colors};
use crate::consts::{GROUND_Y, HEIGHT, WIDTH};
use crate::sim::GameState;

/// Segments used to approximate circles and ellipses
const CIRCLE_SEGMENTS: usize = 24;

/// Axis-aligned quad as two triangles
pub fn push_quad(out: &mut Vec<Vertex>, x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) {
    let (x1, y1) = (x + w, y + h);
    out.push(Vertex::new(x, y, color));
    out.push(Vertex::new(x1, y, color));
    out.push(Vertex::new(x1, y1, color));
    out.push(Vertex::new(x, y, color));
    out.push(Vertex::new(x1, y1, color));
    out.push(Vertex::new(x, y1, color));
}

/// Quad with a vertical color gradient (sky)
pub fn push_gradient_quad(
    out: &mut Vec<Vertex>,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    top: [f32; 4],
    bottom: [f32; 4],
) {
    let (x1, y1) = (x + w, y + h);
    out.push(Vertex::new(x, y, top));
    out.push(Vertex::new(x1, y, top));
    out.push(Vertex::new(x1, y1, bottom));
    out.push(Vertex::new(x, y, top));
    out.push(Vertex::new(x1, y1, bottom));
    out.push(Vertex::new(x, y1, bottom));
}

/// Quad rotated around its center
pub fn push_rotated_quad(
    out: &mut Vec<Vertex>,
    center: Vec2,
    w: f32,
    h: f32,
    angle: f32,
    color: [f32; 4],
) {
    let (sin, cos) = angle.sin_cos();
    let rot = |dx: f32, dy: f32| -> Vertex {
        let x = center.x + dx * cos - dy * sin;
        let y = center.y + dx * sin + dy * cos;
        Vertex::new(x, y, color)
    };
    let (hw, hh) = (w / 2.0, h / 2.0);
    out.push(rot(-hw, -hh));
    out.push(rot(hw, -hh));
    out.push(rot(hw, hh));
    out.push(rot(-hw, -hh));
    out.push(rot(hw, hh));
    out.push(rot(-hw, hh));
}

/// Filled ellipse as a triangle fan
pub fn push_ellipse(out: &mut Vec<Vertex>, cx: f32, cy: f32, rx: f32, ry: f32, color: [f32; 4]) {
    for i in 0..CIRCLE_SEGMENTS {
        let a0 = TAU * i as f32 / CIRCLE_SEGMENTS as f32;
        let a1 = TAU * (i + 1) as f32 / CIRCLE_SEGMENTS as f32;
        out.push(Vertex::new(cx, cy, color));
        out.push(Vertex::new(cx + rx * a0.cos(), cy + ry * a0.sin(), color));
        out.push(Vertex::new(cx + rx * a1.cos(), cy + ry * a1.sin(), color));
    }
}

/// Filled circle
pub fn push_circle(out: &mut Vec<Vertex>, cx: f32, cy: f32, r: f32, color: [f32; 4]) {
    push_ellipse(out, cx, cy, r, r, color);
}

/// Three background layers scrolling at different fractions of the shared
/// parallax offset, each wrapping modulo the screen width for depth.
fn push_parallax(out: &mut Vec<Vertex>, offset: f32) {
    // Back: subtle hills
    let shift = (offset * 0.2) % WIDTH;
    for i in -2..3 {
        let x = i as f32 * 300.0 + 200.0 - shift;
        push_ellipse(out, x, 240.0, 220.0, 80.0, colors::HILLS);
    }

    // Mid: soft shapes
    let shift = (offset * 0.5) % WIDTH;
    for i in -2..4 {
        let x = i as f32 * 240.0 + 60.0 - shift;
        push_quad(out, x, 260.0, 120.0, 40.0, colors::MID_SHAPES);
    }

    // Front strips
    let shift = (offset * 0.9) % WIDTH;
    for i in -2..5 {
        let x = i as f32 * 160.0 + 40.0 - shift;
        push_quad(out, x, 300.0, 40.0, 20.0, colors::FRONT_STRIPS);
    }
}

/// Build the full frame, back to front: sky, parallax, ground, player,
/// obstacles, coins. Reads the state, never mutates it.
pub fn build_scene(state: &GameState) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(512);

    push_gradient_quad(
        &mut out,
        0.0,
        0.0,
        WIDTH,
        HEIGHT,
        colors::SKY_TOP,
        colors::SKY_BOTTOM,
    );

    push_parallax(&mut out, state.parallax_offset);

    push_quad(
        &mut out,
        0.0,
        GROUND_Y,
        WIDTH,
        HEIGHT - GROUND_Y,
        colors::GROUND,
    );

    // Player: tilts with vertical velocity, red channel pulses with time
    let player = &state.player;
    let pulse = (state.frame as f32 * 0.08).sin().abs();
    let color = [(255.0 - pulse * 40.0) / 255.0, 92.0 / 255.0, 92.0 / 255.0, 1.0];
    let center = Vec2::new(
        player.x + player.w / 2.0,
        player.y + player.bob + player.h / 2.0,
    );
    push_rotated_quad(
        &mut out,
        center,
        player.w,
        player.h,
        player.vy * 0.02,
        color,
    );

    for ob in &state.obstacles {
        push_quad(&mut out, ob.x, ob.y, ob.w, ob.h, colors::OBSTACLE);
    }

    for p in &state.pickups {
        push_circle(&mut out, p.x, p.y, p.r, colors::COIN);
        // Shine
        push_quad(&mut out, p.x - 4.0, p.y - 10.0, 6.0, 6.0, colors::COIN_SHINE);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameState, Obstacle, Pickup};

    #[test]
    fn test_quad_is_two_triangles() {
        let mut out = Vec::new();
        push_quad(&mut out, 0.0, 0.0, 10.0, 5.0, [1.0; 4]);
        assert_eq!(out.len(), 6);
    }

    #[test]
    fn test_circle_vertex_count() {
        let mut out = Vec::new();
        push_circle(&mut out, 0.0, 0.0, 10.0, [1.0; 4]);
        assert_eq!(out.len(), CIRCLE_SEGMENTS * 3);
    }

    #[test]
    fn test_rotated_quad_keeps_center() {
        let mut out = Vec::new();
        push_rotated_quad(&mut out, Vec2::new(50.0, 30.0), 10.0, 10.0, 0.7, [1.0; 4]);
        // Opposite corners average back to the center
        let cx = (out[0].position[0] + out[2].position[0]) / 2.0;
        let cy = (out[0].position[1] + out[2].position[1]) / 2.0;
        assert!((cx - 50.0).abs() < 1e-4);
        assert!((cy - 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_scene_starts_with_full_screen_sky() {
        let state = GameState::new(0);
        let verts = build_scene(&state);
        assert!(verts.len() >= 6);
        // First quad covers the whole logical canvas
        assert_eq!(verts[0].position, [0.0, 0.0]);
        assert_eq!(verts[2].position, [WIDTH, HEIGHT]);
    }

    #[test]
    fn test_scene_grows_with_entities() {
        let mut state = GameState::new(0);
        let base = build_scene(&state).len();

        state.obstacles.push(Obstacle {
            x: 500.0,
            y: GROUND_Y - 40.0,
            w: 30.0,
            h: 40.0,
            passed: false,
        });
        state.pickups.push(Pickup {
            x: 600.0,
            y: 200.0,
            r: 10.0,
            collected: false,
        });

        let scene = build_scene(&state);
        // One quad for the obstacle, circle + shine for the coin
        assert_eq!(scene.len(), base + 6 + CIRCLE_SEGMENTS * 3 + 6);
    }
}
