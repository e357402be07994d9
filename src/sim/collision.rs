//! Axis-aligned collision tests
//!
//! Pure geometry, no side effects. Rect vs rect drives the obstacle hit
//! check, rect vs circle drives coin collection.

use serde::{Deserialize, Serialize};

/// An axis-aligned box, y growing downward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// True unless one box is strictly disjoint from the other on some axis.
/// Boxes that merely touch at an edge count as intersecting.
#[inline]
pub fn rects_intersect(a: &Rect, b: &Rect) -> bool {
    !(a.x + a.w < b.x || a.x > b.x + b.w || a.y + a.h < b.y || a.y > b.y + b.h)
}

/// Closest-point test between a box and a circle.
///
/// The axis-band cases (circle center within the rect's horizontal or
/// vertical extent) are accepted before falling back to the squared
/// corner-distance comparison.
pub fn rect_circle_intersect(rect: &Rect, cx: f32, cy: f32, r: f32) -> bool {
    let dist_x = (cx - rect.x - rect.w / 2.0).abs();
    let dist_y = (cy - rect.y - rect.h / 2.0).abs();

    if dist_x > rect.w / 2.0 + r {
        return false;
    }
    if dist_y > rect.h / 2.0 + r {
        return false;
    }
    if dist_x <= rect.w / 2.0 {
        return true;
    }
    if dist_y <= rect.h / 2.0 {
        return true;
    }

    let dx = dist_x - rect.w / 2.0;
    let dy = dist_y - rect.h / 2.0;
    dx * dx + dy * dy <= r * r
}
