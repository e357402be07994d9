//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. One tick runs
//! its steps in a fixed order: commands, spawners, player physics, obstacle
//! scoring and pruning, pickup collection, then the fatal collision check.

use super::collision::{rect_circle_intersect, rects_intersect};
use super::spawn;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
///
/// All inputs are edge-triggered; the platform layer clears them after
/// each processed tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Jump (space / tap / click)
    pub jump: bool,
    /// Pause toggle
    pub pause: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    // Pause toggle flips Running <-> Paused; a finished run ignores it
    if input.pause {
        match state.phase {
            GamePhase::Running => {
                state.phase = GamePhase::Paused;
                return;
            }
            GamePhase::Paused => state.phase = GamePhase::Running,
            GamePhase::GameOver => {}
        }
    }

    if state.phase != GamePhase::Running {
        return;
    }

    state.frame += 1;
    state.parallax_offset += 0.6 + state.speed * 0.02;

    spawn::run_spawners(state);

    // Player integration: jump impulse, gravity, ground clamp
    if input.jump && state.player.jump() {
        state.events.push(GameEvent::Jump);
    }
    let frame = state.frame;
    let player = &mut state.player;
    player.vy += GRAVITY;
    player.y += player.vy;
    if player.y + player.h > GROUND_Y {
        player.y = GROUND_Y - player.h;
        player.vy = 0.0;
        player.on_ground = true;
        player.bob = 0.0;
    } else {
        player.on_ground = false;
        player.bob = (frame as f32 * 0.12).sin() * 0.6;
    }

    // Obstacles: advance, score passes, prune. Flags are set over the full
    // set before the filter runs, so nothing mutates mid-iteration.
    let speed = state.speed;
    let player_left = state.player.x;
    let mut passed = 0u32;
    for ob in &mut state.obstacles {
        ob.x -= speed;
        if !ob.passed && ob.right_edge() < player_left {
            ob.passed = true;
            passed += 1;
        }
    }
    state.score += passed * OBSTACLE_SCORE;
    state
        .obstacles
        .retain(|ob| ob.right_edge() > -OFFSCREEN_MARGIN);

    // Pickups: advance, collect on first overlap, prune
    let player_rect = state.player.rect();
    let mut collected = 0u32;
    for p in &mut state.pickups {
        p.x -= speed;
        if !p.collected && rect_circle_intersect(&player_rect, p.x, p.y, p.r) {
            p.collected = true;
            collected += 1;
        }
    }
    state.score += collected * PICKUP_SCORE;
    for _ in 0..collected {
        state.events.push(GameEvent::Coin);
    }
    state
        .pickups
        .retain(|p| !p.collected && p.x + p.r > -OFFSCREEN_MARGIN);

    // Any obstacle overlap ends the run; nothing after this point runs
    for ob in &state.obstacles {
        if rects_intersect(&player_rect, &ob.rect()) {
            state.phase = GamePhase::GameOver;
            state.events.push(GameEvent::GameOver);
            log::info!(
                "Game over at frame {} with score {}",
                state.frame,
                state.score
            );
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Obstacle, Pickup};

    fn run_ticks(state: &mut GameState, n: u64, input: &TickInput) {
        for _ in 0..n {
            tick(state, input);
        }
    }

    #[test]
    fn test_ground_clamp_invariant() {
        let mut state = GameState::new(1234);
        for i in 0..1000u64 {
            // Jump every 40 ticks; clear obstacles so the run never ends
            let input = TickInput {
                jump: i % 40 == 0,
                pause: false,
            };
            state.obstacles.clear();
            tick(&mut state, &input);

            assert!(state.player.y + state.player.h <= GROUND_Y + 1e-3);
            if state.player.on_ground {
                assert_eq!(state.player.vy, 0.0);
            }
        }
    }

    #[test]
    fn test_jump_arc_leaves_and_returns_to_ground() {
        let mut state = GameState::new(0);
        state.obstacles.clear();
        tick(&mut state, &TickInput { jump: true, pause: false });
        assert!(!state.player.on_ground);
        assert!(state.player.y + state.player.h < GROUND_Y);

        // -11 impulse under 0.6 gravity is back down within ~40 ticks
        let mut landed = false;
        for _ in 0..60 {
            state.obstacles.clear();
            tick(&mut state, &TickInput::default());
            if state.player.on_ground {
                landed = true;
                break;
            }
        }
        assert!(landed);
        assert_eq!(state.player.vy, 0.0);
        assert_eq!(state.player.bob, 0.0);
    }

    #[test]
    fn test_obstacle_scored_exactly_once() {
        let mut state = GameState::new(0);
        // Right edge just ahead of the player's left edge
        state.obstacles.push(Obstacle {
            x: state.player.x - 10.0,
            y: GROUND_Y - 30.0,
            w: 8.0,
            h: 30.0,
            passed: false,
        });
        // Already behind the player, must move left without scoring again
        state.obstacles.push(Obstacle {
            x: 10.0,
            y: GROUND_Y - 30.0,
            w: 8.0,
            h: 30.0,
            passed: true,
        });

        tick(&mut state, &TickInput::default());
        assert_eq!(state.score, OBSTACLE_SCORE);
        assert!(state.obstacles.iter().all(|o| o.passed));

        let score_after_pass = state.score;
        for _ in 0..5 {
            state.pickups.clear();
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.score, score_after_pass);
    }

    #[test]
    fn test_score_monotonic() {
        let mut state = GameState::new(77);
        let mut last = 0;
        for i in 0..2000u64 {
            let input = TickInput {
                jump: i % 35 == 0,
                pause: false,
            };
            tick(&mut state, &input);
            assert!(state.score >= last);
            last = state.score;
            if state.phase == GamePhase::GameOver {
                break;
            }
        }
    }

    #[test]
    fn test_speed_strictly_increases_on_ramp_frames() {
        let mut state = GameState::new(5);
        let mut prev = state.speed;
        for _ in 0..(SPEED_RAMP_INTERVAL * 2 + 5) {
            state.obstacles.clear();
            tick(&mut state, &TickInput::default());
            if state.frame % SPEED_RAMP_INTERVAL == 0 {
                assert!(state.speed > prev);
            } else {
                assert_eq!(state.speed, prev);
            }
            prev = state.speed;
        }
        assert_eq!(state.speed, START_SPEED + 2.0 * SPEED_INCREMENT);
    }

    #[test]
    fn test_collision_transitions_to_game_over() {
        let mut state = GameState::new(0);
        // Overlapping the player even after one tick of leftward movement
        state.obstacles.push(Obstacle {
            x: state.player.x,
            y: state.player.y,
            w: 30.0,
            h: 30.0,
            passed: false,
        });
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.events.contains(&GameEvent::GameOver));

        // Further ticks are no-ops
        let frame = state.frame;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.frame, frame);
    }

    #[test]
    fn test_pickup_collected_once_then_removed() {
        let mut state = GameState::new(0);
        let player = state.player;
        state.pickups.push(Pickup {
            x: player.x + player.w / 2.0 + state.speed,
            y: player.y + player.h / 2.0,
            r: PICKUP_RADIUS,
            collected: false,
        });
        state.obstacles.clear();

        tick(&mut state, &TickInput::default());
        assert_eq!(state.score, PICKUP_SCORE);
        assert!(state.events.contains(&GameEvent::Coin));
        // Collected pickups leave the active set immediately
        assert!(state.pickups.is_empty());
    }

    #[test]
    fn test_offscreen_entities_pruned() {
        let mut state = GameState::new(0);
        state.obstacles.push(Obstacle {
            x: -OFFSCREEN_MARGIN - 50.0,
            y: GROUND_Y - 30.0,
            w: 20.0,
            h: 30.0,
            passed: true,
        });
        state.pickups.push(Pickup {
            x: -OFFSCREEN_MARGIN - 50.0,
            y: 200.0,
            r: PICKUP_RADIUS,
            collected: false,
        });

        tick(&mut state, &TickInput::default());
        assert!(state.obstacles.is_empty());
        assert!(state.pickups.is_empty());
    }

    #[test]
    fn test_pause_toggle() {
        let mut state = GameState::new(0);
        let pause = TickInput {
            jump: false,
            pause: true,
        };

        tick(&mut state, &pause);
        assert_eq!(state.phase, GamePhase::Paused);

        // Paused ticks advance nothing
        let frame = state.frame;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.frame, frame);

        tick(&mut state, &pause);
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_pause_ignored_after_game_over() {
        let mut state = GameState::new(0);
        state.phase = GamePhase::GameOver;
        tick(&mut state, &TickInput { jump: false, pause: true });
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_determinism() {
        let mut a = GameState::new(424242);
        let mut b = GameState::new(424242);
        for i in 0..1500u64 {
            let input = TickInput {
                jump: i % 47 == 0,
                pause: false,
            };
            tick(&mut a, &input);
            tick(&mut b, &input);
        }
        assert_eq!(a.frame, b.frame);
        assert_eq!(a.score, b.score);
        assert_eq!(a.phase, b.phase);
        assert_eq!(a.obstacles.len(), b.obstacles.len());
        for (oa, ob) in a.obstacles.iter().zip(&b.obstacles) {
            assert_eq!(oa.x, ob.x);
            assert_eq!(oa.h, ob.h);
        }
    }

    #[test]
    fn test_parallax_advances_with_speed() {
        let mut state = GameState::new(0);
        state.obstacles.clear();
        tick(&mut state, &TickInput::default());
        let first = state.parallax_offset;
        assert!((first - (0.6 + START_SPEED * 0.02)).abs() < 1e-5);

        state.speed = 10.0;
        state.obstacles.clear();
        tick(&mut state, &TickInput::default());
        assert!(state.parallax_offset - first > 0.6);
    }
}
