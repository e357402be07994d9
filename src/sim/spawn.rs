//! Procedural spawning on a frame-count cadence
//!
//! Obstacles spawn more often as speed ramps up; pickups arrive on a fixed
//! beat. Both appear just past the right edge and drift left with the world.

use rand::Rng;

use super::state::{GameState, Obstacle, Pickup};
use crate::consts::*;
use crate::obstacle_interval;

/// RNG stream ids, so spawners firing on the same frame stay decorrelated
const OBSTACLE_STREAM: u64 = 0;
const PICKUP_STREAM: u64 = 1;

/// Run all cadence checks for the current frame. Called once per tick,
/// after the frame counter has advanced.
pub fn run_spawners(state: &mut GameState) {
    if state.frame % obstacle_interval(state.speed) == 0 {
        spawn_obstacle(state);
    }
    if state.frame % PICKUP_INTERVAL == 0 {
        spawn_pickup(state);
    }
    if state.frame % SPEED_RAMP_INTERVAL == 0 {
        state.speed += SPEED_INCREMENT;
        log::debug!("Speed ramped to {:.2} at frame {}", state.speed, state.frame);
    }
}

/// Append one obstacle, resting on the ground line just off-screen right
pub fn spawn_obstacle(state: &mut GameState) {
    let mut rng = state.spawn_rng(OBSTACLE_STREAM);
    let h = rng.random_range(OBSTACLE_MIN_HEIGHT..OBSTACLE_MAX_HEIGHT);
    let w = rng.random_range(OBSTACLE_MIN_WIDTH..OBSTACLE_MAX_WIDTH);
    state.obstacles.push(Obstacle {
        x: OBSTACLE_SPAWN_X,
        y: GROUND_Y - h,
        w,
        h,
        passed: false,
    });
}

/// Append one coin in the band above the ground, off-screen right
pub fn spawn_pickup(state: &mut GameState) {
    let mut rng = state.spawn_rng(PICKUP_STREAM);
    let above_ground = rng.random_range(PICKUP_BAND_MIN..PICKUP_BAND_MAX);
    state.pickups.push(Pickup {
        x: PICKUP_SPAWN_X,
        y: GROUND_Y - above_ground,
        r: PICKUP_RADIUS,
        collected: false,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obstacle_sampling_ranges() {
        for seed in 0..50 {
            let mut state = GameState::new(seed);
            state.frame = seed.wrapping_mul(31) + 1;
            spawn_obstacle(&mut state);

            let ob = state.obstacles[0];
            assert!(ob.h >= OBSTACLE_MIN_HEIGHT && ob.h < OBSTACLE_MAX_HEIGHT);
            assert!(ob.w >= OBSTACLE_MIN_WIDTH && ob.w < OBSTACLE_MAX_WIDTH);
            // Rests exactly on the ground line
            assert_eq!(ob.y + ob.h, GROUND_Y);
            assert_eq!(ob.x, OBSTACLE_SPAWN_X);
            assert!(!ob.passed);
        }
    }

    #[test]
    fn test_pickup_band() {
        for seed in 0..50 {
            let mut state = GameState::new(seed);
            state.frame = seed.wrapping_mul(17) + 1;
            spawn_pickup(&mut state);

            let p = state.pickups[0];
            let above = GROUND_Y - p.y;
            assert!(above >= PICKUP_BAND_MIN && above < PICKUP_BAND_MAX);
            assert_eq!(p.r, PICKUP_RADIUS);
            assert!(!p.collected);
        }
    }

    #[test]
    fn test_spawn_is_deterministic_per_frame() {
        let mut a = GameState::new(99);
        let mut b = GameState::new(99);
        a.frame = 140;
        b.frame = 140;
        spawn_obstacle(&mut a);
        spawn_obstacle(&mut b);
        assert_eq!(a.obstacles[0].h, b.obstacles[0].h);
        assert_eq!(a.obstacles[0].w, b.obstacles[0].w);
    }

    #[test]
    fn test_speed_ramp_fires_on_interval() {
        let mut state = GameState::new(3);
        state.frame = SPEED_RAMP_INTERVAL;
        let before = state.speed;
        run_spawners(&mut state);
        assert_eq!(state.speed, before + SPEED_INCREMENT);

        // Off-interval frames leave speed untouched
        state.frame = SPEED_RAMP_INTERVAL + 1;
        let before = state.speed;
        run_spawners(&mut state);
        assert_eq!(state.speed, before);
    }

    #[test]
    fn test_pickup_cadence() {
        let mut state = GameState::new(5);
        state.frame = PICKUP_INTERVAL;
        run_spawners(&mut state);
        assert_eq!(state.pickups.len(), 1);

        state.frame = PICKUP_INTERVAL + 1;
        run_spawners(&mut state);
        assert_eq!(state.pickups.len(), 1);
    }
}
