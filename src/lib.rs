//! Coin Dash - an endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, spawning, game state)
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Browser/native storage and time helpers
//! - `best_score`: Persisted best-score record
//! - `settings`: Player preferences and locale detection
//! - `ads`: No-op hooks for ad-provider integration

pub mod ads;
#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod best_score;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use best_score::BestScore;
pub use settings::{Locale, Settings};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep; all physics constants are per-tick at 60 Hz
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Logical canvas resolution
    pub const WIDTH: f32 = 900.0;
    pub const HEIGHT: f32 = 450.0;
    /// Top of the ground band
    pub const GROUND_Y: f32 = HEIGHT - 80.0;

    /// Player square - x never changes, only y
    pub const PLAYER_X: f32 = 80.0;
    pub const PLAYER_SIZE: f32 = 36.0;

    /// Physics (units are pixels per tick, tuned for 60 Hz)
    pub const GRAVITY: f32 = 0.6;
    pub const JUMP_IMPULSE: f32 = -11.0;
    pub const START_SPEED: f32 = 3.0;

    /// Obstacle sampling ranges at spawn
    pub const OBSTACLE_MIN_HEIGHT: f32 = 24.0;
    pub const OBSTACLE_MAX_HEIGHT: f32 = 88.0;
    pub const OBSTACLE_MIN_WIDTH: f32 = 22.0;
    pub const OBSTACLE_MAX_WIDTH: f32 = 50.0;
    /// Spawn offset past the right edge
    pub const OBSTACLE_SPAWN_X: f32 = WIDTH + 40.0;

    /// Coin pickup geometry
    pub const PICKUP_RADIUS: f32 = 10.0;
    pub const PICKUP_SPAWN_X: f32 = WIDTH + 60.0;
    /// Vertical spawn band, measured up from the ground line
    pub const PICKUP_BAND_MIN: f32 = 120.0;
    pub const PICKUP_BAND_MAX: f32 = 200.0;

    /// Spawn cadences (frames)
    pub const PICKUP_INTERVAL: u64 = 140;
    pub const SPEED_RAMP_INTERVAL: u64 = 600;
    pub const SPEED_INCREMENT: f32 = 0.35;

    /// Entities are pruned once this far past the left edge
    pub const OFFSCREEN_MARGIN: f32 = 60.0;

    /// Scoring
    pub const OBSTACLE_SCORE: u32 = 1;
    pub const PICKUP_SCORE: u32 = 5;
    pub const REVIVE_BONUS: u32 = 3;
}

/// Obstacle spawn interval in frames for the current speed.
///
/// Shrinks as speed ramps up, floored at 50 frames so spawns never
/// become wall-to-wall.
#[inline]
pub fn obstacle_interval(speed: f32) -> u64 {
    50u64.max(120u64.saturating_sub((speed * 6.0).floor() as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obstacle_interval_floors_at_50() {
        assert_eq!(obstacle_interval(consts::START_SPEED), 102);
        assert_eq!(obstacle_interval(11.0), 54);
        assert_eq!(obstacle_interval(12.0), 50);
        assert_eq!(obstacle_interval(100.0), 50);
    }
}
