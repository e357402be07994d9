//! Game state and core simulation types
//!
//! Everything that defines a run lives here; the whole state serializes to
//! plain JSON so a run snapshot is trivially inspectable.

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay, simulation advancing
    Running,
    /// Simulation suspended, rendering continues
    Paused,
    /// Run ended on an obstacle hit
    GameOver,
}

/// One-shot events emitted during a tick, drained by the audio/UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Player left the ground
    Jump,
    /// Coin collected (+5)
    Coin,
    /// Run ended
    GameOver,
}

/// The player-controlled square
///
/// `x` and the dimensions never change; gravity and jumps only move `y`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    /// Vertical velocity, positive is downward
    pub vy: f32,
    pub on_ground: bool,
    /// Cosmetic airborne wobble, no physical effect
    pub bob: f32,
}

impl Player {
    pub fn new() -> Self {
        Self {
            x: PLAYER_X,
            y: GROUND_Y - PLAYER_SIZE,
            w: PLAYER_SIZE,
            h: PLAYER_SIZE,
            vy: 0.0,
            on_ground: true,
            bob: 0.0,
        }
    }

    /// Apply the jump impulse. Returns false when airborne (no double jumps).
    pub fn jump(&mut self) -> bool {
        if !self.on_ground {
            return false;
        }
        self.vy = JUMP_IMPULSE;
        self.on_ground = false;
        true
    }

    /// Bounding box for collision tests
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A ground obstacle the player must clear
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    /// Set once the player has fully cleared the right edge; guards the
    /// +1 score so each obstacle counts exactly once
    pub passed: bool,
}

impl Obstacle {
    #[inline]
    pub fn right_edge(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }
}

/// A coin pickup
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pickup {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub collected: bool,
}

/// Complete game state for one run (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation frame counter
    pub frame: u64,
    pub score: u32,
    /// Horizontal scroll speed; never decreases within a run
    pub speed: f32,
    /// Cosmetic scroll accumulator for the background layers
    pub parallax_offset: f32,
    pub phase: GamePhase,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub pickups: Vec<Pickup>,
    /// One rewarded continue per run
    pub revive_available: bool,
    /// Events from the most recent tick (not part of the snapshot)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh run, entering Running immediately
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            frame: 0,
            score: 0,
            speed: START_SPEED,
            parallax_offset: 0.0,
            phase: GamePhase::Running,
            player: Player::new(),
            obstacles: Vec::new(),
            pickups: Vec::new(),
            revive_available: true,
            events: Vec::new(),
        }
    }

    /// RNG for the current frame's spawns.
    ///
    /// A fresh generator derived from (seed, frame, stream) keeps spawning
    /// deterministic without having to serialize RNG internals in the
    /// snapshot. Distinct streams decorrelate spawners that fire on the
    /// same frame.
    pub fn spawn_rng(&self, stream: u64) -> Pcg32 {
        Pcg32::new(
            self.seed ^ self.frame.wrapping_mul(0x9E37_79B9_7F4A_7C15),
            stream,
        )
    }

    /// One-time continue: back to Running without a reset, keeping score
    /// plus a small bonus. Returns false once the revive has been spent
    /// or if the run is not over.
    pub fn revive(&mut self) -> bool {
        if self.phase != GamePhase::GameOver || !self.revive_available {
            return false;
        }
        self.revive_available = false;
        self.score += REVIVE_BONUS;
        self.phase = GamePhase::Running;
        log::info!("Revived at score {}", self.score);
        true
    }

    /// Take the events accumulated by the last tick
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_grounded() {
        let state = GameState::new(7);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert!(state.player.on_ground);
        assert_eq!(state.player.vy, 0.0);
        assert_eq!(state.player.y + state.player.h, GROUND_Y);
        assert!(state.obstacles.is_empty());
        assert!(state.pickups.is_empty());
        assert!(state.revive_available);
    }

    #[test]
    fn test_jump_only_from_ground() {
        let mut player = Player::new();
        assert!(player.jump());
        assert_eq!(player.vy, JUMP_IMPULSE);
        assert!(!player.on_ground);
        // Second jump while airborne is refused
        assert!(!player.jump());
    }

    #[test]
    fn test_revive_single_use() {
        let mut state = GameState::new(1);
        state.score = 40;
        state.phase = GamePhase::GameOver;

        assert!(state.revive());
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 40 + REVIVE_BONUS);
        assert!(!state.revive_available);

        // Second revive in the same run has no effect
        state.phase = GamePhase::GameOver;
        assert!(!state.revive());
        assert_eq!(state.score, 40 + REVIVE_BONUS);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_revive_refused_while_running() {
        let mut state = GameState::new(1);
        assert!(!state.revive());
        assert!(state.revive_available);
    }

    #[test]
    fn test_state_round_trips_through_json() {
        let state = GameState::new(42);
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed, 42);
        assert_eq!(back.phase, GamePhase::Running);
    }
}
