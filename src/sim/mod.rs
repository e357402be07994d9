//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Single mutator: the tick owns all state changes
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, rect_circle_intersect, rects_intersect};
pub use state::{GameEvent, GamePhase, GameState, Obstacle, Pickup, Player};
pub use tick::{TickInput, tick};
