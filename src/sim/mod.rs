//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Seeded RNG only
//! - No rendering or platform dependencies
//! - Every mutation happens inside a tick function or a clamped input method

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, clamp_to_width};
pub use spawn::spawn_obstacle;
pub use state::{GamePhase, GameState, Obstacle, Player};
pub use tick::{InputState, score_tick, spawn_tick, update_tick};
