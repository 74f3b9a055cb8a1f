//! Astro Dodge - a falling-obstacle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, tick logic)
//! - `scheduler`: Single-threaded periodic tick dispatcher
//! - `session`: One play-through: state machine + timers
//! - `leaderboard`: Remote score submission and rankings
//! - `renderer`: Canvas2D scene building and painting

pub mod leaderboard;
pub mod renderer;
pub mod scheduler;
pub mod session;
pub mod sim;

pub use leaderboard::LeaderboardClient;
pub use scheduler::{Scheduler, TickTask};
pub use session::Session;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (CSS pixels; the canvas is sized to match)
    pub const FIELD_WIDTH: f32 = 480.0;
    pub const FIELD_HEIGHT: f32 = 640.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 40.0;
    /// Distance from the field bottom to the player's top edge
    pub const PLAYER_BOTTOM_OFFSET: f32 = 80.0;
    /// Horizontal speed in pixels per update tick
    pub const PLAYER_SPEED: f32 = 5.0;

    /// Obstacle generation bounds (half-open ranges)
    pub const OBSTACLE_MIN_WIDTH: f32 = 20.0;
    pub const OBSTACLE_MAX_WIDTH: f32 = 60.0;
    pub const OBSTACLE_MIN_HEIGHT: f32 = 15.0;
    pub const OBSTACLE_MAX_HEIGHT: f32 = 45.0;
    /// Fall speed in pixels per update tick
    pub const OBSTACLE_MIN_SPEED: f32 = 2.0;
    pub const OBSTACLE_MAX_SPEED: f32 = 5.0;
    /// Obstacle fill hue band (degrees, red through yellow)
    pub const OBSTACLE_MAX_HUE: f32 = 60.0;

    /// Render/update cadence (60 Hz)
    pub const UPDATE_INTERVAL_MS: f64 = 1000.0 / 60.0;
    /// Score cadence (10 Hz)
    pub const SCORE_INTERVAL_MS: f64 = 100.0;
    /// Obstacle spawn cadence (1.25 Hz)
    pub const SPAWN_INTERVAL_MS: f64 = 800.0;

    /// Every this many score points, live obstacles speed up
    pub const SPEED_RAMP_SCORE_STEP: u32 = 100;
    /// Speed added to each live obstacle at a ramp boundary
    pub const SPEED_RAMP_INCREMENT: f32 = 0.5;
}
