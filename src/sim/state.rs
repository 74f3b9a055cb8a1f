//! Game state and core simulation types
//!
//! All mutable state of one play-through lives in [`GameState`]; nothing in
//! the crate keeps free-floating module state, so tests can run any number of
//! independent sessions.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::{Aabb, clamp_to_width};
use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the player to start a run
    Idle,
    /// Active gameplay, timers armed
    Running,
    /// Run ended on a collision; score frozen until dismissed
    GameOver,
}

/// The player's ship
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner. `y` never changes after construction.
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal speed in pixels per update tick
    pub speed: f32,
}

impl Default for Player {
    fn default() -> Self {
        let mut player = Self {
            pos: Vec2::new(0.0, FIELD_HEIGHT - PLAYER_BOTTOM_OFFSET),
            size: Vec2::splat(PLAYER_SIZE),
            speed: PLAYER_SPEED,
        };
        player.recenter();
        player
    }
}

impl Player {
    /// Put the ship back at the horizontal center of the field
    pub fn recenter(&mut self) {
        self.pos.x = FIELD_WIDTH / 2.0 - self.size.x / 2.0;
    }

    /// Move horizontally by `dx`, clamped to the field
    pub fn step(&mut self, dx: f32) {
        self.pos.x = clamp_to_width(self.pos.x + dx, self.size.x, FIELD_WIDTH);
    }

    /// Center the ship on an absolute x coordinate (pointer/touch), clamped
    pub fn center_on(&mut self, x: f32) {
        self.pos.x = clamp_to_width(x - self.size.x / 2.0, self.size.x, FIELD_WIDTH);
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// A falling obstacle
#[derive(Debug, Clone)]
pub struct Obstacle {
    /// Top-left corner; spawns with `y == -size.y` (just above the field)
    pub pos: Vec2,
    pub size: Vec2,
    /// Fall speed in pixels per update tick
    pub speed: f32,
    /// Fill hue in degrees (red through yellow band)
    pub hue: f32,
}

impl Obstacle {
    /// Advance one update tick worth of fall
    pub fn fall(&mut self) {
        self.pos.y += self.speed;
    }

    /// True once the top edge has passed the bottom of the field
    pub fn is_below(&self, field_height: f32) -> bool {
        self.pos.y > field_height
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// Complete state of one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG driving obstacle generation
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Score of the current (or just-finished) run
    pub score: u32,
    /// Best score this page lifetime; never decreases, never persisted
    pub high_score: u32,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
}

impl GameState {
    /// Create a fresh idle state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            score: 0,
            high_score: 0,
            player: Player::default(),
            obstacles: Vec::new(),
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Reset for a new run: score to zero, field cleared, ship centered.
    /// The high score carries over.
    pub fn begin_run(&mut self) {
        self.score = 0;
        self.obstacles.clear();
        self.player.recenter();
        self.phase = GamePhase::Running;
    }

    /// End the run: freeze the score, fold it into the high score, clear the
    /// field. Timer teardown is the session's job.
    pub fn end_run(&mut self) {
        self.phase = GamePhase::GameOver;
        if self.score > self.high_score {
            self.high_score = self.score;
        }
        self.obstacles.clear();
    }
}
