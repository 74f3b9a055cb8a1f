//! Obstacle generation
//!
//! Takes the random source as a parameter so tests can pin a seed and assert
//! exact geometry. All ranges are half-open and bounded, so every obstacle is
//! constructible and fits the field horizontally.

use glam::Vec2;
use rand::Rng;

use super::state::Obstacle;
use crate::consts::*;

/// Generate one obstacle just above the top edge of the field
pub fn spawn_obstacle<R: Rng>(rng: &mut R) -> Obstacle {
    let width = rng.random_range(OBSTACLE_MIN_WIDTH..OBSTACLE_MAX_WIDTH);
    let height = rng.random_range(OBSTACLE_MIN_HEIGHT..OBSTACLE_MAX_HEIGHT);
    let x = rng.random_range(0.0..FIELD_WIDTH - width);
    let speed = rng.random_range(OBSTACLE_MIN_SPEED..OBSTACLE_MAX_SPEED);
    let hue = rng.random_range(0.0..OBSTACLE_MAX_HUE);

    Obstacle {
        pos: Vec2::new(x, -height),
        size: Vec2::new(width, height),
        speed,
        hue,
    }
}
