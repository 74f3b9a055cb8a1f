//! The three periodic tick functions
//!
//! Each tick guards on the Running phase, so a callback that was already due
//! when the run ended is a no-op, the same contract the browser's event
//! queue gives interval callbacks racing a teardown.

use super::spawn::spawn_obstacle;
use super::state::GameState;
use crate::consts::*;

/// Held-key input sampled by the update tick
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub left_held: bool,
    pub right_held: bool,
}

/// Update tick (~60 Hz): movement, falling, collision, cleanup
pub fn update_tick(state: &mut GameState, input: &InputState) {
    if !state.is_running() {
        return;
    }

    if input.left_held {
        state.player.step(-state.player.speed);
    }
    if input.right_held {
        state.player.step(state.player.speed);
    }

    let player_box = state.player.aabb();
    let mut collided = false;
    for obstacle in &mut state.obstacles {
        obstacle.fall();
        if obstacle.aabb().overlaps(&player_box) {
            collided = true;
            break;
        }
    }

    if collided {
        state.end_run();
        return;
    }

    state.obstacles.retain(|o| !o.is_below(FIELD_HEIGHT));
}

/// Score tick (10 Hz): +1 point, speed ramp at every 100-point boundary
pub fn score_tick(state: &mut GameState) {
    if !state.is_running() {
        return;
    }

    state.score += 1;
    if state.score % SPEED_RAMP_SCORE_STEP == 0 {
        for obstacle in &mut state.obstacles {
            obstacle.speed += SPEED_RAMP_INCREMENT;
        }
    }
}

/// Spawn tick (1.25 Hz): one new obstacle from the session RNG
pub fn spawn_tick(state: &mut GameState) {
    if !state.is_running() {
        return;
    }

    let obstacle = spawn_obstacle(&mut state.rng);
    state.obstacles.push(obstacle);
}
