//! One play-through: simulation state plus its timers
//!
//! `Session` is the single owner of all mutable run state. The browser build
//! drives it from `requestAnimationFrame` with wall-clock milliseconds;
//! tests drive it with a fake clock.

use crate::scheduler::{Scheduler, TickTask};
use crate::sim::{GamePhase, GameState, InputState, score_tick, spawn_tick, update_tick};

pub struct Session {
    pub state: GameState,
    scheduler: Scheduler,
}

impl Session {
    pub fn new(seed: u64) -> Self {
        Self {
            state: GameState::new(seed),
            scheduler: Scheduler::new(),
        }
    }

    /// Whether the three run timers are currently armed
    #[inline]
    pub fn timers_armed(&self) -> bool {
        self.scheduler.is_armed()
    }

    /// Start a run (from Idle or straight from GameOver on restart)
    pub fn start(&mut self, now_ms: f64) {
        if self.state.is_running() {
            return;
        }
        self.state.begin_run();
        self.scheduler.arm(now_ms);
        log::info!("run started (seed {})", self.state.seed);
    }

    /// Drain due ticks and dispatch them; tears the timers down as a group
    /// the moment a collision has ended the run.
    pub fn advance(&mut self, now_ms: f64, input: &InputState) {
        for task in self.scheduler.due_ticks(now_ms) {
            match task {
                TickTask::Update => update_tick(&mut self.state, input),
                TickTask::Score => score_tick(&mut self.state),
                TickTask::Spawn => spawn_tick(&mut self.state),
            }
        }

        if self.state.phase == GamePhase::GameOver && self.scheduler.is_armed() {
            self.scheduler.cancel();
            log::info!(
                "game over: score {}, high score {}",
                self.state.score,
                self.state.high_score
            );
        }
    }

    /// Pointer/touch input: center the ship on an absolute x, clamped.
    /// Ignored outside a run, like every other input.
    pub fn point_player_to(&mut self, center_x: f32) {
        if self.state.is_running() {
            self.state.player.center_on(center_x);
        }
    }

    /// Dismiss the game-over presentation, returning to Idle
    pub fn dismiss_game_over(&mut self) {
        if self.state.phase == GamePhase::GameOver {
            self.state.phase = GamePhase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::Obstacle;
    use glam::Vec2;

    #[test]
    fn test_start_arms_timers() {
        let mut session = Session::new(5);
        assert!(!session.timers_armed());
        session.start(0.0);
        assert_eq!(session.state.phase, GamePhase::Running);
        assert!(session.timers_armed());
    }

    #[test]
    fn test_fifteen_seconds_dodging() {
        let mut session = Session::new(2024);
        session.start(0.0);
        // Park the ship at the right wall; the "dodge" below keeps every
        // spawned obstacle well clear of it.
        session.point_player_to(FIELD_WIDTH);
        assert_eq!(session.state.player.pos.x, FIELD_WIDTH - PLAYER_SIZE);

        // A sentinel obstacle held on-screen across the 100-point boundary
        // to observe the difficulty ramp.
        session.state.obstacles.push(Obstacle {
            pos: Vec2::new(0.0, 0.0),
            size: Vec2::new(30.0, 20.0),
            speed: 2.0,
            hue: 10.0,
        });

        let mut now = 0.0;
        while now < 15_000.0 {
            now += 100.0;
            session.advance(now, &InputState::default());
            for obstacle in &mut session.state.obstacles {
                obstacle.pos.x = obstacle.pos.x.min(300.0);
                if obstacle.hue == 10.0 {
                    obstacle.pos.y = 0.0; // keep the sentinel on-screen forever
                }
            }
        }

        assert_eq!(session.state.phase, GamePhase::Running);
        assert_eq!(session.state.score, 150);
        // Exactly one ramp boundary (score 100) was crossed
        let sentinel = session
            .state
            .obstacles
            .iter()
            .find(|o| o.hue == 10.0)
            .expect("sentinel survived");
        assert_eq!(sentinel.speed, 2.5);
    }

    #[test]
    fn test_collision_cancels_timers_and_freezes_score() {
        let mut session = Session::new(9);
        session.start(0.0);
        // Put an obstacle right on top of the ship
        let pos = session.state.player.pos;
        session.state.obstacles.push(Obstacle {
            pos: Vec2::new(pos.x, pos.y - 1.0),
            size: Vec2::new(30.0, 20.0),
            speed: 3.0,
            hue: 0.0,
        });

        session.advance(1000.0, &InputState::default());
        assert_eq!(session.state.phase, GamePhase::GameOver);
        assert!(!session.timers_armed());

        let frozen = session.state.score;
        session.advance(60_000.0, &InputState::default());
        assert_eq!(session.state.score, frozen);
    }

    #[test]
    fn test_dismiss_and_restart() {
        let mut session = Session::new(9);
        session.start(0.0);
        session.state.end_run();
        session.advance(100.0, &InputState::default());
        assert!(!session.timers_armed());

        session.dismiss_game_over();
        assert_eq!(session.state.phase, GamePhase::Idle);

        // Restarting re-arms and resets the score
        session.state.high_score = 10;
        session.start(200.0);
        assert_eq!(session.state.phase, GamePhase::Running);
        assert_eq!(session.state.score, 0);
        assert_eq!(session.state.high_score, 10);
        assert!(session.timers_armed());
    }

    #[test]
    fn test_pointer_ignored_when_not_running() {
        let mut session = Session::new(9);
        let idle_x = session.state.player.pos.x;
        session.point_player_to(0.0);
        assert_eq!(session.state.player.pos.x, idle_x);

        session.start(0.0);
        session.point_player_to(0.0);
        assert_eq!(session.state.player.pos.x, 0.0);
    }
}
