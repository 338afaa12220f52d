//! Driver: the single-threaded loop state around an [`Engine`].
//!
//! The driver owns everything the engine deliberately does not: the pause
//! flag, the gravity clock and the high score. Each frame the caller feeds it
//! the key actions that arrived and the time that passed; the driver applies
//! commands first, then runs as many ticks as the elapsed time covers.

use std::time::Duration;

use log::warn;
use rand::rngs::StdRng;
use rand::Rng;

use crate::core::{Engine, Snapshot};
use crate::highscore::{HighScore, HighScoreStore};
use crate::input::KeyAction;
use crate::term::HudView;

/// Summary of one [`Driver::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Step {
    pub ticks: u32,
    pub lines_cleared: u32,
    pub score_delta: u32,
    pub game_over: bool,
}

pub struct Driver<S, R = StdRng> {
    engine: Engine<R>,
    high_score: HighScore<S>,
    paused: bool,
    tick_interval: Duration,
    /// Time accumulated towards the next tick.
    since_tick: Duration,
}

impl<S: HighScoreStore, R: Rng> Driver<S, R> {
    pub fn new(engine: Engine<R>, high_score: HighScore<S>, tick_interval: Duration) -> Self {
        Self {
            engine,
            high_score,
            paused: false,
            // A zero interval would tick forever inside `advance`.
            tick_interval: tick_interval.max(Duration::from_millis(1)),
            since_tick: Duration::ZERO,
        }
    }

    pub fn engine(&self) -> &Engine<R> {
        &self.engine
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn high_score(&self) -> u32 {
        self.high_score.best()
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Apply one key action. Returns true if anything changed.
    ///
    /// Commands are dropped while paused or after game over.
    pub fn handle(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::TogglePause => {
                if self.engine.game_over() {
                    return false;
                }
                self.paused = !self.paused;
                true
            }
            KeyAction::Command(_) if self.paused => false,
            KeyAction::Command(command) => self.engine.apply_command(command),
        }
    }

    /// Let `elapsed` pass on the gravity clock.
    pub fn advance(&mut self, elapsed: Duration) -> Step {
        let mut step = Step {
            game_over: self.engine.game_over(),
            ..Step::default()
        };
        if self.paused || step.game_over {
            return step;
        }

        self.since_tick += elapsed;
        while self.since_tick >= self.tick_interval {
            self.since_tick -= self.tick_interval;

            let outcome = self.engine.tick();
            step.ticks += 1;
            step.lines_cleared += outcome.lines_cleared;
            step.score_delta += outcome.score_delta;

            if outcome.score_changed() {
                if let Err(e) = self.high_score.observe(outcome.score) {
                    warn!("could not persist high score: {:#}", e);
                }
            }
            if outcome.game_over {
                step.game_over = true;
                self.since_tick = Duration::ZERO;
                break;
            }
        }
        step
    }

    pub fn snapshot(&self) -> Snapshot {
        self.engine.snapshot()
    }

    pub fn snapshot_into(&self, out: &mut Snapshot) {
        self.engine.snapshot_into(out);
    }

    pub fn hud(&self) -> HudView {
        HudView {
            high_score: self.high_score.best(),
            paused: self.paused,
        }
    }
}
