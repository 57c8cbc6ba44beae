//! The outer loop: poll input, advance one tick, present, wait

use anyhow::Result;
use game_core::{GameRng, Score, ServeSource, Session, Side};
use log::info;

use crate::clock::Clock;
use crate::input::InputSource;
use crate::renderer::Renderer;

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The input source asked to quit
    Quit,
    /// `max_ticks` was reached
    TickLimit,
    /// A side reached the win score
    Winner(Side),
}

/// Outcome of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub score: Score,
    pub paddle_hits: u64,
    pub reason: StopReason,
}

/// Owns a session and its collaborators for one game
pub struct Runner<R: ServeSource = GameRng> {
    session: Session<R>,
    clock: Box<dyn Clock>,
    input: Box<dyn InputSource>,
    renderer: Box<dyn Renderer>,
    max_ticks: u64,
    win_score: u32,
}

impl<R: ServeSource> Runner<R> {
    pub fn new(
        session: Session<R>,
        clock: Box<dyn Clock>,
        input: Box<dyn InputSource>,
        renderer: Box<dyn Renderer>,
        max_ticks: u64,
    ) -> Self {
        let win_score = session.config().win_score;
        Self {
            session,
            clock,
            input,
            renderer,
            max_ticks,
            win_score,
        }
    }

    pub fn session(&self) -> &Session<R> {
        &self.session
    }

    /// Winner check, tick limit and quit signal are all checked between ticks
    pub fn run(&mut self) -> Result<RunSummary> {
        info!(
            "starting {:?} game, first to {}, limit {} ticks",
            self.session.config().mode,
            self.win_score,
            self.max_ticks
        );

        let mut paddle_hits = 0u64;
        let reason = loop {
            if let Some(side) = self.winner() {
                break StopReason::Winner(side);
            }
            if self.session.tick() >= self.max_ticks {
                break StopReason::TickLimit;
            }

            let input = self.input.poll(&self.session.snapshot());
            if input.quit {
                break StopReason::Quit;
            }

            self.session.advance(&input);
            paddle_hits += self.session.events().paddle_hits() as u64;

            let snapshot = self.session.snapshot();
            self.renderer.present(&snapshot, self.session.events())?;
            self.clock.wait_next_tick();
        };

        let summary = RunSummary {
            ticks: self.session.tick(),
            score: self.session.score(),
            paddle_hits,
            reason,
        };
        info!(
            "game over after {} ticks ({:?}): {} - {}, {} paddle hits",
            summary.ticks, summary.reason, summary.score.left, summary.score.right, paddle_hits
        );
        Ok(summary)
    }

    fn winner(&self) -> Option<Side> {
        if self.win_score == 0 {
            return None;
        }
        self.session.score().has_winner(self.win_score)
    }
}
