//! Headless renderers: the outer loop hands each finished tick to one of these

use std::io::Write;

use anyhow::{Context, Result};
use game_core::{Events, GameEvent, Snapshot};
use log::{debug, info};
use serde::Serialize;

/// Receives every tick after it has been simulated
pub trait Renderer {
    fn present(&mut self, snapshot: &Snapshot, events: &Events) -> Result<()>;
}

/// Logs points as they happen and a state line every `interval` ticks
pub struct LogRenderer {
    interval: u64,
}

impl LogRenderer {
    pub fn new(interval: u64) -> Self {
        Self {
            interval: interval.max(1),
        }
    }
}

impl Renderer for LogRenderer {
    fn present(&mut self, snapshot: &Snapshot, events: &Events) -> Result<()> {
        for event in events.iter() {
            if let GameEvent::Scored(side) = event {
                info!(
                    "tick {}: {:?} scores ({} - {})",
                    snapshot.tick, side, snapshot.score.left, snapshot.score.right
                );
            }
        }

        if snapshot.tick % self.interval == 0 {
            let ball = snapshot.ball.center();
            debug!(
                "tick {}: ball ({:.1}, {:.1}) vel ({:.1}, {:.1}), paddles {:.1} / {:.1}",
                snapshot.tick,
                ball.x,
                ball.y,
                snapshot.ball_vel.x,
                snapshot.ball_vel.y,
                snapshot.left_paddle.top(),
                snapshot.right_paddle.top()
            );
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct Frame<'a> {
    #[serde(flatten)]
    snapshot: &'a Snapshot,
    events: &'a Events,
}

/// Writes one JSON object per tick
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn present(&mut self, snapshot: &Snapshot, events: &Events) -> Result<()> {
        serde_json::to_writer(&mut self.out, &Frame { snapshot, events })
            .context("failed to encode frame")?;
        self.out
            .write_all(b"\n")
            .context("failed to write frame")?;
        Ok(())
    }
}
