//! Input sources for the outer loop

use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use game_core::{Aabb, InputState, Side, Snapshot};
use serde::{Deserialize, Serialize};

/// Produces the held-key flags for the next tick
pub trait InputSource {
    fn poll(&mut self, snapshot: &Snapshot) -> InputState;
}

/// Drives both human paddles toward the ball, for unattended demo games
///
/// A paddle chases the ball only while it is heading its way and drifts back
/// to `home_y` otherwise. It never asks to quit.
#[derive(Debug, Clone, Copy)]
pub struct AutopilotInput {
    home_y: f32,
    deadzone: f32,
}

impl AutopilotInput {
    pub fn new(home_y: f32, deadzone: f32) -> Self {
        Self { home_y, deadzone }
    }

    /// (up, down) flags for one paddle
    fn steer(&self, paddle: &Aabb, snapshot: &Snapshot, side: Side) -> (bool, bool) {
        let approaching = match side {
            Side::Left => snapshot.ball_vel.x < 0.0,
            Side::Right => snapshot.ball_vel.x > 0.0,
        };
        let target_y = if approaching {
            snapshot.ball.center().y
        } else {
            self.home_y
        };

        let diff = target_y - paddle.center().y;
        if diff > self.deadzone {
            (false, true)
        } else if diff < -self.deadzone {
            (true, false)
        } else {
            (false, false)
        }
    }
}

impl InputSource for AutopilotInput {
    fn poll(&mut self, snapshot: &Snapshot) -> InputState {
        let (p1_up, p1_down) = self.steer(&snapshot.left_paddle, snapshot, Side::Left);
        let (p2_up, p2_down) = self.steer(&snapshot.right_paddle, snapshot, Side::Right);
        InputState {
            p1_up,
            p1_down,
            p2_up,
            p2_down,
            quit: false,
        }
    }
}

/// Hold `input` for `ticks` ticks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptSegment {
    pub ticks: u32,
    #[serde(default)]
    pub input: InputState,
}

/// Replays a fixed list of segments, then asks to quit
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    segments: VecDeque<ScriptSegment>,
}

impl ScriptedInput {
    pub fn new(segments: Vec<ScriptSegment>) -> Self {
        Self {
            segments: segments.into(),
        }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let segments: Vec<ScriptSegment> =
            serde_json::from_str(text).context("invalid input script")?;
        Ok(Self::new(segments))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read input script {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("in {}", path.display()))
    }

    pub fn remaining_ticks(&self) -> u64 {
        self.segments.iter().map(|s| u64::from(s.ticks)).sum()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _snapshot: &Snapshot) -> InputState {
        while let Some(segment) = self.segments.front_mut() {
            if segment.ticks == 0 {
                self.segments.pop_front();
                continue;
            }
            segment.ticks -= 1;
            return segment.input;
        }

        InputState {
            quit: true,
            ..InputState::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Aabb, Config, Score, Session};
    use glam::Vec2;

    fn snapshot_with_ball(pos: Vec2, vel: Vec2) -> Snapshot {
        let paddle = Vec2::new(10.0, 100.0);
        Snapshot {
            tick: 0,
            left_paddle: Aabb::from_pos_size(Vec2::new(10.0, 200.0), paddle),
            right_paddle: Aabb::from_pos_size(Vec2::new(780.0, 200.0), paddle),
            ball: Aabb::from_pos_size(pos, Vec2::splat(15.0)),
            ball_vel: vel,
            score: Score::new(),
        }
    }

    #[test]
    fn test_autopilot_chases_approaching_ball() {
        let mut autopilot = AutopilotInput::new(250.0, 4.0);
        // Ball high up, heading left
        let snapshot = snapshot_with_ball(Vec2::new(400.0, 20.0), Vec2::new(-5.0, 0.0));

        let input = autopilot.poll(&snapshot);

        assert!(input.p1_up && !input.p1_down, "Left paddle should chase upward");
        assert!(!input.p2_up && !input.p2_down, "Right paddle is already home");
        assert!(!input.quit);
    }

    #[test]
    fn test_autopilot_returns_home_when_ball_moves_away() {
        let mut autopilot = AutopilotInput::new(250.0, 4.0);
        let mut snapshot = snapshot_with_ball(Vec2::new(400.0, 450.0), Vec2::new(5.0, 0.0));
        // Left paddle parked at the top
        snapshot.left_paddle = Aabb::from_pos_size(Vec2::new(10.0, 0.0), Vec2::new(10.0, 100.0));

        let input = autopilot.poll(&snapshot);

        assert!(input.p1_down, "Left paddle should drift back to center");
        assert!(input.p2_down, "Right paddle should chase the ball down");
    }

    #[test]
    fn test_scripted_input_replays_then_quits() {
        let hold_up = InputState {
            p1_up: true,
            ..InputState::default()
        };
        let mut script = ScriptedInput::new(vec![
            ScriptSegment {
                ticks: 2,
                input: hold_up,
            },
            ScriptSegment {
                ticks: 0,
                input: hold_up,
            },
            ScriptSegment {
                ticks: 1,
                input: InputState::default(),
            },
        ]);
        let snapshot = Session::new(Config::new()).unwrap().snapshot();
        assert_eq!(script.remaining_ticks(), 3);

        assert_eq!(script.poll(&snapshot), hold_up);
        assert_eq!(script.poll(&snapshot), hold_up);
        assert_eq!(script.poll(&snapshot), InputState::default());
        assert!(script.poll(&snapshot).quit, "Exhausted script asks to quit");
        assert!(script.poll(&snapshot).quit);
    }

    #[test]
    fn test_scripted_input_from_json() {
        let script = ScriptedInput::from_json(
            r#"[
                { "ticks": 30, "input": { "p1_up": true } },
                { "ticks": 10 }
            ]"#,
        )
        .unwrap();
        assert_eq!(script.remaining_ticks(), 40);
    }

    #[test]
    fn test_scripted_input_rejects_bad_json() {
        let err = ScriptedInput::from_json(r#"{ "ticks": 1 }"#).unwrap_err();
        assert!(err.to_string().contains("invalid input script"));
    }
}
