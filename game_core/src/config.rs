use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, Controller, Field, Params, Side};

/// Who controls the right paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlMode {
    /// Both paddles follow keyboard flags
    #[default]
    TwoPlayer,
    /// Player 1 on the left, AI on the right
    VersusAi,
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_speed: f32,
    pub ai_speed: f32,
    pub ball_size: f32,
    pub serve_speed_x: f32,
    pub serve_speed_y: f32,
    pub escalation_hits: u32,
    pub escalation_step: f32,
    pub win_score: u32,
    pub tick_rate: u32,
    pub seed: u64,
    pub mode: ControlMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_speed: Params::PADDLE_SPEED,
            ai_speed: Params::AI_PADDLE_SPEED,
            ball_size: Params::BALL_SIZE,
            serve_speed_x: Params::BALL_SERVE_SPEED_X,
            serve_speed_y: Params::BALL_SERVE_SPEED_Y,
            escalation_hits: Params::ESCALATION_HITS,
            escalation_step: Params::ESCALATION_STEP,
            win_score: Params::WIN_SCORE,
            tick_rate: Params::TICK_RATE,
            seed: Params::DEFAULT_SEED,
            mode: ControlMode::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self) -> Field {
        Field::new(self.field_width, self.field_height)
    }

    pub fn paddle_size(&self) -> Vec2 {
        Vec2::new(self.paddle_width, self.paddle_height)
    }

    pub fn ball_extent(&self) -> Vec2 {
        Vec2::splat(self.ball_size)
    }

    /// Get X position (left edge) for a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.field_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Top-left spawn position, vertically centered
    pub fn paddle_spawn(&self, side: Side) -> Vec2 {
        Vec2::new(
            self.paddle_x(side),
            (self.field_height - self.paddle_height) / 2.0,
        )
    }

    pub fn controller(&self, side: Side) -> Controller {
        match (self.mode, side) {
            (ControlMode::VersusAi, Side::Right) => Controller::Ai,
            _ => Controller::Human,
        }
    }

    pub fn speed_for(&self, controller: Controller) -> f32 {
        match controller {
            Controller::Human => self.paddle_speed,
            Controller::Ai => self.ai_speed,
        }
    }

    /// Serve velocity heading toward `side` with the given vertical sign
    pub fn serve_velocity(&self, toward: Side, vertical_sign: f32) -> Vec2 {
        Vec2::new(
            toward.direction() * self.serve_speed_x,
            vertical_sign.signum() * self.serve_speed_y,
        )
    }

    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.tick_rate.max(1)))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_size", self.ball_size),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        for (name, value) in [
            ("paddle_margin", self.paddle_margin),
            ("paddle_speed", self.paddle_speed),
            ("ai_speed", self.ai_speed),
            ("serve_speed_x", self.serve_speed_x),
            ("serve_speed_y", self.serve_speed_y),
            ("escalation_step", self.escalation_step),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Negative { name, value });
            }
        }

        if self.paddle_height >= self.field_height {
            return Err(ConfigError::PaddleTooTall {
                paddle_height: self.paddle_height,
                field_height: self.field_height,
            });
        }

        if self.ball_size >= self.field_height || self.ball_size >= self.field_width {
            return Err(ConfigError::BallTooLarge {
                ball_size: self.ball_size,
                field_width: self.field_width,
                field_height: self.field_height,
            });
        }

        if self.paddle_margin + self.paddle_width >= self.field_width / 2.0 {
            return Err(ConfigError::PaddlesOverlap {
                margin: self.paddle_margin,
                width: self.paddle_width,
            });
        }

        if self.ai_speed > self.paddle_speed {
            return Err(ConfigError::AiFasterThanPlayer {
                ai_speed: self.ai_speed,
                paddle_speed: self.paddle_speed,
            });
        }

        if self.escalation_hits == 0 {
            return Err(ConfigError::ZeroEscalationHits);
        }

        if self.tick_rate == 0 {
            return Err(ConfigError::ZeroTickRate);
        }

        Ok(())
    }
}
