use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{Aabb, Field};

/// Which end of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Horizontal sign pointing from the center toward this side's wall
    pub fn direction(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2, // Top-left corner
    pub size: Vec2,
    pub speed: f32, // Units per tick
}

impl Paddle {
    /// Build a paddle, clamping its vertical position into the field
    pub fn new(side: Side, pos: Vec2, size: Vec2, speed: f32, field: &Field) -> Self {
        let mut paddle = Self {
            side,
            pos,
            size,
            speed,
        };
        paddle.clamp_to(field);
        paddle
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Keep the paddle inside `[0, field.height - size.y]`
    pub fn clamp_to(&mut self, field: &Field) {
        self.pos.y = field.clamp_y(self.pos.y, self.size.y);
    }
}

/// Who drives a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    Human,
    Ai,
}

/// Vertical displacement requested for this tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaddleIntent {
    pub dy: f32,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2, // Top-left corner
    pub vel: Vec2, // Units per tick
    pub size: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: Vec2) -> Self {
        Self { pos, vel, size }
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Put the ball's center exactly on the field center
    pub fn recenter(&mut self, field: &Field) {
        self.pos = field.centered(self.size);
    }
}
