use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::Side;

/// Tick counter for the simulation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Time {
    pub tick: u64, // Ticks advanced so far
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self) {
        self.tick += 1;
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,  // Left player score
    pub right: u32, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn has_winner(&self, win_score: u32) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Paddle hits since the last escalation or serve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitCounter {
    pub count: u32,
    pub threshold: u32,
}

impl HitCounter {
    pub fn new(threshold: u32) -> Self {
        Self {
            count: 0,
            threshold: threshold.max(1),
        }
    }

    /// Count a hit. Returns true when the threshold is reached, wrapping to zero.
    pub fn register_hit(&mut self) -> bool {
        self.count += 1;
        if self.count >= self.threshold {
            self.count = 0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }
}

/// Something that happened during a tick, for decorative collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    PaddleHit(Side),
    WallBounce,
    Scored(Side),
}

/// Events emitted since the last clear
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Events {
    list: Vec<GameEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    pub fn push(&mut self, event: GameEvent) {
        self.list.push(event);
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.list.iter()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn contains(&self, event: GameEvent) -> bool {
        self.list.contains(&event)
    }

    /// Side that scored, if any
    pub fn scored(&self) -> Option<Side> {
        self.list.iter().find_map(|e| match e {
            GameEvent::Scored(side) => Some(*side),
            _ => None,
        })
    }

    pub fn paddle_hits(&self) -> usize {
        self.list
            .iter()
            .filter(|e| matches!(e, GameEvent::PaddleHit(_)))
            .count()
    }
}

/// Key flags held during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputState {
    pub p1_up: bool,
    pub p1_down: bool,
    pub p2_up: bool,
    pub p2_down: bool,
    pub quit: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Up/down flags for the paddle on `side`
    pub fn flags(&self, side: Side) -> (bool, bool) {
        match side {
            Side::Left => (self.p1_up, self.p1_down),
            Side::Right => (self.p2_up, self.p2_down),
        }
    }
}

/// Random source for the serve direction
pub trait ServeSource {
    /// Either `1.0` or `-1.0`, chosen uniformly
    fn vertical_sign(&mut self) -> f32;
}

/// Random number generator
pub struct GameRng(pub StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(crate::Params::DEFAULT_SEED)
    }
}

impl ServeSource for GameRng {
    fn vertical_sign(&mut self) -> f32 {
        if self.0.gen_bool(0.5) {
            1.0
        } else {
            -1.0
        }
    }
}
