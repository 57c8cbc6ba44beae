//! Command-line arguments and configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use game_core::{Config, ControlMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    TwoPlayer,
    VersusAi,
}

impl From<ModeArg> for ControlMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::TwoPlayer => ControlMode::TwoPlayer,
            ModeArg::VersusAi => ControlMode::VersusAi,
        }
    }
}

/// Headless fixed-timestep Pong
#[derive(Debug, Parser)]
#[command(name = "pong", version, about)]
pub struct Cli {
    /// JSON file with game settings; missing keys use defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Who controls the right paddle
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Seed for serve directions
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop once a side reaches this score (0 disables)
    #[arg(long)]
    pub win_score: Option<u32>,

    /// Stop after this many ticks
    #[arg(long, default_value_t = 36_000)]
    pub max_ticks: u64,

    /// JSON input script to replay instead of the autopilot
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Pace ticks in real time instead of running flat out
    #[arg(long)]
    pub realtime: bool,

    /// Write one JSON frame per tick to stdout
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Config file (if any) with command-line overrides applied, validated
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => read_config(path)?,
            None => Config::default(),
        };

        if let Some(mode) = self.mode {
            config.mode = mode.into();
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(win_score) = self.win_score {
            config.win_score = win_score;
        }

        config.validate().context("invalid game configuration")?;
        Ok(config)
    }
}

pub fn read_config(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse config {}", path.display()))
}
