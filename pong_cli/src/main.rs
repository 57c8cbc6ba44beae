use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use game_core::Session;
use log::error;
use pong_cli::{
    AutopilotInput, Cli, Clock, FixedRateClock, InputSource, JsonRenderer, LogRenderer, Renderer,
    RunSummary, Runner, ScriptedInput, UnthrottledClock,
};

/// Autopilot paddles ignore offsets smaller than this
const AUTOPILOT_DEADZONE: f32 = 4.0;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(&Cli::parse()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<RunSummary> {
    let config = cli.load_config()?;

    let clock: Box<dyn Clock> = if cli.realtime {
        Box::new(FixedRateClock::new(config.tick_duration()))
    } else {
        Box::new(UnthrottledClock)
    };

    let input: Box<dyn InputSource> = match &cli.script {
        Some(path) => Box::new(ScriptedInput::load(path)?),
        None => Box::new(AutopilotInput::new(
            config.field_height / 2.0,
            AUTOPILOT_DEADZONE,
        )),
    };

    let renderer: Box<dyn Renderer> = if cli.json {
        Box::new(JsonRenderer::new(io::stdout().lock()))
    } else {
        Box::new(LogRenderer::new(u64::from(config.tick_rate)))
    };

    let session = Session::new(config)?;
    Runner::new(session, clock, input, renderer, cli.max_ticks).run()
}
