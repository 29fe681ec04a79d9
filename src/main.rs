//! Neon Pong entry point
//!
//! Runs a headless session. Each stdin line lists the keys held for one tick
//! (`w`, `s`, `up`, `down`, `r`, `q`); end of input quits. Window, drawing and
//! audio live in the host that embeds the library.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use neon_pong::input::LineInput;
use neon_pong::{
    GameConfig, JsonLinesRenderer, LogRenderer, Pacing, Session, SessionError, SessionSummary,
};

#[derive(Debug, Parser)]
#[command(
    name = "neon-pong",
    version,
    about = "Headless two-player Pong driven by key lines on stdin"
)]
struct Cli {
    /// Write every frame to stdout as a JSON line
    #[arg(long)]
    frames: bool,

    /// Run ticks back to back instead of at the tick rate
    #[arg(long)]
    fast: bool,
}

fn run(cli: &Cli) -> Result<SessionSummary, SessionError> {
    let config = GameConfig::default();
    let pacing = if cli.fast {
        Pacing::Unthrottled
    } else {
        Pacing::Fixed(config.tick_duration())
    };
    let input = LineInput::new(io::stdin().lock());

    if cli.frames {
        let renderer = JsonLinesRenderer::new(io::stdout().lock());
        Session::new(config, input, renderer)?
            .with_pacing(pacing)
            .run()
    } else {
        Session::new(config, input, LogRenderer::new())?
            .with_pacing(pacing)
            .run()
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    log::info!("Neon Pong (headless) starting...");
    match run(&cli) {
        Ok(summary) => {
            log::info!(
                "Session over after {} ticks, {} match(es) completed",
                summary.ticks,
                summary.matches_completed
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
