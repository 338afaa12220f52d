//! Runtime configuration for the `blockfall` binary.

use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use crate::types::DEFAULT_TICK_MS;

#[derive(Parser, Debug, Clone)]
#[command(name = "blockfall", version, about = "Falling-block puzzle in the terminal")]
pub struct Args {
    /// Gravity interval in milliseconds.
    #[arg(long, default_value_t = DEFAULT_TICK_MS, value_parser = clap::value_parser!(u32).range(1..))]
    pub tick_ms: u32,

    /// Seed for the piece sequence. Omit for a random session.
    #[arg(long)]
    pub seed: Option<u64>,

    /// File holding the best score as decimal text.
    #[arg(long, value_name = "PATH", default_value = "highscore.txt")]
    pub high_score_file: PathBuf,

    /// Write logs to this file (filtered by RUST_LOG, default info).
    /// The terminal is in raw mode, so logging is off without it.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms as u64)
    }
}

/// Initialise `env_logger` for the session.
pub fn init_logging(args: &Args) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    match &args.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("create log file {}", path.display()))?;
            builder
                .filter_level(LevelFilter::Info)
                .parse_default_env()
                .target(env_logger::Target::Pipe(Box::new(file)));
        }
        None => {
            builder.filter_level(LevelFilter::Off);
        }
    }
    builder.try_init().context("initialise logger")?;
    Ok(())
}
