//! worklog library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod calendar;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod grid;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Track => cli::commands::track::handle(cfg),
        Commands::Record { .. } => cli::commands::record::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // per-invocation artifact overrides
    if let Some(custom) = &cli.workbook {
        cfg.workbook = custom.clone();
    }
    if let Some(custom) = &cli.calendar {
        cfg.calendar = custom.clone();
    }

    dispatch(&cli, &cfg)
}
