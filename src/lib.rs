//! orkpi library root.
//! Exposes the CLI parser, the high-level run() function and the
//! ingest / core / export layers used by the binary and the tests.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod ingest;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher. `init` and `config` work on the file itself,
/// the other commands read it once.
pub fn dispatch(cli: &Cli, cfg_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { force } => cli::commands::init::handle(cfg_path, *force),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg_path),
        Commands::Categories { .. } => {
            cli::commands::categories::handle(&cli.command, &Config::load(cfg_path)?)
        }
        Commands::Report { .. } => {
            cli::commands::report::handle(&cli.command, &Config::load(cfg_path)?)
        }
        Commands::Export { .. } => {
            cli::commands::export::handle(&cli.command, &Config::load(cfg_path)?)
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // try_init: a second call (tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let custom = cli.config.as_deref().map(utils::path::expand_tilde);
    let cfg_path = Config::resolve_path(custom.as_deref());
    tracing::debug!(config = %cfg_path.display(), "starting");

    dispatch(&cli, &cfg_path)
}
