use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pt_cli::commands::{refresh, status, times};
use pt_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let now = Local::now().naive_local();
    let mut stdout = std::io::stdout().lock();

    match &cli.command {
        None | Some(Commands::Status) => status::run(&mut stdout, &config, now, cli.short)?,
        Some(Commands::Times { json }) => times::run(&mut stdout, &config, now, *json)?,
        Some(Commands::Refresh) => refresh::run(&mut stdout, &config)?,
    }

    Ok(())
}
