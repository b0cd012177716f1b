mod commands;
mod progress;
mod summary;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use indicatif::MultiProgress;
use tracing_subscriber::EnvFilter;

use crate::progress::SuspendingWriter;

#[derive(Parser)]
#[command(
    name = "spekit",
    about = "Split SPE recordings into TIFF frames and measure their SNR"
)]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for directories, extract frames, then measure SNR (default)
    Interactive,
    /// Extract every SPE recording under a directory tree to TIFF frames
    Extract(commands::extract::ExtractArgs),
    /// Compute per-image SNR for a directory and write the report
    Snr(commands::snr::SnrArgs),
    /// Show SPE file metadata
    Info(commands::info::InfoArgs),
    /// Print or save the default configuration
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });
    let progress = MultiProgress::new();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(SuspendingWriter::new(progress.clone()))
        .init();

    let config = commands::load_config(cli.config.as_deref())?;
    tracing::debug!(config = ?config, "Configuration loaded");

    match &cli.command {
        None | Some(Commands::Interactive) => commands::interactive::run(&config, &progress),
        Some(Commands::Extract(args)) => commands::extract::run(args, &config, &progress),
        Some(Commands::Snr(args)) => commands::snr::run(args, &config),
        Some(Commands::Info(args)) => commands::info::run(args),
        Some(Commands::Config(args)) => commands::config::run(args),
    }
}
