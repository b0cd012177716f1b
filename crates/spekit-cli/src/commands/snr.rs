use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use spekit_core::config::AppConfig;
use spekit_core::quality::aggregate_directory;

use super::require_dir;
use crate::summary::print_snr_report;

#[derive(Args)]
pub struct SnrArgs {
    /// Directory of TIFF frames (not searched recursively)
    pub dir: PathBuf,

    /// Print the report without writing the report file
    #[arg(long)]
    pub no_save: bool,
}

pub fn run(args: &SnrArgs, config: &AppConfig) -> Result<()> {
    require_dir(&args.dir)?;
    measure_directory(&args.dir, config, !args.no_save)
}

/// Aggregate SNR over `dir`, print the result and optionally persist it.
pub fn measure_directory(dir: &Path, config: &AppConfig, save: bool) -> Result<()> {
    let report = aggregate_directory(dir, &config.snr)
        .with_context(|| format!("Failed to scan {}", dir.display()))?;
    print_snr_report(&report);

    if save {
        let path = report
            .write_to(dir, &config.snr.report_filename)
            .with_context(|| format!("Failed to write SNR report into {}", dir.display()))?;
        println!("SNR values and statistics saved to {}", path.display());
    }
    Ok(())
}
