use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use spekit_core::config::AppConfig;
use spekit_core::extract::{BatchSummary, FrameExtractor, ProgressReporter};

use super::require_dir;
use crate::summary::print_batch_summary;

#[derive(Args)]
pub struct ExtractArgs {
    /// Directory tree containing SPE recordings
    pub input: PathBuf,

    /// Directory receiving one sub-directory of TIFF frames per recording
    pub output: PathBuf,
}

pub fn run(args: &ExtractArgs, config: &AppConfig, progress: &MultiProgress) -> Result<()> {
    require_dir(&args.input)?;
    require_dir(&args.output)?;
    let summary = extract_tree(&args.input, &args.output, config, progress)?;
    print_batch_summary(&summary);
    Ok(())
}

/// Run the batch extraction with a per-recording progress bar.
///
/// The bar lives in `progress`, which the log writer suspends around each record.
pub fn extract_tree(
    input: &Path,
    output: &Path,
    config: &AppConfig,
    progress: &MultiProgress,
) -> Result<BatchSummary> {
    let extractor = FrameExtractor::new(config.extraction.clone());
    let reporter = BarReporter::new(progress)?;
    let result = extractor.process_all(input, output, &reporter);
    reporter.bar.finish_and_clear();
    progress.remove(&reporter.bar);
    Ok(result?)
}

struct BarReporter {
    bar: ProgressBar,
}

impl BarReporter {
    fn new(progress: &MultiProgress) -> Result<Self> {
        let bar = progress.add(ProgressBar::new(0));
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{bar:40}] {pos}/{len}")?
                .progress_chars("=> "),
        );
        Ok(Self { bar })
    }
}

impl ProgressReporter for BarReporter {
    fn begin_recording(&self, source: &Path, total_frames: usize) {
        let name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.bar.reset();
        self.bar.set_length(total_frames as u64);
        self.bar.set_message(name);
    }

    fn advance(&self, frames_done: usize) {
        self.bar.set_position(frames_done as u64);
    }
}
