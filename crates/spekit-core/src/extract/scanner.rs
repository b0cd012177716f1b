use std::path::{Path, PathBuf};

use tracing::{error, info, warn};
use walkdir::WalkDir;

use crate::error::{Result, SpekitError};
use crate::io::{has_extension, FrameDecoder, ImageCodec};

use super::types::{
    BatchSummary, ExtractedRecording, FailedRecording, ProgressReporter, RecordingJob,
};
use super::FrameExtractor;

/// Output directory for `recording`: its directory relative to `input_root`,
/// plus its file stem, joined onto `output_root`.
pub fn output_dir_for(input_root: &Path, output_root: &Path, recording: &Path) -> PathBuf {
    let parent = recording.parent().unwrap_or(input_root);
    let relative = parent.strip_prefix(input_root).unwrap_or(Path::new(""));
    let stem = recording.file_stem().unwrap_or_default();
    output_root.join(relative).join(stem)
}

/// Result of walking an input tree: the recordings found, plus the entries
/// below the root that could not be read.
#[derive(Debug, Default)]
pub struct RecordingScan {
    pub jobs: Vec<RecordingJob>,
    pub errors: Vec<walkdir::Error>,
}

/// Recursively find every file under `input_root` whose name ends in
/// `.<extension>` (case-insensitive), sorted by path.
///
/// Symbolic links are followed. An unreadable root is an error; unreadable
/// entries below it (broken links, permission errors, link loops) are
/// collected in [`RecordingScan::errors`] and the walk continues.
pub fn scan_recordings(
    input_root: &Path,
    output_root: &Path,
    extension: &str,
) -> Result<RecordingScan> {
    let mut scan = RecordingScan::default();
    for entry in WalkDir::new(input_root).follow_links(true).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() > 0 => {
                scan.errors.push(e);
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if has_extension(entry.file_name(), extension) {
            let source = entry.into_path();
            let output_dir = output_dir_for(input_root, output_root, &source);
            scan.jobs.push(RecordingJob { source, output_dir });
        }
    }
    Ok(scan)
}

/// Like [`scan_recordings`], but any unreadable entry fails the whole scan.
pub fn find_recordings(
    input_root: &Path,
    output_root: &Path,
    extension: &str,
) -> Result<Vec<RecordingJob>> {
    let mut scan = scan_recordings(input_root, output_root, extension)?;
    if !scan.errors.is_empty() {
        return Err(scan.errors.swap_remove(0).into());
    }
    Ok(scan.jobs)
}

impl<D: FrameDecoder, C: ImageCodec> FrameExtractor<D, C> {
    /// Extract every recording under `input_root` into a mirrored tree under
    /// `output_root`.
    ///
    /// With `skip_failed_recordings` set, a recording that fails, or a tree
    /// entry that cannot be read, is logged and listed in
    /// [`BatchSummary::failures`]; otherwise the first failure is returned.
    pub fn process_all(
        &self,
        input_root: &Path,
        output_root: &Path,
        reporter: &dyn ProgressReporter,
    ) -> Result<BatchSummary> {
        let skip = self.config().skip_failed_recordings;
        let scan = scan_recordings(input_root, output_root, &self.config().recording_extension)?;
        info!(
            input = %input_root.display(),
            output = %output_root.display(),
            recordings = scan.jobs.len(),
            unreadable = scan.errors.len(),
            "Scanning for recordings"
        );

        let mut summary = BatchSummary::default();
        for walk_error in scan.errors {
            if !skip {
                return Err(SpekitError::Walk(walk_error));
            }
            let source = walk_error
                .path()
                .map_or_else(|| input_root.to_path_buf(), Path::to_path_buf);
            warn!(entry = %source.display(), error = %walk_error, "Skipping unreadable entry");
            summary.failures.push(FailedRecording {
                source,
                error: walk_error.to_string(),
            });
        }

        for job in scan.jobs {
            let outcome = self.extract_recording(&job.source, &job.output_dir, reporter);
            reporter.finish_recording();
            match outcome {
                Ok(frames_written) => summary.recordings.push(ExtractedRecording {
                    source: job.source,
                    output_dir: job.output_dir,
                    frames_written,
                }),
                Err(e) if skip => {
                    error!(recording = %job.source.display(), error = %e, "Skipping recording");
                    summary.failures.push(FailedRecording {
                        source: job.source,
                        error: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            recordings = summary.recordings.len(),
            failed = summary.failures.len(),
            frames = summary.total_frames(),
            "Batch extraction complete"
        );
        Ok(summary)
    }
}
