use std::path::{Path, PathBuf};

/// One recording and the directory its frames go to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordingJob {
    pub source: PathBuf,
    pub output_dir: PathBuf,
}

/// A recording whose frames were all written.
#[derive(Clone, Debug)]
pub struct ExtractedRecording {
    pub source: PathBuf,
    pub output_dir: PathBuf,
    pub frames_written: usize,
}

/// A recording that was skipped because extraction failed.
#[derive(Clone, Debug)]
pub struct FailedRecording {
    pub source: PathBuf,
    pub error: String,
}

/// Outcome of a batch run over an input tree.
#[derive(Clone, Debug, Default)]
pub struct BatchSummary {
    pub recordings: Vec<ExtractedRecording>,
    pub failures: Vec<FailedRecording>,
}

impl BatchSummary {
    pub fn total_frames(&self) -> usize {
        self.recordings.iter().map(|r| r.frames_written).sum()
    }
}

/// Progress callbacks for batch extraction.
///
/// Implementors can use this to drive progress bars or any other UI
/// feedback. All methods have default no-op implementations.
pub trait ProgressReporter {
    /// Extraction of `source` has started; `total_frames` is known once decoded.
    fn begin_recording(&self, _source: &Path, _total_frames: usize) {}

    /// `frames_done` frames of the current recording are on disk.
    fn advance(&self, _frames_done: usize) {}

    /// The current recording is finished (successfully or not).
    fn finish_recording(&self) {}
}

/// No-op progress reporter.
pub struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
