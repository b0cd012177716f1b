mod scanner;
mod types;

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::ExtractionConfig;
use crate::consts::FRAME_INDEX_WIDTH;
use crate::error::Result;
use crate::io::{FrameDecoder, ImageCodec, SpeDecoder, TiffCodec};
use crate::normalize::normalize_frame;

pub use scanner::{find_recordings, output_dir_for, scan_recordings, RecordingScan};
pub use types::{
    BatchSummary, ExtractedRecording, FailedRecording, NoOpReporter, ProgressReporter,
    RecordingJob,
};

/// File name of the frame at 1-based position `index`.
pub fn frame_filename(prefix: &str, index: usize, extension: &str) -> String {
    format!("{prefix}{index:0width$}.{extension}", width = FRAME_INDEX_WIDTH)
}

/// Create `dir` and its parents if absent.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    Ok(())
}

/// Splits recordings into one normalized image per frame.
pub struct FrameExtractor<D = SpeDecoder, C = TiffCodec> {
    decoder: D,
    codec: C,
    config: ExtractionConfig,
}

impl FrameExtractor {
    /// SPE in, 16-bit TIFF out.
    pub fn new(config: ExtractionConfig) -> Self {
        Self::with_backends(SpeDecoder, TiffCodec, config)
    }
}

impl<D: FrameDecoder, C: ImageCodec> FrameExtractor<D, C> {
    pub fn with_backends(decoder: D, codec: C, config: ExtractionConfig) -> Self {
        Self {
            decoder,
            codec,
            config,
        }
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Path of the frame at 1-based position `index` inside `output_dir`.
    pub fn frame_path(&self, output_dir: &Path, index: usize) -> PathBuf {
        output_dir.join(frame_filename(
            &self.config.frame_prefix,
            index,
            &self.config.output_extension,
        ))
    }

    /// Decode `recording`, normalize every frame and write it into `output_dir`.
    ///
    /// Numbering starts at 1 for each recording and follows stack order.
    /// Returns the number of frames written.
    pub fn extract_recording(
        &self,
        recording: &Path,
        output_dir: &Path,
        reporter: &dyn ProgressReporter,
    ) -> Result<usize> {
        ensure_output_dir(output_dir)?;
        info!(
            recording = %recording.display(),
            destination = %output_dir.display(),
            format = %self.config.output_extension,
            "Extracting frames"
        );

        let frames = self.decoder.decode(recording)?;
        let total = frames.len();
        info!(total_frames = total, "Recording decoded");
        reporter.begin_recording(recording, total);

        for (i, frame) in frames.iter().enumerate() {
            let normalized = normalize_frame(frame);
            let path = self.frame_path(output_dir, i + 1);
            self.codec.write_u16(&normalized.data, &path)?;
            debug!(path = %path.display(), pixel_type = %frame.pixel_type, "Frame written");
            reporter.advance(i + 1);
        }

        info!(
            frames_written = total,
            destination = %output_dir.display(),
            "Finished extracting frames"
        );
        Ok(total)
    }
}
