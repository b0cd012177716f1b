use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::SnrConfig;
use crate::error::Result;
use crate::io::{has_extension, ImageCodec, TiffCodec};

use super::snr::snr;

/// SNR of one scanned file.
#[derive(Clone, Debug, PartialEq)]
pub struct SnrRecord {
    pub filename: String,
    pub snr: f64,
}

/// Per-file SNR values of one directory and their summary statistics.
#[derive(Clone, Debug, Default)]
pub struct SnrReport {
    /// Records in scan order.
    pub records: Vec<SnrRecord>,
    /// Files that matched the extension but could not be decoded.
    pub skipped: Vec<String>,
    /// Mean SNR over `records`, 0 when there are none.
    pub average: f64,
    min_index: Option<usize>,
    max_index: Option<usize>,
}

impl SnrReport {
    /// Reduce `records` to average, minimum and maximum.
    ///
    /// Ties on minimum and maximum go to the first record in scan order.
    /// NaN values take part in the average but never win min or max.
    pub fn from_records(records: Vec<SnrRecord>, skipped: Vec<String>) -> Self {
        let average = if records.is_empty() {
            0.0
        } else {
            records.iter().map(|r| r.snr).sum::<f64>() / records.len() as f64
        };

        let mut min_index: Option<usize> = None;
        let mut max_index: Option<usize> = None;
        for (i, record) in records.iter().enumerate() {
            if record.snr.is_nan() {
                continue;
            }
            if min_index.is_none_or(|m| record.snr < records[m].snr) {
                min_index = Some(i);
            }
            if max_index.is_none_or(|m| record.snr > records[m].snr) {
                max_index = Some(i);
            }
        }

        Self {
            records,
            skipped,
            average,
            min_index,
            max_index,
        }
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn minimum_record(&self) -> Option<&SnrRecord> {
        self.min_index.map(|i| &self.records[i])
    }

    pub fn maximum_record(&self) -> Option<&SnrRecord> {
        self.max_index.map(|i| &self.records[i])
    }

    /// Smallest SNR, or +inf when nothing was measured.
    pub fn minimum(&self) -> f64 {
        self.minimum_record().map_or(f64::INFINITY, |r| r.snr)
    }

    /// Largest SNR, or -inf when nothing was measured.
    pub fn maximum(&self) -> f64 {
        self.maximum_record().map_or(f64::NEG_INFINITY, |r| r.snr)
    }

    /// Text form of the report: one line per file, a blank line, then the summary.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for record in &self.records {
            let _ = writeln!(out, "{}: SNR = {:.2}", record.filename, record.snr);
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "Average Signal-to-Noise Ratio (SNR): {:.2}", self.average);
        let _ = writeln!(out, "Minimum Signal-to-Noise Ratio (SNR): {:.2}", self.minimum());
        let _ = writeln!(out, "Maximum Signal-to-Noise Ratio (SNR): {:.2}", self.maximum());
        out
    }

    /// Write [`render`](Self::render) to `dir/filename`, returning the path.
    pub fn write_to(&self, dir: &Path, filename: &str) -> Result<PathBuf> {
        let path = dir.join(filename);
        std::fs::write(&path, self.render())?;
        info!(path = %path.display(), "SNR report saved");
        Ok(path)
    }
}

/// Compute SNR for every matching image directly inside `dir` (no recursion).
pub fn aggregate_directory(dir: &Path, config: &SnrConfig) -> Result<SnrReport> {
    aggregate_directory_with(dir, &config.image_extension, &TiffCodec)
}

/// [`aggregate_directory`] with an explicit extension and codec.
///
/// Entries are visited in file name order. Files that fail to decode are
/// skipped with a warning and excluded from every statistic.
pub fn aggregate_directory_with(
    dir: &Path,
    extension: &str,
    codec: &dyn ImageCodec,
) -> Result<SnrReport> {
    let mut entries: Vec<(String, PathBuf)> = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name() else {
            continue;
        };
        if path.is_file() && has_extension(name, extension) {
            entries.push((name.to_string_lossy().into_owned(), path));
        }
    }
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    let mut records = Vec::with_capacity(entries.len());
    let mut skipped = Vec::new();
    for (filename, path) in entries {
        match codec.read_unchanged(&path) {
            Ok(image) => records.push(SnrRecord {
                snr: snr(&image),
                filename,
            }),
            Err(e) => {
                warn!(file = %filename, error = %e, "Could not be loaded properly, skipping");
                skipped.push(filename);
            }
        }
    }

    Ok(SnrReport::from_records(records, skipped))
}
