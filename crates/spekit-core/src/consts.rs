/// Full scale of the unsigned 16-bit output range.
pub const U16_FULL_SCALE: f64 = 65535.0;

/// Default extension (without dot) of multi-frame recordings.
pub const DEFAULT_RECORDING_EXTENSION: &str = "spe";

/// Default extension (without dot) of extracted single-frame images.
pub const DEFAULT_OUTPUT_EXTENSION: &str = "tiff";

/// Default file name prefix for extracted frames.
pub const DEFAULT_FRAME_PREFIX: &str = "frame_";

/// Minimum digit count of the 1-based frame number in output file names.
pub const FRAME_INDEX_WIDTH: usize = 4;

/// Default name of the SNR report written into the scanned directory.
pub const DEFAULT_REPORT_FILENAME: &str = "snr_average_min_max.txt";
