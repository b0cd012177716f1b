use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_FRAME_PREFIX, DEFAULT_OUTPUT_EXTENSION, DEFAULT_RECORDING_EXTENSION,
    DEFAULT_REPORT_FILENAME,
};
use crate::error::{Result, SpekitError};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub snr: SnrConfig,
}

impl AppConfig {
    /// Read and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)
            .map_err(|e| SpekitError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.extraction.validate()?;
        self.snr.validate()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Extension (without dot) identifying recordings, matched case-insensitively.
    pub recording_extension: String,
    /// Extension (without dot) of the per-frame images.
    pub output_extension: String,
    /// File name prefix placed before the zero-padded frame number.
    pub frame_prefix: String,
    /// Log and skip recordings that fail to decode instead of aborting the batch.
    pub skip_failed_recordings: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            recording_extension: DEFAULT_RECORDING_EXTENSION.into(),
            output_extension: DEFAULT_OUTPUT_EXTENSION.into(),
            frame_prefix: DEFAULT_FRAME_PREFIX.into(),
            skip_failed_recordings: true,
        }
    }
}

impl ExtractionConfig {
    pub fn validate(&self) -> Result<()> {
        validate_extension("extraction.recording_extension", &self.recording_extension)?;
        validate_extension("extraction.output_extension", &self.output_extension)?;
        validate_file_component("extraction.frame_prefix", &self.frame_prefix)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnrConfig {
    /// Extension (without dot) of images considered by the SNR scan.
    pub image_extension: String,
    /// Report file name, written inside the scanned directory.
    pub report_filename: String,
}

impl Default for SnrConfig {
    fn default() -> Self {
        Self {
            image_extension: DEFAULT_OUTPUT_EXTENSION.into(),
            report_filename: DEFAULT_REPORT_FILENAME.into(),
        }
    }
}

impl SnrConfig {
    pub fn validate(&self) -> Result<()> {
        validate_extension("snr.image_extension", &self.image_extension)?;
        validate_file_component("snr.report_filename", &self.report_filename)
    }
}

fn validate_extension(field: &str, ext: &str) -> Result<()> {
    if ext.starts_with('.') {
        return Err(SpekitError::Config(format!(
            "{field} must not start with '.': {ext:?}"
        )));
    }
    validate_file_component(field, ext)
}

fn validate_file_component(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(SpekitError::Config(format!("{field} must not be empty")));
    }
    if value.contains(['/', '\\']) {
        return Err(SpekitError::Config(format!(
            "{field} must not contain path separators: {value:?}"
        )));
    }
    Ok(())
}
