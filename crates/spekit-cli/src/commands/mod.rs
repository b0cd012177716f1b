pub mod config;
pub mod extract;
pub mod info;
pub mod interactive;
pub mod snr;

use std::path::Path;

use anyhow::{Context, Result};
use spekit_core::config::AppConfig;

/// Load the config file if one was given, otherwise use defaults.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(AppConfig::default()),
    }
}

/// Fail unless `path` is an existing directory.
pub fn require_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        anyhow::bail!("The specified path does not exist: {}", path.display());
    }
    Ok(())
}
