//! # Dashboard Configuration
//!
//! The dashboard and this CLI share `psm-dashboard-config.json`. Only the
//! `psm_reqs` key is read here; other keys belong to the dashboard and are
//! ignored.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Default configuration file name, looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "psm-dashboard-config.json";

/// The subset of the dashboard configuration this tool needs.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Path to the RTM spreadsheet.
    pub psm_reqs: PathBuf,
}

impl DashboardConfig {
    /// Load the configuration from `path`.
    ///
    /// A relative `psm_reqs` is resolved against the directory holding the
    /// configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let mut config: DashboardConfig = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;

        if config.psm_reqs.is_relative() {
            if let Some(dir) = path.parent() {
                config.psm_reqs = dir.join(&config.psm_reqs);
            }
        }
        Ok(config)
    }
}

/// Work out which RTM file to read: an explicit `--reqs` wins, otherwise the
/// `psm_reqs` entry of the configuration file.
pub fn resolve_reqs_path(reqs: Option<&Path>, config: Option<&Path>) -> Result<PathBuf> {
    if let Some(reqs) = reqs {
        return Ok(reqs.to_path_buf());
    }
    let config_path = config.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
    let config = DashboardConfig::load(config_path)?;
    tracing::debug!(
        config = %config_path.display(),
        psm_reqs = %config.psm_reqs.display(),
        "loaded dashboard configuration"
    );
    Ok(config.psm_reqs)
}
