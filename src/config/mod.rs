pub mod defs;

use std::fs;
use std::path::Path;

use thiserror::Error;

pub use crate::config::defs::{AppConfig, DesignDefaults, ToolPaths};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Loads a TOML config file, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(AppConfig::default());
    };
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_string_lossy().to_string(),
        source,
    })?;
    let config: AppConfig = toml::from_str(&text)?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

#[cfg(test)]
#[path = "../../tests/src_inline/config/mod.rs"]
mod tests;
