//! Loading user configuration files.
//!
//! A user file holds a [`PartialConfig`]: any subset of the top-level keys.
//! The format is chosen by extension:
//!
//! | Extension         | Format |
//! |-------------------|--------|
//! | `.json`           | JSON   |
//! | `.yaml`, `.yml`   | YAML   |
//!
//! ```yaml
//! name: Atlas
//! mode: dark
//! spacing: 0.75
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

use super::config::Config;
use super::error::ConfigError;
use super::merge::{merge_seyuna_config, PartialConfig};

/// Recognized configuration file extensions and their formats.
pub const CONFIG_EXTENSIONS: &[(&str, ConfigFormat)] = &[
    ("json", ConfigFormat::Json),
    ("yaml", ConfigFormat::Yaml),
    ("yml", ConfigFormat::Yaml),
];

/// Serialization format of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Picks the format from a file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        CONFIG_EXTENSIONS
            .iter()
            .find(|(ext, _)| *ext == extension)
            .map(|(_, format)| *format)
    }
}

/// Parses a partial configuration from source text.
pub fn parse_partial_config(source: &str, format: ConfigFormat) -> Result<PartialConfig, ConfigError> {
    let partial = match format {
        ConfigFormat::Json => serde_json::from_str(source)?,
        ConfigFormat::Yaml => serde_yaml::from_str(source)?,
    };
    Ok(partial)
}

/// Reads and parses a partial configuration file.
pub fn load_partial_config(path: impl AsRef<Path>) -> Result<PartialConfig, ConfigError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), ?format, "loading seyuna config");
    parse_partial_config(&source, format)
}

/// Loads a user configuration file and merges it onto the defaults.
pub fn load_seyuna_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    load_partial_config(path).map(merge_seyuna_config)
}
