//! Configuration loading errors.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a user configuration file cannot be loaded.
///
/// Merging itself never fails; these errors come from reading and parsing
/// the user's file before the merge.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension does not name a supported format.
    #[error("unsupported config format for '{}' (expected .json, .yaml or .yml)", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// The file is not valid JSON for a configuration.
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// The file is not valid YAML for a configuration.
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_display() {
        let err = ConfigError::UnsupportedFormat {
            path: PathBuf::from("seyuna.toml"),
        };
        let msg = err.to_string();
        assert!(msg.contains("seyuna.toml"));
        assert!(msg.contains(".yaml"));
    }

    #[test]
    fn test_io_error_display() {
        let err = ConfigError::Io {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("missing.json"));
        assert!(msg.contains("not found"));
    }
}
