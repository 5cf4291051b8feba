//! Application configuration and shallow merging.
//!
//! This module provides:
//!
//! - [`Config`]: The full configuration consumed by the styling pipeline
//! - [`Breakpoints`] / [`BreakpointScale`]: Viewport and container thresholds
//! - [`DEFAULT_CONFIG`]: The defaults every merge starts from
//! - [`merge_seyuna_config`]: Shallow merge of a [`PartialConfig`] onto the defaults
//! - [`merge_seyuna_value`]: The same merge for untyped JSON input
//! - [`load_seyuna_config`]: Read a JSON or YAML file and merge it
//!
//! # Example
//!
//! ```rust
//! use seyuna::config::{merge_seyuna_config, PartialConfig};
//!
//! let config = merge_seyuna_config(PartialConfig::new().path("./dist/styles"));
//! assert_eq!(config.path.to_str(), Some("./dist/styles"));
//! assert_eq!(config.themes.len(), 1);
//! ```

mod breakpoints;
#[allow(clippy::module_inception)]
mod config;
mod defaults;
mod error;
mod loader;
mod merge;

pub use breakpoints::{BreakpointKey, BreakpointScale, Breakpoints};
pub use config::Config;
pub use defaults::{
    default_config, DEFAULT_CONFIG, DEFAULT_CONTAINER_BREAKPOINTS, DEFAULT_VIEWPORT_BREAKPOINTS,
};
pub use error::ConfigError;
pub use loader::{
    load_partial_config, load_seyuna_config, parse_partial_config, ConfigFormat,
    CONFIG_EXTENSIONS,
};
pub use merge::{merge_seyuna_config, merge_seyuna_value, PartialConfig};
