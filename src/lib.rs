//! # Seyuna - design system configuration and OKLCH themes
//!
//! Seyuna describes a front-end design system with two pieces of data:
//!
//! - [`theme`]: Themes built on the OKLCH color model. Thirteen hue roles
//!   share their hues across modes while light and dark modes set their own
//!   background, text color and lightness/chroma defaults.
//! - [`config`]: The application configuration (naming, breakpoints,
//!   spacing, themes, output path) and a shallow merge of user settings
//!   onto the defaults.
//!
//! ## Example
//!
//! ```rust
//! use seyuna::{merge_seyuna_config, PartialConfig};
//! use seyuna::theme::{ColorMode, Mode};
//!
//! let config = merge_seyuna_config(PartialConfig::new().name("Atlas").mode(Mode::Dark));
//!
//! let theme = config.active_theme().expect("default theme is seeded");
//! let dark = theme.palette.settings(config.mode.resolve_at(12));
//! assert_eq!(dark.colors.background.lightness, "0%");
//! assert_eq!(config.mode.resolve_at(12), ColorMode::Dark);
//! ```
//!
//! Merging is shallow: a user-supplied `breakpoints` or `themes` value
//! replaces the default one whole. See [`config::merge_seyuna_config`].

pub mod config;
pub mod theme;

pub use config::{
    default_config, load_seyuna_config, merge_seyuna_config, merge_seyuna_value, Breakpoints,
    Config, ConfigError, PartialConfig, DEFAULT_CONFIG,
};
pub use theme::{
    default_theme, Chroma, Color, ColorMode, Colors, Hue, Lightness, Mode, ModeSettings, Palette,
    Theme, DEFAULT_THEME,
};
