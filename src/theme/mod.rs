//! Theme model for OKLCH color themes.
//!
//! This module provides:
//!
//! - [`Theme`]: A named [`Palette`] of hue roles and light/dark settings
//! - [`Colors`] / [`HueRole`]: The thirteen hue roles and their hues
//! - [`ModeSettings`]: Named colors and lightness/chroma defaults for one mode
//! - [`Mode`] / [`ColorMode`]: The configured mode preference and its resolution
//! - [`DEFAULT_THEME`]: The built-in theme
//!
//! Color components are kept as strings so theme definitions serialize back
//! exactly as they were written (`"100%"`, `"27.69230769230769"`).

mod builtin;
mod colors;
mod mode;
#[allow(clippy::module_inception)]
mod theme;

pub use builtin::{default_theme, DEFAULT_THEME, DEFAULT_THEME_NAME};
pub use colors::{Colors, HueRole};
pub use mode::{
    reset_mode_detector, set_mode_detector, ColorMode, Mode, ModeParseError, DAY_END_HOUR,
    DAY_START_HOUR,
};
pub use theme::{
    Chroma, Color, Hue, Lightness, ModeColors, ModeSettings, Palette, Preferences, Theme,
};
