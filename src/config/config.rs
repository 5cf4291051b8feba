//! The application configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::breakpoints::Breakpoints;
use super::defaults::DEFAULT_CONFIG;
use crate::theme::{Mode, Theme};

/// Seyuna UI configuration.
///
/// A configuration is normally produced once by
/// [`merge_seyuna_config`](super::merge_seyuna_config) and read by the
/// styling pipeline that generates output under `path`.
///
/// `theme` should name one of `themes`, and `upscale` is usually one of the
/// breakpoint keys. Neither is checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Application name.
    pub name: String,
    /// Application slogan.
    pub slogan: String,
    /// Name of the active theme.
    pub theme: String,
    /// Mode preference.
    pub mode: Mode,
    /// Whether a CSS reset is applied.
    pub reset: bool,
    /// Responsive breakpoints.
    pub breakpoints: Breakpoints,
    /// Breakpoint from which content upscaling starts (e.g. `"_2xl"`).
    pub upscale: String,
    /// Base spacing unit, in rem.
    pub spacing: f64,
    /// Available themes.
    pub themes: Vec<Theme>,
    /// Directory generated files are written to.
    pub path: PathBuf,
}

impl Config {
    /// Returns the theme named by `theme`, if `themes` contains it.
    pub fn active_theme(&self) -> Option<&Theme> {
        self.themes.iter().find(|theme| theme.name == self.theme)
    }

    /// Returns the viewport threshold named by `upscale`.
    ///
    /// `None` when `upscale` does not name a viewport breakpoint.
    pub fn upscale_threshold(&self) -> Option<f64> {
        self.breakpoints.viewport.get(&self.upscale)
    }
}

impl Default for Config {
    fn default() -> Self {
        DEFAULT_CONFIG.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::default_theme;

    #[test]
    fn test_active_theme_found() {
        let config = Config::default();
        assert_eq!(config.active_theme().map(|t| t.name.as_str()), Some("default"));
    }

    #[test]
    fn test_active_theme_missing_is_allowed() {
        let config = Config {
            theme: "midnight".into(),
            ..Config::default()
        };
        assert!(config.active_theme().is_none());
    }

    #[test]
    fn test_active_theme_picks_named() {
        let mut midnight = default_theme();
        midnight.name = "midnight".into();
        midnight.palette.colors.alpha = "240".into();
        let config = Config {
            theme: "midnight".into(),
            themes: vec![default_theme(), midnight],
            ..Config::default()
        };
        assert_eq!(config.active_theme().unwrap().palette.colors.alpha, "240");
    }

    #[test]
    fn test_upscale_threshold() {
        let config = Config::default();
        assert_eq!(config.upscale_threshold(), Some(1920.0));

        let custom = Config {
            upscale: "ultrawide".into(),
            ..Config::default()
        };
        assert_eq!(custom.upscale_threshold(), None);
    }
}
