//! The default configuration.

use std::path::PathBuf;

use once_cell::sync::Lazy;

use super::breakpoints::{BreakpointScale, Breakpoints};
use super::config::Config;
use crate::theme::{default_theme, Mode, DEFAULT_THEME_NAME};

/// Viewport thresholds in pixels, `xs` through `_5xl`.
pub const DEFAULT_VIEWPORT_BREAKPOINTS: [f64; 9] = [
    576.0, 768.0, 992.0, 1200.0, 1600.0, 1920.0, 2560.0, 3200.0, 3840.0,
];

/// Container thresholds in rem, `xs` through `_5xl`.
pub const DEFAULT_CONTAINER_BREAKPOINTS: [f64; 9] =
    [10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 80.0, 100.0, 120.0];

/// The default configuration that user configuration is merged onto.
pub static DEFAULT_CONFIG: Lazy<Config> = Lazy::new(build_default_config);

/// Returns an owned copy of [`DEFAULT_CONFIG`].
pub fn default_config() -> Config {
    DEFAULT_CONFIG.clone()
}

fn build_default_config() -> Config {
    Config {
        name: "Seyuna".into(),
        slogan: "Another Seyuna App.".into(),
        theme: DEFAULT_THEME_NAME.into(),
        mode: Mode::System,
        reset: true,
        breakpoints: Breakpoints {
            viewport: BreakpointScale::from_thresholds(DEFAULT_VIEWPORT_BREAKPOINTS),
            container: BreakpointScale::from_thresholds(DEFAULT_CONTAINER_BREAKPOINTS),
        },
        upscale: "_2xl".into(),
        spacing: 1.0,
        themes: vec![default_theme()],
        path: PathBuf::from("./styles"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BreakpointKey;
    use crate::theme::DEFAULT_THEME;

    #[test]
    fn test_scalars() {
        let config = default_config();
        assert_eq!(config.name, "Seyuna");
        assert_eq!(config.slogan, "Another Seyuna App.");
        assert_eq!(config.theme, "default");
        assert_eq!(config.mode, Mode::System);
        assert!(config.reset);
        assert_eq!(config.upscale, "_2xl");
        assert_eq!(config.spacing, 1.0);
        assert_eq!(config.path, PathBuf::from("./styles"));
    }

    #[test]
    fn test_themes_seeded_with_default() {
        assert_eq!(DEFAULT_CONFIG.themes, vec![DEFAULT_THEME.clone()]);
    }

    #[test]
    fn test_breakpoints_strictly_increasing() {
        for scale in [
            &DEFAULT_CONFIG.breakpoints.viewport,
            &DEFAULT_CONFIG.breakpoints.container,
        ] {
            let values: Vec<f64> = BreakpointKey::ALL
                .into_iter()
                .map(|key| scale.threshold(key))
                .collect();
            assert!(values.windows(2).all(|pair| pair[0] < pair[1]), "{values:?}");
            assert!(scale.extra.is_empty());
        }
    }

    #[test]
    fn test_breakpoint_ranges() {
        let breakpoints = &DEFAULT_CONFIG.breakpoints;
        assert_eq!(breakpoints.viewport.xs, 576.0);
        assert_eq!(breakpoints.viewport.xl5, 3840.0);
        assert_eq!(breakpoints.container.xs, 10.0);
        assert_eq!(breakpoints.container.xl5, 120.0);
    }
}
