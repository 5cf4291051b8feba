//! The built-in default theme.

use once_cell::sync::Lazy;

use super::colors::Colors;
use super::theme::{Color, ModeColors, ModeSettings, Palette, Preferences, Theme};

/// Name of the built-in theme.
pub const DEFAULT_THEME_NAME: &str = "default";

/// The built-in theme, seeded into every default configuration.
///
/// The thirteen hue roles are spread evenly around the wheel in steps of
/// 360/13 degrees. Light mode is black text on white, dark mode is the
/// inverse, and both are achromatic.
pub static DEFAULT_THEME: Lazy<Theme> = Lazy::new(build_default_theme);

/// Returns an owned copy of [`DEFAULT_THEME`].
pub fn default_theme() -> Theme {
    DEFAULT_THEME.clone()
}

fn build_default_theme() -> Theme {
    let colors = Colors {
        alpha: "0".into(),
        beta: "27.69230769230769".into(),
        gamma: "55.38461538461538".into(),
        delta: "83.07692307692307".into(),
        epsilon: "110.7692307692308".into(),
        zeta: "138.4615384615385".into(),
        eta: "166.1538461538461".into(),
        theta: "193.8461538461538".into(),
        iota: "221.5384615384615".into(),
        kappa: "249.2307692307692".into(),
        lambda: "276.9230769230769".into(),
        mu: "304.6153846153846".into(),
        nu: "332.3076923076923".into(),
    };

    let light = ModeSettings {
        colors: ModeColors::new(Color::achromatic("100%"), Color::achromatic("0%")),
        preferences: Preferences {
            lightness: "60%".into(),
            chroma: "0.25".into(),
        },
    };

    let dark = ModeSettings {
        colors: ModeColors::new(Color::achromatic("0%"), Color::achromatic("100%")),
        preferences: Preferences {
            lightness: "70%".into(),
            chroma: "0.25".into(),
        },
    };

    Theme::new(DEFAULT_THEME_NAME, Palette { colors, light, dark })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::HueRole;

    #[test]
    fn test_hues_evenly_spaced() {
        let step = 360.0 / HueRole::ALL.len() as f64;
        for (i, (role, hue)) in DEFAULT_THEME.palette.colors.iter().enumerate() {
            let degrees: f64 = hue.parse().unwrap();
            assert!((0.0..360.0).contains(&degrees), "{role} out of range");
            assert!(
                (degrees - step * i as f64).abs() < 1e-9,
                "{role} = {degrees}, expected {}",
                step * i as f64
            );
        }
    }

    #[test]
    fn test_modes_invert() {
        let palette = &DEFAULT_THEME.palette;
        assert_eq!(palette.light.colors.background, palette.dark.colors.text_color);
        assert_eq!(palette.light.colors.text_color, palette.dark.colors.background);
        assert_eq!(palette.light.colors.background.lightness, "100%");
        assert_eq!(palette.dark.colors.background.lightness, "0%");
    }

    #[test]
    fn test_preferences() {
        let palette = &DEFAULT_THEME.palette;
        assert_eq!(palette.light.preferences.lightness, "60%");
        assert_eq!(palette.dark.preferences.lightness, "70%");
        assert_eq!(palette.light.preferences.chroma, "0.25");
        assert_eq!(palette.dark.preferences.chroma, "0.25");
    }

    #[test]
    fn test_default_theme_is_fresh_copy() {
        let mut theme = default_theme();
        theme.name = "changed".into();
        assert_eq!(DEFAULT_THEME.name, DEFAULT_THEME_NAME);
    }
}
