//! Theme, palette and OKLCH color value types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::colors::Colors;
use super::mode::ColorMode;

/// OKLCH hue component, an angle in degrees (e.g. `"27.69230769230769"`).
pub type Hue = String;

/// OKLCH chroma component (e.g. `"0.25"`).
pub type Chroma = String;

/// OKLCH lightness component, as a percentage (e.g. `"100%"`).
pub type Lightness = String;

/// A named theme.
///
/// # Example
///
/// ```rust
/// use seyuna::theme::{default_theme, Theme};
///
/// let mut palette = default_theme().palette;
/// palette.colors.alpha = "12".to_string();
///
/// let theme = Theme::new("warm", palette);
/// assert_eq!(theme.name, "warm");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Name referenced by the `theme` field of a configuration.
    pub name: String,
    /// The color palette used by the theme.
    pub palette: Palette,
}

impl Theme {
    /// Creates a theme from a name and palette.
    pub fn new(name: impl Into<String>, palette: Palette) -> Self {
        Self {
            name: name.into(),
            palette,
        }
    }
}

/// A color palette defined in the OKLCH color model.
///
/// Hues are shared between modes; `light` and `dark` carry the lightness
/// and chroma adjustments for each mode. Both modes are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub colors: Colors,
    pub light: ModeSettings,
    pub dark: ModeSettings,
}

impl Palette {
    /// Returns the settings for a concrete color mode.
    pub fn settings(&self, mode: ColorMode) -> &ModeSettings {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }
}

/// Color settings for one mode (light or dark).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeSettings {
    /// Named colors for this mode.
    pub colors: ModeColors,
    /// Default lightness and chroma applied to hue roles in this mode.
    pub preferences: Preferences,
}

/// Mode-level lightness and chroma defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub lightness: Lightness,
    pub chroma: Chroma,
}

/// Named colors of a mode.
///
/// `background` and `textColor` are always present. Any other name is kept
/// in `extra` and written alongside them when serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeColors {
    pub background: Color,
    #[serde(rename = "textColor")]
    pub text_color: Color,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Color>,
}

impl ModeColors {
    /// Serialized name of the background slot.
    pub const BACKGROUND: &'static str = "background";
    /// Serialized name of the text color slot.
    pub const TEXT_COLOR: &'static str = "textColor";

    /// Creates mode colors with only the two required slots.
    pub fn new(background: Color, text_color: Color) -> Self {
        Self {
            background,
            text_color,
            extra: BTreeMap::new(),
        }
    }

    /// Looks up a color by its serialized name.
    pub fn get(&self, name: &str) -> Option<&Color> {
        match name {
            Self::BACKGROUND => Some(&self.background),
            Self::TEXT_COLOR => Some(&self.text_color),
            other => self.extra.get(other),
        }
    }

    /// Sets a color by its serialized name, returning the previous value.
    ///
    /// The required slots are addressed by name too, so they can never end
    /// up duplicated in `extra`.
    pub fn insert(&mut self, name: impl Into<String>, color: Color) -> Option<Color> {
        let name = name.into();
        match name.as_str() {
            Self::BACKGROUND => Some(std::mem::replace(&mut self.background, color)),
            Self::TEXT_COLOR => Some(std::mem::replace(&mut self.text_color, color)),
            _ => self.extra.insert(name, color),
        }
    }

    /// Number of named colors, required slots included.
    pub fn len(&self) -> usize {
        2 + self.extra.len()
    }

    /// Always false: the required slots are always present.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over `(name, color)` pairs, required slots first.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Color)> + '_ {
        [
            (Self::BACKGROUND, &self.background),
            (Self::TEXT_COLOR, &self.text_color),
        ]
        .into_iter()
        .chain(self.extra.iter().map(|(name, color)| (name.as_str(), color)))
    }
}

/// A color in the OKLCH model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub lightness: Lightness,
    pub chroma: Chroma,
    pub hue: Hue,
}

impl Color {
    /// Creates a color from its three components.
    pub fn new(
        lightness: impl Into<Lightness>,
        chroma: impl Into<Chroma>,
        hue: impl Into<Hue>,
    ) -> Self {
        Self {
            lightness: lightness.into(),
            chroma: chroma.into(),
            hue: hue.into(),
        }
    }

    /// Creates a gray with zero chroma and zero hue.
    pub fn achromatic(lightness: impl Into<Lightness>) -> Self {
        Self::new(lightness, "0", "0")
    }
}
