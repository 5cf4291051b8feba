//! Mode preference and its resolution to a concrete light or dark mode.

use std::fmt;
use std::str::FromStr;
use std::sync::{Mutex, PoisonError};

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A concrete color mode, used to pick between a palette's mode settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
}

/// The configured mode preference.
///
/// - `light` / `dark`: always use that mode.
/// - `system`: follow the operating system setting.
/// - `time`: light during the day, dark at night.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Light,
    Dark,
    #[default]
    System,
    Time,
}

/// First hour (inclusive) that `time` mode resolves to light.
pub const DAY_START_HOUR: u8 = 6;
/// First hour (inclusive) that `time` mode resolves to dark again.
pub const DAY_END_HOUR: u8 = 18;

impl Mode {
    /// All modes, in declared order.
    pub const ALL: [Mode; 4] = [Mode::Light, Mode::Dark, Mode::System, Mode::Time];

    /// The name used for this mode in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
            Mode::System => "system",
            Mode::Time => "time",
        }
    }

    /// Resolves the preference to a concrete mode.
    ///
    /// `hour` is the local hour of day (`0..24`) and is only consulted by
    /// [`Mode::Time`]. [`Mode::System`] asks the installed detector, see
    /// [`set_mode_detector`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use seyuna::theme::{ColorMode, Mode};
    ///
    /// assert_eq!(Mode::Dark.resolve_at(12), ColorMode::Dark);
    /// assert_eq!(Mode::Time.resolve_at(12), ColorMode::Light);
    /// assert_eq!(Mode::Time.resolve_at(23), ColorMode::Dark);
    /// ```
    pub fn resolve_at(self, hour: u8) -> ColorMode {
        match self {
            Mode::Light => ColorMode::Light,
            Mode::Dark => ColorMode::Dark,
            Mode::System => detect_color_mode(),
            Mode::Time => {
                if (DAY_START_HOUR..DAY_END_HOUR).contains(&(hour % 24)) {
                    ColorMode::Light
                } else {
                    ColorMode::Dark
                }
            }
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown mode name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mode '{0}' (expected light, dark, system or time)")]
pub struct ModeParseError(pub String);

impl FromStr for Mode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ModeParseError(s.to_string()))
    }
}

type ModeDetector = fn() -> ColorMode;

static MODE_DETECTOR: Lazy<Mutex<ModeDetector>> = Lazy::new(|| Mutex::new(os_mode_detector));

/// Overrides the detector used to resolve [`Mode::System`].
///
/// This is useful for testing or when the host already knows the mode.
pub fn set_mode_detector(detector: ModeDetector) {
    let mut guard = MODE_DETECTOR.lock().unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

/// Restores the operating system detector.
pub fn reset_mode_detector() {
    set_mode_detector(os_mode_detector);
}

pub(crate) fn detect_color_mode() -> ColorMode {
    let detector = MODE_DETECTOR.lock().unwrap_or_else(PoisonError::into_inner);
    (*detector)()
}

fn os_mode_detector() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        OsThemeMode::Light => ColorMode::Light,
    }
}
