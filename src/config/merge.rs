//! Shallow merge of user configuration onto the defaults.
//!
//! Merging is shallow: every top-level key the user supplies replaces the
//! default value for that key whole. Nested values such as `breakpoints` or
//! `themes` are never merged key by key, so supplying `breakpoints` discards
//! every default breakpoint.
//!
//! Every merge starts from [`DEFAULT_CONFIG`]. Merging a second partial
//! configuration does not build on the result of a previous merge.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use super::breakpoints::Breakpoints;
use super::config::Config;
use super::defaults::DEFAULT_CONFIG;
use crate::theme::{Mode, Theme};

/// A user configuration where every top-level key is optional.
///
/// # Example
///
/// ```rust
/// use seyuna::config::{merge_seyuna_config, PartialConfig};
/// use seyuna::theme::Mode;
///
/// let config = merge_seyuna_config(
///     PartialConfig::new().name("Atlas").mode(Mode::Dark),
/// );
/// assert_eq!(config.name, "Atlas");
/// assert_eq!(config.mode, Mode::Dark);
/// assert_eq!(config.slogan, "Another Seyuna App.");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slogan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakpoints: Option<Breakpoints>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upscale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub themes: Option<Vec<Theme>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl PartialConfig {
    /// Creates an empty partial configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn slogan(mut self, slogan: impl Into<String>) -> Self {
        self.slogan = Some(slogan.into());
        self
    }

    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn reset(mut self, reset: bool) -> Self {
        self.reset = Some(reset);
        self
    }

    pub fn breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = Some(breakpoints);
        self
    }

    pub fn upscale(mut self, upscale: impl Into<String>) -> Self {
        self.upscale = Some(upscale.into());
        self
    }

    pub fn spacing(mut self, spacing: f64) -> Self {
        self.spacing = Some(spacing);
        self
    }

    pub fn themes(mut self, themes: Vec<Theme>) -> Self {
        self.themes = Some(themes);
        self
    }

    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Names of the keys this partial configuration sets.
    pub fn present_keys(&self) -> Vec<&'static str> {
        [
            ("name", self.name.is_some()),
            ("slogan", self.slogan.is_some()),
            ("theme", self.theme.is_some()),
            ("mode", self.mode.is_some()),
            ("reset", self.reset.is_some()),
            ("breakpoints", self.breakpoints.is_some()),
            ("upscale", self.upscale.is_some()),
            ("spacing", self.spacing.is_some()),
            ("themes", self.themes.is_some()),
            ("path", self.path.is_some()),
        ]
        .into_iter()
        .filter_map(|(key, present)| present.then_some(key))
        .collect()
    }
}

impl From<Config> for PartialConfig {
    fn from(config: Config) -> Self {
        Self {
            name: Some(config.name),
            slogan: Some(config.slogan),
            theme: Some(config.theme),
            mode: Some(config.mode),
            reset: Some(config.reset),
            breakpoints: Some(config.breakpoints),
            upscale: Some(config.upscale),
            spacing: Some(config.spacing),
            themes: Some(config.themes),
            path: Some(config.path),
        }
    }
}

/// Merges a user configuration onto [`DEFAULT_CONFIG`].
///
/// Each key set in `config` replaces the default value whole; every other
/// key keeps its default. Values are not validated. Returns a new
/// configuration; the defaults are never modified.
pub fn merge_seyuna_config(config: PartialConfig) -> Config {
    debug!(overrides = ?config.present_keys(), "merging seyuna config onto defaults");

    let defaults = &*DEFAULT_CONFIG;
    Config {
        name: config.name.unwrap_or_else(|| defaults.name.clone()),
        slogan: config.slogan.unwrap_or_else(|| defaults.slogan.clone()),
        theme: config.theme.unwrap_or_else(|| defaults.theme.clone()),
        mode: config.mode.unwrap_or(defaults.mode),
        reset: config.reset.unwrap_or(defaults.reset),
        breakpoints: config
            .breakpoints
            .unwrap_or_else(|| defaults.breakpoints.clone()),
        upscale: config.upscale.unwrap_or_else(|| defaults.upscale.clone()),
        spacing: config.spacing.unwrap_or(defaults.spacing),
        themes: config.themes.unwrap_or_else(|| defaults.themes.clone()),
        path: config.path.unwrap_or_else(|| defaults.path.clone()),
    }
}

/// Merges an untyped user configuration onto the JSON form of
/// [`DEFAULT_CONFIG`].
///
/// Every key of an object input replaces the default key whole, including
/// keys the [`Config`] type does not know. Nothing is validated, so the
/// result may not deserialize into a [`Config`]. Non-object input leaves
/// the defaults unchanged.
///
/// # Example
///
/// ```rust
/// use seyuna::config::merge_seyuna_value;
/// use serde_json::json;
///
/// let merged = merge_seyuna_value(&json!({ "breakpoints": { "viewport": { "xs": 1 } } }));
/// assert_eq!(merged["breakpoints"], json!({ "viewport": { "xs": 1 } }));
/// assert_eq!(merged["name"], "Seyuna");
/// ```
pub fn merge_seyuna_value(config: &Value) -> Value {
    let mut merged = default_config_object();

    match config {
        Value::Object(overrides) => {
            debug!(
                overrides = ?overrides.keys().collect::<Vec<_>>(),
                "merging untyped seyuna config onto defaults"
            );
            for (key, value) in overrides {
                merged.insert(key.clone(), value.clone());
            }
        }
        other => {
            debug!(input = %other, "ignoring non-object seyuna config");
        }
    }

    Value::Object(merged)
}

fn default_config_object() -> Map<String, Value> {
    match serde_json::to_value(&*DEFAULT_CONFIG) {
        Ok(Value::Object(object)) => object,
        _ => Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{default_config, BreakpointScale};
    use serde_json::json;

    #[test]
    fn test_empty_merge_is_default() {
        assert_eq!(merge_seyuna_config(PartialConfig::new()), default_config());
    }

    #[test]
    fn test_scalar_override() {
        let config = merge_seyuna_config(PartialConfig::new().spacing(0.5).reset(false));
        assert_eq!(config.spacing, 0.5);
        assert!(!config.reset);
        assert_eq!(config.name, "Seyuna");
    }

    #[test]
    fn test_breakpoints_replaced_whole() {
        let mut viewport = BreakpointScale::from_thresholds([1.0; 9]);
        viewport.insert("tablet", 900.0);
        let container = BreakpointScale::from_thresholds([2.0; 9]);
        let breakpoints = Breakpoints {
            viewport,
            container,
        };

        let config = merge_seyuna_config(PartialConfig::new().breakpoints(breakpoints.clone()));
        assert_eq!(config.breakpoints, breakpoints);
    }

    #[test]
    fn test_themes_replaced_not_appended() {
        let mut custom = crate::theme::default_theme();
        custom.name = "custom".into();
        let config = merge_seyuna_config(PartialConfig::new().themes(vec![custom]));
        assert_eq!(config.themes.len(), 1);
        assert_eq!(config.themes[0].name, "custom");
        assert!(config.active_theme().is_none());
    }

    #[test]
    fn test_present_keys() {
        let partial = PartialConfig::new().name("x").path("./out");
        assert_eq!(partial.present_keys(), ["name", "path"]);
        assert!(PartialConfig::new().present_keys().is_empty());
    }

    #[test]
    fn test_full_config_overrides_everything() {
        let mut full = default_config();
        full.name = "Full".into();
        full.mode = crate::theme::Mode::Time;
        let partial = PartialConfig::from(full.clone());
        assert_eq!(partial.present_keys().len(), 10);
        assert_eq!(merge_seyuna_config(partial), full);
    }

    #[test]
    fn test_partial_deserialize_missing_keys() {
        let partial: PartialConfig =
            serde_json::from_value(json!({ "name": "Atlas", "mode": "dark" })).unwrap();
        assert_eq!(partial.present_keys(), ["name", "mode"]);
    }

    #[test]
    fn test_partial_serialize_skips_absent() {
        let value = serde_json::to_value(PartialConfig::new().slogan("hi")).unwrap();
        assert_eq!(value, json!({ "slogan": "hi" }));
    }

    #[test]
    fn test_value_empty_object_is_default() {
        let merged = merge_seyuna_value(&json!({}));
        assert_eq!(merged, serde_json::to_value(default_config()).unwrap());
    }

    #[test]
    fn test_value_breakpoints_shallow() {
        let merged = merge_seyuna_value(&json!({ "breakpoints": { "viewport": { "xs": 1 } } }));
        assert_eq!(merged["breakpoints"], json!({ "viewport": { "xs": 1 } }));
        assert!(merged["breakpoints"].get("container").is_none());
    }

    #[test]
    fn test_value_passes_through_unknown_and_malformed() {
        let merged = merge_seyuna_value(&json!({ "accent": "teal", "spacing": "wide" }));
        assert_eq!(merged["accent"], "teal");
        assert_eq!(merged["spacing"], "wide");
        assert!(serde_json::from_value::<Config>(merged).is_err());
    }

    #[test]
    fn test_value_non_object_keeps_defaults() {
        let merged = merge_seyuna_value(&json!([1, 2, 3]));
        assert_eq!(merged, serde_json::to_value(default_config()).unwrap());
    }

    #[test]
    fn test_value_does_not_mutate_input() {
        let input = json!({ "name": "Atlas" });
        let before = input.clone();
        let _ = merge_seyuna_value(&input);
        assert_eq!(input, before);
    }
}
