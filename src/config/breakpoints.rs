//! Responsive breakpoint scales.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the nine named breakpoint sizes, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BreakpointKey {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xl2,
    Xl3,
    Xl4,
    Xl5,
}

impl BreakpointKey {
    /// All keys, in ascending size order.
    pub const ALL: [BreakpointKey; 9] = [
        BreakpointKey::Xs,
        BreakpointKey::Sm,
        BreakpointKey::Md,
        BreakpointKey::Lg,
        BreakpointKey::Xl,
        BreakpointKey::Xl2,
        BreakpointKey::Xl3,
        BreakpointKey::Xl4,
        BreakpointKey::Xl5,
    ];

    /// The key used in configuration files (`"xs"`, ..., `"_2xl"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            BreakpointKey::Xs => "xs",
            BreakpointKey::Sm => "sm",
            BreakpointKey::Md => "md",
            BreakpointKey::Lg => "lg",
            BreakpointKey::Xl => "xl",
            BreakpointKey::Xl2 => "_2xl",
            BreakpointKey::Xl3 => "_3xl",
            BreakpointKey::Xl4 => "_4xl",
            BreakpointKey::Xl5 => "_5xl",
        }
    }

    /// Looks up a key by its configuration name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

impl fmt::Display for BreakpointKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scale of breakpoint thresholds.
///
/// The nine named sizes are always present. Additional named thresholds
/// live in `extra` and are written alongside the named ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakpointScale {
    pub xs: f64,
    pub sm: f64,
    pub md: f64,
    pub lg: f64,
    pub xl: f64,
    #[serde(rename = "_2xl")]
    pub xl2: f64,
    #[serde(rename = "_3xl")]
    pub xl3: f64,
    #[serde(rename = "_4xl")]
    pub xl4: f64,
    #[serde(rename = "_5xl")]
    pub xl5: f64,
    #[serde(flatten)]
    pub extra: BTreeMap<String, f64>,
}

impl BreakpointScale {
    /// Creates a scale from thresholds listed in [`BreakpointKey::ALL`] order.
    pub fn from_thresholds(thresholds: [f64; 9]) -> Self {
        let [xs, sm, md, lg, xl, xl2, xl3, xl4, xl5] = thresholds;
        Self {
            xs,
            sm,
            md,
            lg,
            xl,
            xl2,
            xl3,
            xl4,
            xl5,
            extra: BTreeMap::new(),
        }
    }

    /// Returns the threshold for a named size.
    pub fn threshold(&self, key: BreakpointKey) -> f64 {
        match key {
            BreakpointKey::Xs => self.xs,
            BreakpointKey::Sm => self.sm,
            BreakpointKey::Md => self.md,
            BreakpointKey::Lg => self.lg,
            BreakpointKey::Xl => self.xl,
            BreakpointKey::Xl2 => self.xl2,
            BreakpointKey::Xl3 => self.xl3,
            BreakpointKey::Xl4 => self.xl4,
            BreakpointKey::Xl5 => self.xl5,
        }
    }

    /// Looks up a threshold by name, named sizes first, then `extra`.
    pub fn get(&self, name: &str) -> Option<f64> {
        match BreakpointKey::from_name(name) {
            Some(key) => Some(self.threshold(key)),
            None => self.extra.get(name).copied(),
        }
    }

    /// Adds or replaces a threshold by name, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, threshold: f64) -> Option<f64> {
        let name = name.into();
        let slot = match BreakpointKey::from_name(&name) {
            Some(BreakpointKey::Xs) => &mut self.xs,
            Some(BreakpointKey::Sm) => &mut self.sm,
            Some(BreakpointKey::Md) => &mut self.md,
            Some(BreakpointKey::Lg) => &mut self.lg,
            Some(BreakpointKey::Xl) => &mut self.xl,
            Some(BreakpointKey::Xl2) => &mut self.xl2,
            Some(BreakpointKey::Xl3) => &mut self.xl3,
            Some(BreakpointKey::Xl4) => &mut self.xl4,
            Some(BreakpointKey::Xl5) => &mut self.xl5,
            None => return self.extra.insert(name, threshold),
        };
        Some(std::mem::replace(slot, threshold))
    }

    /// Iterates over `(name, threshold)` pairs: named sizes in ascending
    /// order, then extra entries sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        BreakpointKey::ALL
            .into_iter()
            .map(move |key| (key.as_str(), self.threshold(key)))
            .chain(self.extra.iter().map(|(name, value)| (name.as_str(), *value)))
    }
}

/// Viewport and container breakpoint scales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakpoints {
    /// Viewport widths, in pixels.
    pub viewport: BreakpointScale,
    /// Container sizes, in rem.
    pub container: BreakpointScale,
}
