//! Hue roles and the per-theme hue table.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::theme::Hue;

/// A semantic hue role.
///
/// Every theme assigns a hue to each of the thirteen roles. Roles are named
/// after the Greek alphabet and are declared in wheel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HueRole {
    Alpha,
    Beta,
    Gamma,
    Delta,
    Epsilon,
    Zeta,
    Eta,
    Theta,
    Iota,
    Kappa,
    Lambda,
    Mu,
    Nu,
}

impl HueRole {
    /// All roles, in declared order.
    pub const ALL: [HueRole; 13] = [
        HueRole::Alpha,
        HueRole::Beta,
        HueRole::Gamma,
        HueRole::Delta,
        HueRole::Epsilon,
        HueRole::Zeta,
        HueRole::Eta,
        HueRole::Theta,
        HueRole::Iota,
        HueRole::Kappa,
        HueRole::Lambda,
        HueRole::Mu,
        HueRole::Nu,
    ];

    /// The key used for this role in serialized themes.
    pub fn as_str(self) -> &'static str {
        match self {
            HueRole::Alpha => "alpha",
            HueRole::Beta => "beta",
            HueRole::Gamma => "gamma",
            HueRole::Delta => "delta",
            HueRole::Epsilon => "epsilon",
            HueRole::Zeta => "zeta",
            HueRole::Eta => "eta",
            HueRole::Theta => "theta",
            HueRole::Iota => "iota",
            HueRole::Kappa => "kappa",
            HueRole::Lambda => "lambda",
            HueRole::Mu => "mu",
            HueRole::Nu => "nu",
        }
    }
}

impl fmt::Display for HueRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hue assignments for every [`HueRole`].
///
/// Keeping the hue fixed per role lets lightness and chroma be tuned per
/// mode while each role stays recognizable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colors {
    pub alpha: Hue,
    pub beta: Hue,
    pub gamma: Hue,
    pub delta: Hue,
    pub epsilon: Hue,
    pub zeta: Hue,
    pub eta: Hue,
    pub theta: Hue,
    pub iota: Hue,
    pub kappa: Hue,
    pub lambda: Hue,
    pub mu: Hue,
    pub nu: Hue,
}

impl Colors {
    /// Returns the hue assigned to `role`.
    pub fn get(&self, role: HueRole) -> &Hue {
        match role {
            HueRole::Alpha => &self.alpha,
            HueRole::Beta => &self.beta,
            HueRole::Gamma => &self.gamma,
            HueRole::Delta => &self.delta,
            HueRole::Epsilon => &self.epsilon,
            HueRole::Zeta => &self.zeta,
            HueRole::Eta => &self.eta,
            HueRole::Theta => &self.theta,
            HueRole::Iota => &self.iota,
            HueRole::Kappa => &self.kappa,
            HueRole::Lambda => &self.lambda,
            HueRole::Mu => &self.mu,
            HueRole::Nu => &self.nu,
        }
    }

    /// Replaces the hue assigned to `role`, returning the previous value.
    pub fn set(&mut self, role: HueRole, hue: impl Into<Hue>) -> Hue {
        let slot = match role {
            HueRole::Alpha => &mut self.alpha,
            HueRole::Beta => &mut self.beta,
            HueRole::Gamma => &mut self.gamma,
            HueRole::Delta => &mut self.delta,
            HueRole::Epsilon => &mut self.epsilon,
            HueRole::Zeta => &mut self.zeta,
            HueRole::Eta => &mut self.eta,
            HueRole::Theta => &mut self.theta,
            HueRole::Iota => &mut self.iota,
            HueRole::Kappa => &mut self.kappa,
            HueRole::Lambda => &mut self.lambda,
            HueRole::Mu => &mut self.mu,
            HueRole::Nu => &mut self.nu,
        };
        std::mem::replace(slot, hue.into())
    }

    /// Iterates over `(role, hue)` pairs in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (HueRole, &Hue)> + '_ {
        HueRole::ALL.into_iter().map(move |role| (role, self.get(role)))
    }
}
