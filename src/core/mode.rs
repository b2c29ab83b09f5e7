// src/core/mode.rs

use super::error::BvllError;
use std::fmt;
use std::str::FromStr;

/// Flavour-changing quark transition underlying a decay mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuarkTransition {
    /// b → s ℓℓ
    BToS,
    /// b → d ℓℓ
    BToD,
}

/// Mesons appearing as parent or daughter in the supported decay modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meson {
    B0,
    BPlus,
    Bs,
    KStar0,
    KStarPlus,
    Phi,
    RhoPlus,
}

impl Meson {
    const ALL: [Meson; 7] = [
        Meson::B0,
        Meson::BPlus,
        Meson::Bs,
        Meson::KStar0,
        Meson::KStarPlus,
        Meson::Phi,
        Meson::RhoPlus,
    ];

    /// Label used for parameter lookups, e.g. `("mass", "K*0")`.
    pub fn label(&self) -> &'static str {
        match self {
            Meson::B0 => "B0",
            Meson::BPlus => "B+",
            Meson::Bs => "Bs",
            Meson::KStar0 => "K*0",
            Meson::KStarPlus => "K*+",
            Meson::Phi => "phi",
            Meson::RhoPlus => "rho+",
        }
    }
}

impl fmt::Display for Meson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Meson {
    type Err = BvllError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Meson::ALL
            .iter()
            .copied()
            .find(|m| m.label() == s)
            .ok_or_else(|| BvllError::configuration(format!("unknown meson `{}`", s)))
    }
}

/// A supported parent → daughter pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecayMode {
    parent: Meson,
    daughter: Meson,
    transition: QuarkTransition,
    process: &'static str,
}

impl DecayMode {
    /// Resolves a parent/daughter pair, failing with a configuration error for
    /// combinations without a form-factor parameterisation.
    pub fn new(parent: Meson, daughter: Meson) -> Result<Self, BvllError> {
        let (transition, process) = match (parent, daughter) {
            (Meson::B0, Meson::KStar0) | (Meson::BPlus, Meson::KStarPlus) => {
                (QuarkTransition::BToS, "B->K*")
            }
            (Meson::Bs, Meson::Phi) => (QuarkTransition::BToS, "Bs->phi"),
            (Meson::BPlus, Meson::RhoPlus) => (QuarkTransition::BToD, "B->rho"),
            _ => {
                return Err(BvllError::configuration(format!(
                    "unsupported decay mode {} -> {}",
                    parent, daughter
                )));
            }
        };
        Ok(Self {
            parent,
            daughter,
            transition,
            process,
        })
    }

    /// Parses both meson labels and resolves the pair.
    pub fn from_labels(parent: &str, daughter: &str) -> Result<Self, BvllError> {
        Self::new(parent.parse()?, daughter.parse()?)
    }

    pub fn parent(&self) -> Meson {
        self.parent
    }

    pub fn daughter(&self) -> Meson {
        self.daughter
    }

    pub fn transition(&self) -> QuarkTransition {
        self.transition
    }

    /// Hadronic transition label shared by isospin partners, e.g. `B->K*`.
    pub fn process(&self) -> &'static str {
        self.process
    }
}

impl fmt::Display for DecayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.parent, self.daughter)
    }
}

/// Charged lepton flavour of the dilepton pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lepton {
    Electron,
    Muon,
    Tau,
}

impl Lepton {
    /// Label used for parameter lookups, e.g. `("mass", "mu")`.
    pub fn label(&self) -> &'static str {
        match self {
            Lepton::Electron => "e",
            Lepton::Muon => "mu",
            Lepton::Tau => "tau",
        }
    }
}

impl fmt::Display for Lepton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Lepton {
    type Err = BvllError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "e" => Ok(Lepton::Electron),
            "mu" => Ok(Lepton::Muon),
            "tau" => Ok(Lepton::Tau),
            _ => Err(BvllError::configuration(format!("unsupported lepton flavour `{}`", s))),
        }
    }
}
