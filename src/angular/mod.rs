// src/angular/mod.rs

//! Angular coefficients J_i(q²) of the B → V(→ P₁P₂) ℓℓ distribution.
//!
//! Each coefficient is a real bilinear form in the amplitudes multiplied by
//! the common prefactor N². Two reductions are implemented, one per amplitude
//! basis; they share no intermediate quantities and must agree.

mod helicity;
mod transversity;

pub use helicity::helicity_coefficients;
pub use transversity::transversity_coefficients;

use crate::core::BvllError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Amplitude basis the coefficients are reduced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineKind {
    #[default]
    Transversity,
    Helicity,
}

/// Names of the twelve angular coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CoefficientKey {
    J1s,
    J1c,
    J2s,
    J2c,
    J3,
    J4,
    J5,
    J6s,
    J6c,
    J7,
    J8,
    J9,
}

impl CoefficientKey {
    /// All keys in canonical order.
    pub const ALL: [CoefficientKey; 12] = [
        CoefficientKey::J1s,
        CoefficientKey::J1c,
        CoefficientKey::J2s,
        CoefficientKey::J2c,
        CoefficientKey::J3,
        CoefficientKey::J4,
        CoefficientKey::J5,
        CoefficientKey::J6s,
        CoefficientKey::J6c,
        CoefficientKey::J7,
        CoefficientKey::J8,
        CoefficientKey::J9,
    ];

    /// Tag used at the string-keyed boundary: `"1s"`, `"1c"`, …, `"9"`.
    pub fn tag(&self) -> &'static str {
        match self {
            CoefficientKey::J1s => "1s",
            CoefficientKey::J1c => "1c",
            CoefficientKey::J2s => "2s",
            CoefficientKey::J2c => "2c",
            CoefficientKey::J3 => "3",
            CoefficientKey::J4 => "4",
            CoefficientKey::J5 => "5",
            CoefficientKey::J6s => "6s",
            CoefficientKey::J6c => "6c",
            CoefficientKey::J7 => "7",
            CoefficientKey::J8 => "8",
            CoefficientKey::J9 => "9",
        }
    }
}

impl fmt::Display for CoefficientKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "J{}", self.tag())
    }
}

impl FromStr for CoefficientKey {
    type Err = BvllError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CoefficientKey::ALL
            .iter()
            .copied()
            .find(|key| key.tag() == s)
            .ok_or_else(|| BvllError::configuration(format!("unknown angular coefficient `{}`", s)))
    }
}

/// The twelve angular coefficients at one q² (or integrated over a bin).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AngularCoefficients {
    pub j1s: f64,
    pub j1c: f64,
    pub j2s: f64,
    pub j2c: f64,
    pub j3: f64,
    pub j4: f64,
    pub j5: f64,
    pub j6s: f64,
    pub j6c: f64,
    pub j7: f64,
    pub j8: f64,
    pub j9: f64,
}

impl AngularCoefficients {
    /// Value of one coefficient.
    pub fn get(&self, key: CoefficientKey) -> f64 {
        match key {
            CoefficientKey::J1s => self.j1s,
            CoefficientKey::J1c => self.j1c,
            CoefficientKey::J2s => self.j2s,
            CoefficientKey::J2c => self.j2c,
            CoefficientKey::J3 => self.j3,
            CoefficientKey::J4 => self.j4,
            CoefficientKey::J5 => self.j5,
            CoefficientKey::J6s => self.j6s,
            CoefficientKey::J6c => self.j6c,
            CoefficientKey::J7 => self.j7,
            CoefficientKey::J8 => self.j8,
            CoefficientKey::J9 => self.j9,
        }
    }

    fn get_mut(&mut self, key: CoefficientKey) -> &mut f64 {
        match key {
            CoefficientKey::J1s => &mut self.j1s,
            CoefficientKey::J1c => &mut self.j1c,
            CoefficientKey::J2s => &mut self.j2s,
            CoefficientKey::J2c => &mut self.j2c,
            CoefficientKey::J3 => &mut self.j3,
            CoefficientKey::J4 => &mut self.j4,
            CoefficientKey::J5 => &mut self.j5,
            CoefficientKey::J6s => &mut self.j6s,
            CoefficientKey::J6c => &mut self.j6c,
            CoefficientKey::J7 => &mut self.j7,
            CoefficientKey::J8 => &mut self.j8,
            CoefficientKey::J9 => &mut self.j9,
        }
    }

    /// Iterates over `(key, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (CoefficientKey, f64)> + '_ {
        CoefficientKey::ALL.iter().map(move |key| (*key, self.get(*key)))
    }

    /// Every coefficient multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        let mut out = *self;
        for key in CoefficientKey::ALL {
            *out.get_mut(key) *= factor;
        }
        out
    }

    /// Adds `weight * other` to every coefficient.
    pub fn accumulate(&mut self, other: &AngularCoefficients, weight: f64) {
        for key in CoefficientKey::ALL {
            *self.get_mut(key) += weight * other.get(key);
        }
    }

    /// Returns `true` if no coefficient is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.iter().all(|(_, value)| value.is_finite())
    }

    /// String-keyed view (`"1s"`, `"1c"`, …) for untyped callers.
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        self.iter().map(|(key, value)| (key.tag().to_string(), value)).collect()
    }

    /// Inverse of [`AngularCoefficients::to_map`]; every key must be present.
    pub fn from_map(map: &BTreeMap<String, f64>) -> Result<Self, BvllError> {
        let mut out = Self::default();
        for key in CoefficientKey::ALL {
            *out.get_mut(key) = *map.get(key.tag()).ok_or_else(|| {
                BvllError::configuration(format!("angular coefficient `{}` missing", key.tag()))
            })?;
        }
        Ok(out)
    }
}

impl fmt::Display for AngularCoefficients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, (key, value)) in self.iter().enumerate() {
            write!(f, "{}{} = {:.6e}", if idx > 0 { ", " } else { "" }, key, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_the_fixed_key_set() {
        let tags: Vec<_> = CoefficientKey::ALL.iter().map(|k| k.tag()).collect();
        assert_eq!(tags, ["1s", "1c", "2s", "2c", "3", "4", "5", "6s", "6c", "7", "8", "9"]);
        assert_eq!("6c".parse::<CoefficientKey>(), Ok(CoefficientKey::J6c));
        assert!("6".parse::<CoefficientKey>().is_err());
    }

    #[test]
    fn accumulate_and_scale_act_on_every_entry() {
        let mut ones = AngularCoefficients::default();
        for key in CoefficientKey::ALL {
            *ones.get_mut(key) = 1.0;
        }
        let mut total = AngularCoefficients::default();
        total.accumulate(&ones, 0.5);
        total.accumulate(&ones, 1.5);
        assert!(total.scaled(3.0).iter().all(|(_, v)| v == 6.0));
        assert_eq!(AngularCoefficients::from_map(&total.to_map()).unwrap(), total);
    }
}
