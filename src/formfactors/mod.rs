// src/formfactors/mod.rs

//! Hadronic B → V form factors.
//!
//! The amplitude code consumes a typed [`FormFactors`] record obtained from a
//! [`FormFactorProvider`]. [`BszExpansion`] implements the z-expansion used by
//! light-cone sum-rule fits; [`UntypedProvider`] adapts any closure that returns
//! a string-keyed mapping.

mod bsz;

pub use bsz::{z_parameter, BszExpansion};

use crate::core::{BvllError, DecayMode, ParameterSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The seven form factors at a single q².
///
/// `A12` and `T23` replace `A2` and `T3` so that the longitudinal amplitude
/// carries no 1/λ factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormFactors {
    pub v: f64,
    pub a0: f64,
    pub a1: f64,
    pub a12: f64,
    pub t1: f64,
    pub t2: f64,
    pub t23: f64,
}

impl FormFactors {
    /// Names used by string-keyed providers.
    pub const NAMES: [&'static str; 7] = ["V", "A0", "A1", "A12", "T1", "T2", "T23"];

    /// Looks a form factor up by name.
    pub fn get(&self, name: &str) -> Option<f64> {
        match name {
            "V" => Some(self.v),
            "A0" => Some(self.a0),
            "A1" => Some(self.a1),
            "A12" => Some(self.a12),
            "T1" => Some(self.t1),
            "T2" => Some(self.t2),
            "T23" => Some(self.t23),
            _ => None,
        }
    }

    /// Builds the record from a string-keyed mapping.
    ///
    /// # Errors
    /// * `BvllError::MissingFormFactor` naming the first absent entry.
    /// * `BvllError::NumericalInstability` if an entry is not finite.
    pub fn from_map(process: &str, map: &BTreeMap<String, f64>) -> Result<Self, BvllError> {
        let fetch = |name: &str| -> Result<f64, BvllError> {
            let value = map.get(name).copied().ok_or_else(|| BvllError::MissingFormFactor {
                process: process.to_string(),
                name: name.to_string(),
            })?;
            if value.is_finite() {
                Ok(value)
            } else {
                Err(BvllError::instability(format!(
                    "form factor {} for {} is not finite ({})",
                    name, process, value
                )))
            }
        };
        Ok(Self {
            v: fetch("V")?,
            a0: fetch("A0")?,
            a1: fetch("A1")?,
            a12: fetch("A12")?,
            t1: fetch("T1")?,
            t2: fetch("T2")?,
            t23: fetch("T23")?,
        })
    }

    /// String-keyed view for untyped callers.
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        Self::NAMES
            .iter()
            .filter_map(|name| self.get(name).map(|v| (name.to_string(), v)))
            .collect()
    }
}

/// Source of form factors for a decay mode at a given q².
pub trait FormFactorProvider: Send + Sync {
    /// Evaluates all seven form factors.
    fn form_factors(
        &self,
        q2: f64,
        mode: &DecayMode,
        par: &ParameterSet,
    ) -> Result<FormFactors, BvllError>;
}

/// Adapts a closure returning a string-keyed mapping into a [`FormFactorProvider`].
pub struct UntypedProvider<F>(pub F);

impl<F> FormFactorProvider for UntypedProvider<F>
where
    F: Fn(f64, &DecayMode, &ParameterSet) -> Result<BTreeMap<String, f64>, BvllError> + Send + Sync,
{
    fn form_factors(
        &self,
        q2: f64,
        mode: &DecayMode,
        par: &ParameterSet,
    ) -> Result<FormFactors, BvllError> {
        let map = (self.0)(q2, mode, par)?;
        FormFactors::from_map(mode.process(), &map)
    }
}
