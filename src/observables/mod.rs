// src/observables/mod.rs

//! Observables derived from the angular coefficients: the differential rate,
//! F_L, A_FB, the normalised S_i and the form-factor-optimised P_i / P_i'.
//!
//! The same ratios apply to q²-integrated coefficients; see [`binned`].

pub mod binned;

pub use binned::{integrate, simpson_weights, BinnedObservables};

use crate::angular::{AngularCoefficients, CoefficientKey};
use crate::core::BvllError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// dΓ/dq² (or dBR/dq², depending on the normalisation of `j`).
pub fn differential_rate(j: &AngularCoefficients) -> f64 {
    0.75 * (2.0 * j.j1s + j.j1c) - 0.25 * (2.0 * j.j2s + j.j2c)
}

/// Observables at one q² for one meson (no CP average).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observables {
    pub rate: f64,
    pub fl: f64,
    pub afb: f64,
    pub s3: f64,
    pub s4: f64,
    pub s5: f64,
    pub s6s: f64,
    pub s6c: f64,
    pub s7: f64,
    pub s8: f64,
    pub s9: f64,
    pub p1: f64,
    pub p2: f64,
    pub p3: f64,
    pub p4p: f64,
    pub p5p: f64,
    pub p6p: f64,
    pub p8p: f64,
}

impl Observables {
    /// Computes every observable from a set of angular coefficients.
    ///
    /// # Errors
    /// * `BvllError::NumericalInstability` if the rate, `J2s` or `−J2c·J2s`
    ///   vanishes (as at `q² = 4m_ℓ²` or at the kinematic endpoint), or if the
    ///   coefficients are not finite.
    pub fn from_coefficients(j: &AngularCoefficients) -> Result<Self, BvllError> {
        if !j.is_finite() {
            return Err(BvllError::instability(format!("non-finite angular coefficients: {}", j)));
        }
        let rate = differential_rate(j);
        let per_rate = nonzero("dGamma/dq2", rate)?;
        let j2s = nonzero("J2s", j.j2s)?;
        let product = -j.j2c * j.j2s;
        if !(product > 0.0) {
            return Err(BvllError::instability(format!(
                "-J2c*J2s = {} leaves P'_i undefined",
                product
            )));
        }
        let root = product.sqrt();
        let s = |key: CoefficientKey| j.get(key) / per_rate;

        Ok(Self {
            rate,
            fl: (3.0 * j.j1c - j.j2c) / (4.0 * per_rate),
            afb: 0.375 * (2.0 * j.j6s + j.j6c) / per_rate,
            s3: s(CoefficientKey::J3),
            s4: s(CoefficientKey::J4),
            s5: s(CoefficientKey::J5),
            s6s: s(CoefficientKey::J6s),
            s6c: s(CoefficientKey::J6c),
            s7: s(CoefficientKey::J7),
            s8: s(CoefficientKey::J8),
            s9: s(CoefficientKey::J9),
            p1: j.j3 / (2.0 * j2s),
            p2: j.j6s / (8.0 * j2s),
            p3: -j.j9 / (4.0 * j2s),
            p4p: j.j4 / root,
            p5p: j.j5 / (2.0 * root),
            p6p: -j.j7 / (2.0 * root),
            p8p: -j.j8 / root,
        })
    }

    /// String-keyed view for untyped callers.
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        [
            ("dGamma/dq2", self.rate),
            ("FL", self.fl),
            ("AFB", self.afb),
            ("S3", self.s3),
            ("S4", self.s4),
            ("S5", self.s5),
            ("S6s", self.s6s),
            ("S6c", self.s6c),
            ("S7", self.s7),
            ("S8", self.s8),
            ("S9", self.s9),
            ("P1", self.p1),
            ("P2", self.p2),
            ("P3", self.p3),
            ("P4p", self.p4p),
            ("P5p", self.p5p),
            ("P6p", self.p6p),
            ("P8p", self.p8p),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
    }
}

fn nonzero(what: &str, value: f64) -> Result<f64, BvllError> {
    if value == 0.0 || !value.is_finite() {
        Err(BvllError::instability(format!("{} = {} cannot normalise observables", what, value)))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn massless_like() -> AngularCoefficients {
        // massless-lepton relations: J1s = 3 J2s, J1c = -J2c
        AngularCoefficients {
            j1s: 0.75,
            j1c: 2.0,
            j2s: 0.25,
            j2c: -2.0,
            j3: 0.05,
            j4: 0.2,
            j5: -0.3,
            j6s: 0.4,
            j6c: 0.0,
            j7: 0.01,
            j8: -0.02,
            j9: 0.03,
        }
    }

    #[test]
    fn rate_and_fractions() {
        let obs = Observables::from_coefficients(&massless_like()).unwrap();
        // 0.75 * (1.5 + 2.0) - 0.25 * (0.5 - 2.0)
        assert!((obs.rate - 3.0).abs() < 1e-15);
        assert!((obs.fl - 8.0 / 12.0).abs() < 1e-15);
        assert!((obs.afb - 0.375 * 0.8 / 3.0).abs() < 1e-15);
        assert!((obs.p5p - (-0.3 / (2.0 * (0.5f64).sqrt()))).abs() < 1e-15);
        assert!((obs.p2 - 0.2).abs() < 1e-15);
    }

    #[test]
    fn vanishing_denominators_are_reported() {
        let zero = AngularCoefficients::default();
        assert!(matches!(
            Observables::from_coefficients(&zero),
            Err(BvllError::NumericalInstability { .. })
        ));
        let mut no_transverse = massless_like();
        no_transverse.j2s = 0.0;
        assert!(matches!(
            Observables::from_coefficients(&no_transverse),
            Err(BvllError::NumericalInstability { .. })
        ));
    }
}
