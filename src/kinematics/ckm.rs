// src/kinematics/ckm.rs

use crate::core::{BvllError, ParameterSet, QuarkTransition};
use num_complex::Complex64;

/// CKM matrix in the standard parameterisation, built from the tree-level
/// inputs |V_us|, |V_ub|, |V_cb| and the angle γ (used as the CP phase δ).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CkmMatrix {
    elements: [[Complex64; 3]; 3],
}

impl CkmMatrix {
    /// Builds the matrix from |V_us|, |V_ub|, |V_cb| and γ (radians).
    pub fn from_tree_inputs(vus: f64, vub: f64, vcb: f64, gamma: f64) -> Result<Self, BvllError> {
        if !(0.0..1.0).contains(&vub) || !(0.0..1.0).contains(&vus) || !(0.0..1.0).contains(&vcb) {
            return Err(BvllError::configuration(format!(
                "CKM moduli out of range: Vus = {}, Vub = {}, Vcb = {}",
                vus, vub, vcb
            )));
        }
        let s13 = vub;
        let c13 = (1.0 - s13 * s13).sqrt();
        let s12 = vus / c13;
        let s23 = vcb / c13;
        if s12 >= 1.0 || s23 >= 1.0 {
            return Err(BvllError::configuration("CKM mixing angles exceed unity"));
        }
        let c12 = (1.0 - s12 * s12).sqrt();
        let c23 = (1.0 - s23 * s23).sqrt();
        let phase = Complex64::from_polar(1.0, gamma);
        let r = |x: f64| Complex64::new(x, 0.0);

        let elements = [
            [r(c12 * c13), r(s12 * c13), r(s13) * phase.conj()],
            [
                r(-s12 * c23) - r(c12 * s23 * s13) * phase,
                r(c12 * c23) - r(s12 * s23 * s13) * phase,
                r(s23 * c13),
            ],
            [
                r(s12 * s23) - r(c12 * c23 * s13) * phase,
                r(-c12 * s23) - r(s12 * c23 * s13) * phase,
                r(c23 * c13),
            ],
        ];
        Ok(Self { elements })
    }

    /// Reads `Vus`, `Vub`, `Vcb` and `gamma` from the parameter set.
    pub fn from_parameters(par: &ParameterSet) -> Result<Self, BvllError> {
        Self::from_tree_inputs(
            par.value("Vus")?,
            par.value("Vub")?,
            par.value("Vcb")?,
            par.value("gamma")?,
        )
    }

    /// Element V_ij with rows (u, c, t) and columns (d, s, b).
    pub fn element(&self, row: usize, col: usize) -> Complex64 {
        self.elements[row][col]
    }

    /// λ_t = V_tb V_tq* for the given transition.
    pub fn xi_t(&self, transition: QuarkTransition) -> Complex64 {
        let col = match transition {
            QuarkTransition::BToS => 1,
            QuarkTransition::BToD => 0,
        };
        self.elements[2][2] * self.elements[2][col].conj()
    }
}
