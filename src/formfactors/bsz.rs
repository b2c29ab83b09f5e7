// src/formfactors/bsz.rs

use super::{FormFactorProvider, FormFactors};
use crate::core::{BvllError, DecayMode, ParamKey, ParameterSet, QuarkTransition};

/// Conformal variable z(t) with `t₊ = (m_B + m_V)²` and
/// `t₀ = t₊ (1 − √(1 − t₋/t₊))`.
pub fn z_parameter(q2: f64, m_parent: f64, m_daughter: f64) -> f64 {
    let t_plus = (m_parent + m_daughter).powi(2);
    let t_minus = (m_parent - m_daughter).powi(2);
    let t_zero = t_plus * (1.0 - (1.0 - t_minus / t_plus).sqrt());
    let a = (t_plus - q2).sqrt();
    let b = (t_plus - t_zero).sqrt();
    (a - b) / (a + b)
}

/// Spin-parity of the lowest resonance in the crossed channel.
#[derive(Debug, Clone, Copy)]
enum Resonance {
    /// 0⁻, for A0.
    Pseudoscalar,
    /// 1⁻, for V and T1.
    Vector,
    /// 1⁺, for A1, A12, T2 and T23.
    Axial,
}

impl Resonance {
    fn mass(self, transition: QuarkTransition) -> f64 {
        match (transition, self) {
            (QuarkTransition::BToS, Resonance::Pseudoscalar) => 5.366,
            (QuarkTransition::BToS, Resonance::Vector) => 5.415,
            (QuarkTransition::BToS, Resonance::Axial) => 5.829,
            (QuarkTransition::BToD, Resonance::Pseudoscalar) => 5.279,
            (QuarkTransition::BToD, Resonance::Vector) => 5.325,
            (QuarkTransition::BToD, Resonance::Axial) => 5.724,
        }
    }
}

const EXPANSION: [(&str, Resonance); 7] = [
    ("V", Resonance::Vector),
    ("A0", Resonance::Pseudoscalar),
    ("A1", Resonance::Axial),
    ("A12", Resonance::Axial),
    ("T1", Resonance::Vector),
    ("T2", Resonance::Axial),
    ("T23", Resonance::Axial),
];

/// Simplified series expansion in z with a single pole,
/// `F(q²) = Σₖ aₖ [z(q²) − z(0)]ᵏ / (1 − q²/m_R²)`.
///
/// Coefficients are read from the parameter set under the category
/// `"<process> BSZ"`, e.g. `("B->K* BSZ", "a1_V")`. The two endpoint relations
/// at q² = 0 are imposed rather than read: `a0_T2 = a0_T1` and
/// `a0_A12 = (m_B² − m_V²)/(8 m_B m_V) · a0_A0`.
#[derive(Debug, Clone, Copy)]
pub struct BszExpansion {
    order: usize,
}

impl BszExpansion {
    /// Expansion truncated after `[z − z(0)]²`.
    pub fn new() -> Self {
        Self { order: 3 }
    }

    /// Expansion with `order` coefficients a₀ … a_{order−1}.
    pub fn with_order(order: usize) -> Result<Self, BvllError> {
        if order == 0 {
            return Err(BvllError::configuration("BSZ expansion needs at least one coefficient"));
        }
        Ok(Self { order })
    }

    fn coefficient(
        &self,
        par: &ParameterSet,
        mode: &DecayMode,
        k: usize,
        name: &str,
        masses: (f64, f64),
    ) -> Result<f64, BvllError> {
        let category = format!("{} BSZ", mode.process());
        let lookup = |ff: &str| -> Result<f64, BvllError> {
            let key = ParamKey::qualified(category.as_str(), format!("a{}_{}", k, ff));
            par.get(&key).map_err(|_| BvllError::MissingFormFactor {
                process: mode.process().to_string(),
                name: key.to_string(),
            })
        };
        match (k, name) {
            (0, "T2") => lookup("T1"),
            (0, "A12") => {
                let (m_b, m_v) = masses;
                Ok(lookup("A0")? * (m_b * m_b - m_v * m_v) / (8.0 * m_b * m_v))
            }
            _ => lookup(name),
        }
    }
}

impl Default for BszExpansion {
    fn default() -> Self {
        Self::new()
    }
}

impl FormFactorProvider for BszExpansion {
    fn form_factors(
        &self,
        q2: f64,
        mode: &DecayMode,
        par: &ParameterSet,
    ) -> Result<FormFactors, BvllError> {
        let m_b = par.mass(mode.parent().label())?;
        let m_v = par.mass(mode.daughter().label())?;
        let dz = z_parameter(q2, m_b, m_v) - z_parameter(0.0, m_b, m_v);

        let mut values = [0.0; 7];
        for (slot, (name, resonance)) in values.iter_mut().zip(EXPANSION.iter()) {
            let m_r = resonance.mass(mode.transition());
            let pole = 1.0 - q2 / (m_r * m_r);
            if pole <= 0.0 {
                return Err(BvllError::domain(q2, format!("at or beyond the {} pole", name)));
            }
            let mut series = 0.0;
            let mut power = 1.0;
            for k in 0..self.order {
                series += self.coefficient(par, mode, k, name, (m_b, m_v))? * power;
                power *= dz;
            }
            *slot = series / pole;
        }
        tracing::trace!(q2, process = mode.process(), "evaluated BSZ form factors");

        let [v, a0, a1, a12, t1, t2, t23] = values;
        Ok(FormFactors { v, a0, a1, a12, t1, t2, t23 })
    }
}
