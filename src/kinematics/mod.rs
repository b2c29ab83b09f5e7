// src/kinematics/mod.rs

//! Kinematic helper functions of the dilepton invariant mass squared.
//!
//! All functions are written in factored form so that they are exact at the
//! phase-space endpoints: λ vanishes identically at `q² = (m_B - m_V)²` and
//! β_ℓ vanishes identically at `q² = 4 m_ℓ²`.

pub mod ckm;

pub use ckm::CkmMatrix;

use crate::core::{BvllError, RATE_DENOMINATOR};
use num_complex::Complex64;

/// Källén triangle function λ(a, b, c) = a² + b² + c² − 2(ab + ac + bc).
///
/// ```
/// assert_eq!(bvll::kinematics::kallen(4.0, 1.0, 1.0), 0.0);
/// ```
pub fn kallen(a: f64, b: f64, c: f64) -> f64 {
    a * a + b * b + c * c - 2.0 * (a * b + a * c + b * c)
}

/// λ(m_B², m_V², q²) in the factored form `[(m_B+m_V)² − q²][(m_B−m_V)² − q²]`.
pub fn lambda_meson(m_parent: f64, m_daughter: f64, q2: f64) -> f64 {
    let sum = m_parent + m_daughter;
    let diff = m_parent - m_daughter;
    (sum * sum - q2) * (diff * diff - q2)
}

/// Lepton velocity β_ℓ = √(1 − 4m_ℓ²/q²), evaluated as √((q² − 4m_ℓ²)/q²).
pub fn lepton_velocity(q2: f64, m_lepton: f64) -> f64 {
    ((q2 - 4.0 * m_lepton * m_lepton) / q2).max(0.0).sqrt()
}

/// A validated point in the physical q² range of a B → V ℓℓ decay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicPoint {
    pub q2: f64,
    pub m_parent: f64,
    pub m_daughter: f64,
    pub m_lepton: f64,
    /// λ(m_B², m_V², q²), clamped at zero.
    pub lambda: f64,
    /// β_ℓ
    pub beta: f64,
}

impl KinematicPoint {
    /// Validates `q²` against `4 m_ℓ² <= q² <= (m_B − m_V)²` and precomputes λ and β_ℓ.
    ///
    /// # Errors
    /// * `BvllError::Configuration` for unphysical masses.
    /// * `BvllError::Domain` if `q²` is not finite, not positive, or outside the range.
    pub fn new(q2: f64, m_parent: f64, m_daughter: f64, m_lepton: f64) -> Result<Self, BvllError> {
        if !(m_parent.is_finite() && m_daughter.is_finite() && m_lepton.is_finite())
            || m_daughter <= 0.0
            || m_lepton < 0.0
            || m_parent <= m_daughter
        {
            return Err(BvllError::configuration(format!(
                "unphysical masses m_B = {}, m_V = {}, m_l = {}",
                m_parent, m_daughter, m_lepton
            )));
        }
        if !q2.is_finite() || q2 <= 0.0 {
            return Err(BvllError::domain(q2, "q2 must be positive and finite"));
        }
        let q2_min = Self::q2_min(m_lepton);
        let q2_max = Self::q2_max(m_parent, m_daughter);
        if q2 < q2_min {
            return Err(BvllError::domain(q2, format!("below the dilepton threshold {}", q2_min)));
        }
        if q2 > q2_max {
            return Err(BvllError::domain(q2, format!("above the kinematic endpoint {}", q2_max)));
        }
        Ok(Self {
            q2,
            m_parent,
            m_daughter,
            m_lepton,
            lambda: lambda_meson(m_parent, m_daughter, q2).max(0.0),
            beta: lepton_velocity(q2, m_lepton),
        })
    }

    /// Dilepton threshold 4 m_ℓ².
    pub fn q2_min(m_lepton: f64) -> f64 {
        4.0 * m_lepton * m_lepton
    }

    /// Kinematic endpoint (m_B − m_V)².
    pub fn q2_max(m_parent: f64, m_daughter: f64) -> f64 {
        let diff = m_parent - m_daughter;
        diff * diff
    }

    pub fn sqrt_lambda(&self) -> f64 {
        self.lambda.sqrt()
    }

    pub fn sqrt_q2(&self) -> f64 {
        self.q2.sqrt()
    }

    /// m_ℓ/√q², the helicity-suppression factor of lepton-mass terms.
    pub fn lepton_mass_ratio(&self) -> f64 {
        self.m_lepton / self.sqrt_q2()
    }

    /// 4 m_ℓ²/q² (equals 1 − β_ℓ²).
    pub fn lepton_mass_term(&self) -> f64 {
        4.0 * self.m_lepton * self.m_lepton / self.q2
    }

    pub fn beta2(&self) -> f64 {
        self.beta * self.beta
    }
}

/// Overall normalisation N² multiplying every bilinear:
/// `|λ_t|² G_F² α_e² q² β_ℓ √λ / (3 · 2¹⁰ π⁵ m_B³)`.
///
/// Multiplying by the parent lifetime (GeV⁻¹) turns a rate into a branching ratio.
pub fn rate_prefactor(kin: &KinematicPoint, g_fermi: f64, alpha_e: f64, xi_t: Complex64) -> f64 {
    let m3 = kin.m_parent * kin.m_parent * kin.m_parent;
    xi_t.norm_sqr() * g_fermi * g_fermi * alpha_e * alpha_e * kin.q2 * kin.beta * kin.sqrt_lambda()
        / (RATE_DENOMINATOR * m3)
}
