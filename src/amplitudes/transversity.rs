// src/amplitudes/transversity.rs

use super::AmplitudeInputs;
use crate::core::EffectiveCouplings;
use crate::kinematics::KinematicPoint;
use num_complex::Complex64;
use num_traits::Zero;
use std::collections::BTreeMap;
use std::f64::consts::SQRT_2;

/// Transversity amplitudes at one q², without the common factor N.
///
/// L and R refer to the chirality of the lepton current. With `c± = C ± C'`:
///
/// * `A⊥ = √2 √λ [(c9⁺ ∓ c10⁺) V/(m_B+m_V) + 2m_b/q² c7⁺ T1]`
/// * `A∥ = −√2 [(m_B+m_V)(c9⁻ ∓ c10⁻) A1 + 2m_b(m_B²−m_V²)/q² c7⁻ T2]`
/// * `A0 = −8 m_B m_V/√q² [(c9⁻ ∓ c10⁻) A12 + m_b c7⁻ T23/(m_B+m_V)]`
/// * `A_t = 2√λ/√q² c10⁻ A0`, `A_S = −2√λ (C_S − C_S') A0`, `A_P = √λ (C_P − C_P') A0`
///
/// The upper sign is L.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransversityAmplitudes {
    pub kin: KinematicPoint,
    /// N², multiplying every bilinear.
    pub prefactor: f64,
    pub perp_l: Complex64,
    pub perp_r: Complex64,
    pub para_l: Complex64,
    pub para_r: Complex64,
    pub zero_l: Complex64,
    pub zero_r: Complex64,
    /// Time-like amplitude (axial current only).
    pub time: Complex64,
    /// Scalar lepton current.
    pub scalar: Complex64,
    /// Pseudoscalar lepton current.
    pub pseudoscalar: Complex64,
}

impl TransversityAmplitudes {
    /// Assembles the amplitudes.
    pub fn assemble(inputs: &AmplitudeInputs) -> Self {
        let kin = inputs.kin;
        let ff = &inputs.form_factors;
        let c = &inputs.couplings;
        let (m_b_meson, m_v, m_b) = (kin.m_parent, kin.m_daughter, inputs.m_b);
        let mass_sum = m_b_meson + m_v;
        let sqrt_lambda = kin.sqrt_lambda();
        let sqrt_q2 = kin.sqrt_q2();

        let (c7_even, c7_odd) = EffectiveCouplings::split(c.c7, c.c7p);
        let (c9_even, c9_odd) = EffectiveCouplings::split(c.c9, c.c9p);
        let (c10_even, c10_odd) = EffectiveCouplings::split(c.c10, c.c10p);

        // dipole pieces are common to both chiralities
        let dipole_perp = c7_even * (2.0 * m_b / kin.q2 * ff.t1);
        let dipole_para =
            c7_odd * (2.0 * m_b * (m_b_meson * m_b_meson - m_v * m_v) / kin.q2 * ff.t2);
        let dipole_zero = c7_odd * (m_b * ff.t23 / mass_sum);
        let zero_scale = -8.0 * m_b_meson * m_v / sqrt_q2;

        // chirality = -1 for L, +1 for R
        let perp = |chirality: f64| {
            ((c9_even + c10_even * chirality) * (ff.v / mass_sum) + dipole_perp)
                * (SQRT_2 * sqrt_lambda)
        };
        let para = |chirality: f64| {
            ((c9_odd + c10_odd * chirality) * (mass_sum * ff.a1) + dipole_para) * (-SQRT_2)
        };
        let zero = |chirality: f64| {
            ((c9_odd + c10_odd * chirality) * ff.a12 + dipole_zero) * zero_scale
        };

        Self {
            kin,
            prefactor: inputs.prefactor,
            perp_l: perp(-1.0),
            perp_r: perp(1.0),
            para_l: para(-1.0),
            para_r: para(1.0),
            zero_l: zero(-1.0),
            zero_r: zero(1.0),
            time: c10_odd * (2.0 * sqrt_lambda / sqrt_q2 * ff.a0),
            scalar: (c.cs - c.csp) * (-2.0 * sqrt_lambda * ff.a0),
            pseudoscalar: (c.cp - c.cpp) * (sqrt_lambda * ff.a0),
        }
    }

    /// Returns `true` if a (pseudo)scalar amplitude is non-zero.
    pub fn has_scalar(&self) -> bool {
        !(self.scalar.is_zero() && self.pseudoscalar.is_zero())
    }

    /// String-keyed view for untyped callers.
    pub fn to_map(&self) -> BTreeMap<String, Complex64> {
        [
            ("perp_L", self.perp_l),
            ("perp_R", self.perp_r),
            ("para_L", self.para_l),
            ("para_R", self.para_r),
            ("0_L", self.zero_l),
            ("0_R", self.zero_r),
            ("t", self.time),
            ("S", self.scalar),
            ("P", self.pseudoscalar),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
    }
}
