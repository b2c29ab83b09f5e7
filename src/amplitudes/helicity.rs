// src/amplitudes/helicity.rs

use super::AmplitudeInputs;
use crate::core::EffectiveCouplings;
use crate::kinematics::KinematicPoint;
use num_complex::Complex64;

/// Helicity amplitudes of the vector (`v_*`) and axial (`a_*`) lepton currents
/// for V-meson helicities +, −, 0, plus the scalar and pseudoscalar amplitudes.
///
/// Related to the transversity basis by `H_± = (A∥ ± A⊥)/√2` per chirality and
/// `H^{L,R} = H^V ∓ H^A`. The pseudoscalar amplitude absorbs the time-like
/// axial-current contribution: `h_P = √λ [(C_P − C_P') + 2m_ℓ/q² c10⁻] A0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelicityAmplitudes {
    pub kin: KinematicPoint,
    /// N², multiplying every bilinear.
    pub prefactor: f64,
    pub v_plus: Complex64,
    pub v_minus: Complex64,
    pub v_zero: Complex64,
    pub a_plus: Complex64,
    pub a_minus: Complex64,
    pub a_zero: Complex64,
    pub scalar: Complex64,
    pub pseudoscalar: Complex64,
}

impl HelicityAmplitudes {
    /// Assembles the amplitudes directly from couplings and form factors.
    pub fn assemble(inputs: &AmplitudeInputs) -> Self {
        let kin = inputs.kin;
        let ff = &inputs.form_factors;
        let c = &inputs.couplings;
        let m_sq_diff = kin.m_parent * kin.m_parent - kin.m_daughter * kin.m_daughter;
        let mass_sum = kin.m_parent + kin.m_daughter;
        let sqrt_lambda = kin.sqrt_lambda();

        let (c7_even, c7_odd) = EffectiveCouplings::split(c.c7, c.c7p);
        let (c9_even, c9_odd) = EffectiveCouplings::split(c.c9, c.c9p);
        let (c10_even, c10_odd) = EffectiveCouplings::split(c.c10, c.c10p);

        // parity-even (A1, T2) and parity-odd (V, T1) parts of the transverse amplitudes
        let v_even = -(c9_odd * (mass_sum * ff.a1))
            - c7_odd * (2.0 * inputs.m_b * m_sq_diff / kin.q2 * ff.t2);
        let v_odd = (c9_even * (ff.v / mass_sum) + c7_even * (2.0 * inputs.m_b / kin.q2 * ff.t1))
            * sqrt_lambda;
        let a_even = -(c10_odd * (mass_sum * ff.a1));
        let a_odd = c10_even * (sqrt_lambda * ff.v / mass_sum);

        let longitudinal = -8.0 * kin.m_parent * kin.m_daughter / kin.sqrt_q2();

        Self {
            kin,
            prefactor: inputs.prefactor,
            v_plus: v_even + v_odd,
            v_minus: v_even - v_odd,
            v_zero: (c9_odd * ff.a12 + c7_odd * (inputs.m_b * ff.t23 / mass_sum)) * longitudinal,
            a_plus: a_even + a_odd,
            a_minus: a_even - a_odd,
            a_zero: c10_odd * (ff.a12 * longitudinal),
            scalar: (c.cs - c.csp) * (sqrt_lambda * ff.a0),
            pseudoscalar: ((c.cp - c.cpp) + c10_odd * (2.0 * kin.m_lepton / kin.q2))
                * (sqrt_lambda * ff.a0),
        }
    }
}
