// src/validation/mod.rs

//! Checks applied to amplitudes and angular coefficients: finiteness and
//! agreement between the transversity and helicity constructions.

use crate::amplitudes::{HelicityAmplitudes, TransversityAmplitudes};
use crate::angular::AngularCoefficients;
use crate::core::BvllError;
use std::f64::consts::FRAC_1_SQRT_2;

// Default tolerances (can be overridden by caller)
const DEFAULT_AGREEMENT_TOLERANCE: f64 = 1e-12;
const DEFAULT_AMPLITUDE_TOLERANCE: f64 = 1e-12;

/// Checks that every coefficient is a finite real number.
///
/// # Returns
/// * `Err(BvllError::NumericalInstability)` naming the first offending coefficient.
pub fn check_finite(j: &AngularCoefficients) -> Result<(), BvllError> {
    match j.iter().find(|(_, value)| !value.is_finite()) {
        Some((key, value)) => Err(BvllError::instability(format!("{} = {} is not finite", key, value))),
        None => Ok(()),
    }
}

/// Rate scale |J1s| + |J1c| of a coefficient set.
///
/// Every bilinear is bounded by the transverse and longitudinal norms that make
/// up J1s and J1c, so this sets the size of rounding error in any coefficient.
pub fn rate_scale(j: &AngularCoefficients) -> f64 {
    j.j1s.abs() + j.j1c.abs()
}

// Values below this fraction of the overall scale are rounding noise.
const ROUNDING_NOISE: f64 = 64.0 * f64::EPSILON;

/// `diff` relative to the larger of the magnitudes `x` and `y`, or zero when
/// both magnitudes are rounding noise on `scale`.
fn relative_deviation(diff: f64, x: f64, y: f64, scale: f64) -> f64 {
    let size = x.max(y);
    if size <= ROUNDING_NOISE * scale { 0.0 } else { diff / size }
}

/// Largest relative deviation between two coefficient sets.
///
/// Each difference is divided by `max(|a|, |b|)` of its own coefficient.
/// Coefficients that vanish in both sets up to rounding noise on the rate
/// scale (see [`rate_scale`]) count as agreeing.
pub fn max_deviation(a: &AngularCoefficients, b: &AngularCoefficients) -> f64 {
    let floor = rate_scale(a).max(rate_scale(b));
    a.iter()
        .zip(b.iter())
        .map(|((_, x), (_, y))| relative_deviation((x - y).abs(), x.abs(), y.abs(), floor))
        .fold(0.0, f64::max)
}

/// Checks that two coefficient sets agree within `tolerance`.
///
/// # Arguments
/// * `a`, `b` - Coefficient sets from the two reductions.
/// * `tolerance` - Allowed relative deviation per coefficient (see [`max_deviation`]). Defaults to 1e-12.
///
/// # Returns
/// * `Ok(())` if every coefficient agrees.
/// * `Err(BvllError::NumericalInstability)` naming the first offending coefficient otherwise.
pub fn check_agreement(
    a: &AngularCoefficients,
    b: &AngularCoefficients,
    tolerance: Option<f64>,
) -> Result<(), BvllError> {
    check_finite(a)?;
    check_finite(b)?;
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_AGREEMENT_TOLERANCE);
    let floor = rate_scale(a).max(rate_scale(b));
    for ((key, x), (_, y)) in a.iter().zip(b.iter()) {
        let deviation = relative_deviation((x - y).abs(), x.abs(), y.abs(), floor);
        if deviation > effective_tolerance {
            return Err(BvllError::instability(format!(
                "transversity and helicity results disagree on {}: {} vs {} (relative deviation {:e}, tolerance {})",
                key, x, y, deviation, effective_tolerance
            )));
        }
    }
    Ok(())
}

/// Checks the basis relations between the two amplitude sets:
/// `H^{L,R}_± = (A∥ ± A⊥)/√2`, `H^{L,R}_0 = A0` with `H^{L,R} = H^V ∓ H^A`,
/// `h_S = −A_S/2` and `h_P = A_P + (m_ℓ/√q²) A_t`.
///
/// Each pair is compared relative to its own modulus; pairs that are rounding
/// noise on the largest amplitude modulus in both bases count as agreeing.
///
/// # Arguments
/// * `tolerance` - Allowed relative deviation per amplitude. Defaults to 1e-12.
pub fn check_amplitude_consistency(
    trans: &TransversityAmplitudes,
    heli: &HelicityAmplitudes,
    tolerance: Option<f64>,
) -> Result<(), BvllError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_AMPLITUDE_TOLERANCE);
    let ratio = trans.kin.lepton_mass_ratio();
    let pairs = [
        ("H_+^L", heli.v_plus - heli.a_plus, (trans.para_l + trans.perp_l) * FRAC_1_SQRT_2),
        ("H_-^L", heli.v_minus - heli.a_minus, (trans.para_l - trans.perp_l) * FRAC_1_SQRT_2),
        ("H_+^R", heli.v_plus + heli.a_plus, (trans.para_r + trans.perp_r) * FRAC_1_SQRT_2),
        ("H_-^R", heli.v_minus + heli.a_minus, (trans.para_r - trans.perp_r) * FRAC_1_SQRT_2),
        ("H_0^L", heli.v_zero - heli.a_zero, trans.zero_l),
        ("H_0^R", heli.v_zero + heli.a_zero, trans.zero_r),
        ("h_S", heli.scalar, trans.scalar * -0.5),
        ("h_P", heli.pseudoscalar, trans.pseudoscalar + trans.time * ratio),
    ];
    let scale = pairs
        .iter()
        .map(|(_, h, t)| h.norm().max(t.norm()))
        .fold(0.0, f64::max);
    for (name, h, t) in pairs.iter() {
        if !(h.is_finite() && t.is_finite()) {
            return Err(BvllError::instability(format!("amplitude {} is not finite", name)));
        }
        if relative_deviation((h - t).norm(), h.norm(), t.norm(), scale) > effective_tolerance {
            return Err(BvllError::instability(format!(
                "amplitude {} inconsistent between bases: {} vs {}",
                name, h, t
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AngularCoefficients {
        AngularCoefficients { j1s: 3.0, j1c: 1.0, j2s: 1.0, j2c: -1.0, j5: 0.2, ..Default::default() }
    }

    #[test]
    fn lockstep_zeros_agree() {
        let a = sample();
        let mut b = sample();
        // rounding noise on an analytically vanishing coefficient
        b.j7 = -5e-15 * rate_scale(&a);
        assert!(check_agreement(&a, &b, None).is_ok());
        assert!(max_deviation(&a, &b) < 1e-14);
    }

    #[test]
    fn genuine_disagreement_is_instability() {
        let a = sample();
        let mut b = sample();
        b.j5 = 0.2 * (1.0 + 1e-6);
        match check_agreement(&a, &b, Some(1e-9)) {
            Err(BvllError::NumericalInstability { message }) => assert!(message.contains("J5")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn small_coefficients_are_compared_against_their_own_size() {
        let a = AngularCoefficients { j6c: -1e-13, j9: 0.01, ..sample() };
        // sign flip well below the rate scale
        let flipped = AngularCoefficients { j6c: 1e-12, ..a };
        assert!(check_agreement(&a, &flipped, None).is_err());
        let drifted = AngularCoefficients { j9: 0.01 * (1.0 + 1e-10), ..a };
        match check_agreement(&a, &drifted, None) {
            Err(BvllError::NumericalInstability { message }) => assert!(message.contains("J9")),
            other => panic!("unexpected {:?}", other),
        }
        assert!((max_deviation(&a, &drifted) - 1e-10).abs() < 1e-12);
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let mut a = sample();
        a.j9 = f64::NAN;
        assert!(matches!(check_finite(&a), Err(BvllError::NumericalInstability { .. })));
        assert!(check_agreement(&a, &sample(), None).is_err());
    }
}
