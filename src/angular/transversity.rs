// src/angular/transversity.rs

use super::AngularCoefficients;
use crate::amplitudes::TransversityAmplitudes;
use std::f64::consts::SQRT_2;

/// Reduces transversity amplitudes to the angular coefficients.
///
/// Lepton-mass dependence enters only through β_ℓ, β_ℓ², 4m_ℓ²/q² and
/// m_ℓ/√q², all finite over the whole physical range, so the coefficients are
/// finite at both endpoints. Scalar terms are products with `A_S`/`A_P` and
/// vanish exactly when those amplitudes are zero.
pub fn transversity_coefficients(amps: &TransversityAmplitudes) -> AngularCoefficients {
    let kin = &amps.kin;
    let beta = kin.beta;
    let beta2 = kin.beta2();
    let mass_term = kin.lepton_mass_term();
    let ratio = kin.lepton_mass_ratio();

    let (perp_l, perp_r) = (amps.perp_l, amps.perp_r);
    let (para_l, para_r) = (amps.para_l, amps.para_r);
    let (zero_l, zero_r) = (amps.zero_l, amps.zero_r);
    let (time, scalar, pseudo) = (amps.time, amps.scalar, amps.pseudoscalar);

    let transverse =
        perp_l.norm_sqr() + para_l.norm_sqr() + perp_r.norm_sqr() + para_r.norm_sqr();
    let longitudinal = zero_l.norm_sqr() + zero_r.norm_sqr();

    let j1s = (2.0 + beta2) / 4.0 * transverse
        + mass_term * (perp_l * perp_r.conj() + para_l * para_r.conj()).re;
    let j1c = longitudinal
        + mass_term * (time.norm_sqr() + 2.0 * (zero_l * zero_r.conj()).re)
        + 8.0 * ratio * (time * pseudo.conj()).re
        + 4.0 * pseudo.norm_sqr()
        + beta2 * scalar.norm_sqr();
    let j2s = beta2 / 4.0 * transverse;
    let j2c = -beta2 * longitudinal;
    let j3 = beta2 / 2.0
        * (perp_l.norm_sqr() - para_l.norm_sqr() + perp_r.norm_sqr() - para_r.norm_sqr());
    let j4 = beta2 / SQRT_2 * (zero_l * para_l.conj() + zero_r * para_r.conj()).re;
    let j5 = SQRT_2
        * beta
        * ((zero_l * perp_l.conj() - zero_r * perp_r.conj()).re
            - ratio * ((para_l + para_r) * scalar.conj()).re);
    let j6s = 2.0 * beta * (para_l * perp_l.conj() - para_r * perp_r.conj()).re;
    let j6c = 4.0 * beta * ratio * ((zero_l + zero_r) * scalar.conj()).re;
    let j7 = SQRT_2
        * beta
        * ((zero_l * para_l.conj() - zero_r * para_r.conj()).im
            + ratio * ((perp_l + perp_r) * scalar.conj()).im);
    let j8 = beta2 / SQRT_2 * (zero_l * perp_l.conj() + zero_r * perp_r.conj()).im;
    let j9 = beta2 * (para_l.conj() * perp_l + para_r.conj() * perp_r).im;

    AngularCoefficients {
        j1s,
        j1c,
        j2s,
        j2c,
        j3,
        j4,
        j5,
        j6s,
        j6c,
        j7,
        j8,
        j9,
    }
    .scaled(amps.prefactor)
}
