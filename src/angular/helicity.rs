// src/angular/helicity.rs

use super::AngularCoefficients;
use crate::amplitudes::HelicityAmplitudes;

/// Reduces vector/axial helicity amplitudes to the angular coefficients.
///
/// Independent of [`super::transversity_coefficients`]: the bilinears are
/// written directly in the helicity basis, with the interference between the
/// two lepton chiralities already summed into vector/axial products.
pub fn helicity_coefficients(amps: &HelicityAmplitudes) -> AngularCoefficients {
    let kin = &amps.kin;
    let beta = kin.beta;
    let beta2 = kin.beta2();
    let mass_term = kin.lepton_mass_term();
    let ratio = kin.lepton_mass_ratio();

    let (vp, vm, v0) = (amps.v_plus, amps.v_minus, amps.v_zero);
    let (ap, am, a0) = (amps.a_plus, amps.a_minus, amps.a_zero);
    let (h_s, h_p) = (amps.scalar, amps.pseudoscalar);

    let vector_sq = vp.norm_sqr() + vm.norm_sqr();
    let axial_sq = ap.norm_sqr() + am.norm_sqr();
    let long_sq = v0.norm_sqr() + a0.norm_sqr();
    let plus_minus = vp * vm.conj() + ap * am.conj();

    AngularCoefficients {
        j1s: (2.0 + beta2) / 2.0 * (vector_sq + axial_sq) + mass_term * (vector_sq - axial_sq),
        j1c: 2.0 * long_sq
            + 2.0 * mass_term * (v0.norm_sqr() - a0.norm_sqr())
            + 4.0 * h_p.norm_sqr()
            + 4.0 * beta2 * h_s.norm_sqr(),
        j2s: beta2 / 2.0 * (vector_sq + axial_sq),
        j2c: -2.0 * beta2 * long_sq,
        j3: -2.0 * beta2 * plus_minus.re,
        j4: beta2 * (v0 * (vp + vm).conj() + a0 * (ap + am).conj()).re,
        j5: -2.0 * beta * (v0 * (ap - am).conj() + a0 * (vp - vm).conj()).re
            + 4.0 * beta * ratio * ((vp + vm) * h_s.conj()).re,
        j6s: -4.0 * beta * (vp * ap.conj() - vm * am.conj()).re,
        j6c: -16.0 * beta * ratio * (v0 * h_s.conj()).re,
        j7: -2.0 * beta * (v0 * (ap + am).conj() + a0 * (vp + vm).conj()).im
            - 4.0 * beta * ratio * ((vp - vm) * h_s.conj()).im,
        j8: beta2 * (v0 * (vp - vm).conj() + a0 * (ap - am).conj()).im,
        j9: 2.0 * beta2 * plus_minus.im,
    }
    .scaled(amps.prefactor)
}
