// tests/common/mod.rs

#![allow(dead_code)]

use bvll::core::SECOND_IN_INV_GEV as SECOND;
use bvll::{Complex64, ParamKey, ParameterSet, WilsonCoefficients};

/// (process, form factor, [a0, a1, a2]); a0 of A12 and T2 are fixed by the
/// endpoint relations and left out.
const BSZ: [(&str, &str, [f64; 3]); 21] = [
    ("B->K*", "V", [0.34, -1.05, 2.37]),
    ("B->K*", "A0", [0.36, -1.04, 1.12]),
    ("B->K*", "A1", [0.27, 0.30, -0.11]),
    ("B->K*", "A12", [0.0, 0.60, 0.12]),
    ("B->K*", "T1", [0.28, -0.89, 1.95]),
    ("B->K*", "T2", [0.0, 0.40, 0.36]),
    ("B->K*", "T23", [0.67, 1.48, 1.92]),
    ("Bs->phi", "V", [0.39, -1.03, 1.70]),
    ("Bs->phi", "A0", [0.39, -0.77, 2.00]),
    ("Bs->phi", "A1", [0.29, 0.28, -0.20]),
    ("Bs->phi", "A12", [0.0, 0.57, 0.32]),
    ("Bs->phi", "T1", [0.31, -0.87, 1.60]),
    ("Bs->phi", "T2", [0.0, 0.41, 0.35]),
    ("Bs->phi", "T23", [0.71, 1.38, 1.60]),
    ("B->rho", "V", [0.33, -0.86, 1.80]),
    ("B->rho", "A0", [0.36, -0.83, 1.33]),
    ("B->rho", "A1", [0.26, 0.39, 0.16]),
    ("B->rho", "A12", [0.0, 0.56, 0.64]),
    ("B->rho", "T1", [0.27, -0.74, 1.45]),
    ("B->rho", "T2", [0.0, 0.47, 0.58]),
    ("B->rho", "T23", [0.75, 1.90, 2.93]),
];

/// Couplings, CKM inputs and lepton and b-quark masses, without meson masses
/// or form-factor coefficients.
pub fn base_parameters() -> ParameterSet {
    ParameterSet::new()
        .with(ParamKey::plain("alpha_e"), 1.0 / 127.940)
        .with(ParamKey::plain("Gmu"), 1.1663787e-5)
        .with(ParamKey::plain("Vus"), 0.22)
        .with(ParamKey::plain("Vub"), 3.7e-3)
        .with(ParamKey::plain("Vcb"), 4.1e-2)
        .with(ParamKey::plain("gamma"), 1.22)
        .with(ParamKey::mass("e"), 1e-16)
        .with(ParamKey::mass("mu"), 0.1056583715)
        .with(ParamKey::mass("tau"), 1.77686)
        .with(ParamKey::mass("b"), 4.17)
}

/// Reference parameter set covering every supported decay mode.
pub fn reference_parameters() -> ParameterSet {
    let mut par = base_parameters()
        .with(ParamKey::mass("B+"), 5.27929)
        .with(ParamKey::mass("B0"), 5.27961)
        .with(ParamKey::mass("Bs"), 5.36679)
        .with(ParamKey::mass("K*0"), 0.89166)
        .with(ParamKey::mass("K*+"), 0.89176)
        .with(ParamKey::mass("phi"), 1.019461)
        .with(ParamKey::mass("rho+"), 0.77526)
        .with(ParamKey::lifetime("B+"), 1638e-15 * SECOND)
        .with(ParamKey::lifetime("B0"), 152e-14 * SECOND)
        .with(ParamKey::lifetime("Bs"), 1515e-15 * SECOND);
    for (process, name, coefficients) in BSZ.iter() {
        for (k, value) in coefficients.iter().enumerate() {
            if k == 0 && (*name == "A12" || *name == "T2") {
                continue;
            }
            par.insert(
                ParamKey::qualified(format!("{} BSZ", process), format!("a{}_{}", k, name)),
                *value,
            );
        }
    }
    par
}

/// Standard-Model-like effective coefficients at 4.8 GeV.
pub fn sm_wilson() -> WilsonCoefficients {
    WilsonCoefficients::new("bsmumu", 4.8)
        .with("C7", Complex64::new(-0.29, 0.0))
        .with("C9", Complex64::new(4.2, 0.0))
        .with("C10", Complex64::new(-4.2, 0.0))
}

/// SM-like coefficients plus the new-physics benchmark with every primed and
/// (pseudo)scalar operator switched on.
pub fn np_wilson() -> WilsonCoefficients {
    sm_wilson()
        .with("CS", Complex64::new(1.31, 0.0))
        .with("CP", Complex64::new(-3.25, 0.0))
        .with("CSp", Complex64::new(3.0, 1.86))
        .with("CPp", Complex64::new(0.0, -1.38))
        .with("C7p", Complex64::new(-3.25, 0.0))
        .with("C9p", Complex64::new(3.0, 1.86))
        .with("C10p", Complex64::new(0.0, -1.38))
}
