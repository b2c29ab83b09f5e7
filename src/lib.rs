// src/lib.rs

//! `bvll` - Angular coefficients of rare semileptonic B → V ℓ⁺ℓ⁻ decays
//!
//! This library computes the twelve angular coefficients J_i(q²) of the
//! B → V(→ P₁P₂) ℓ⁺ℓ⁻ distribution from Wilson coefficients, hadronic form
//! factors and kinematics, together with the observables derived from them
//! (dΓ/dq², F_L, A_FB, S_i, P_i') and their q²-binned averages.
//!
//! Two independent amplitude bases (transversity and helicity) are provided;
//! both reduce to the same coefficients, which the [`validation`] module and
//! the optional cross-check mode of [`Predictor`] verify.

pub mod core;
pub mod kinematics;
pub mod formfactors;
pub mod amplitudes;
pub mod angular;
pub mod observables;
pub mod prediction;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use num_complex::Complex64;
pub use crate::core::{BvllError, DecayMode, Lepton, Meson, Operator, ParamKey, ParameterSet, WilsonCoefficients};
pub use formfactors::{BszExpansion, FormFactorProvider, FormFactors, UntypedProvider};
pub use amplitudes::{HelicityAmplitudes, Normalization, TransversityAmplitudes};
pub use angular::{AngularCoefficients, CoefficientKey, EngineKind};
pub use observables::{BinnedObservables, Observables};
pub use prediction::{compute_angular_coefficients, Predictor, PredictorConfig, Scan, ScanPoint};
pub use validation::{check_agreement, check_amplitude_consistency, check_finite};

// Example: B0 -> K*0 mu mu at q2 = 2 GeV^2 in the Standard Model
// Parameters are read from a JSON object with `category:name` keys for
// qualified entries.
/// ```
/// use bvll::{compute_angular_coefficients, Complex64, ParameterSet, WilsonCoefficients};
///
/// let par = ParameterSet::from_json_str(r#"{
///     "mass:B0": 5.27961, "mass:K*0": 0.89166, "mass:mu": 0.1056583715, "mass:b": 4.17,
///     "Gmu": 1.1663787e-5, "alpha_e": 0.0078161638,
///     "Vus": 0.22, "Vub": 0.0037, "Vcb": 0.041, "gamma": 1.22,
///     "B->K* BSZ:a0_V": 0.34, "B->K* BSZ:a1_V": -1.05, "B->K* BSZ:a2_V": 2.37,
///     "B->K* BSZ:a0_A0": 0.36, "B->K* BSZ:a1_A0": -1.04, "B->K* BSZ:a2_A0": 1.12,
///     "B->K* BSZ:a0_A1": 0.27, "B->K* BSZ:a1_A1": 0.30, "B->K* BSZ:a2_A1": -0.11,
///     "B->K* BSZ:a1_A12": 0.60, "B->K* BSZ:a2_A12": 0.12,
///     "B->K* BSZ:a0_T1": 0.28, "B->K* BSZ:a1_T1": -0.89, "B->K* BSZ:a2_T1": 1.95,
///     "B->K* BSZ:a1_T2": 0.40, "B->K* BSZ:a2_T2": 0.36,
///     "B->K* BSZ:a0_T23": 0.67, "B->K* BSZ:a1_T23": 1.48, "B->K* BSZ:a2_T23": 1.92
/// }"#)?;
///
/// let wc = WilsonCoefficients::new("bsmumu", 4.8)
///     .with("C7", Complex64::new(-0.29, 0.0))
///     .with("C9", Complex64::new(4.2, 0.0))
///     .with("C10", Complex64::new(-4.2, 0.0));
///
/// let j = compute_angular_coefficients(2.0, &wc, &par, "B0", "K*0", "mu")?;
/// assert_eq!(j.len(), 12);
/// assert!(j["1s"] > 0.0 && j["1c"] > 0.0);
/// // no (pseudo)scalar operators: J6c vanishes identically
/// assert_eq!(j["6c"], 0.0);
/// # Ok::<(), bvll::BvllError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
