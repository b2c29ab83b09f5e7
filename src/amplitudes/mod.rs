// src/amplitudes/mod.rs

//! Assembly of B → V ℓℓ decay amplitudes from Wilson coefficients, form
//! factors and kinematics.
//!
//! Two independent constructions are provided:
//! * [`TransversityAmplitudes`]: A⊥, A∥, A0 for each lepton chirality plus the
//!   time-like, scalar and pseudoscalar amplitudes;
//! * [`HelicityAmplitudes`]: vector/axial-current helicity amplitudes built
//!   directly from the couplings, not derived from the transversity set.
//!
//! Amplitudes are reduced (the common normalisation N is kept apart as
//! `prefactor = N²`) and carry the kinematic point they were evaluated at.

mod helicity;
mod transversity;

pub use helicity::HelicityAmplitudes;
pub use transversity::TransversityAmplitudes;

use crate::core::{
    BvllError, DecayMode, EffectiveCouplings, Lepton, ParameterSet, WilsonCoefficients,
};
use crate::formfactors::{FormFactorProvider, FormFactors};
use crate::kinematics::{rate_prefactor, CkmMatrix, KinematicPoint};
use serde::{Deserialize, Serialize};

/// Overall normalisation convention of the angular coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    /// Differential decay rate dΓ/dq² (GeV⁻¹).
    #[default]
    DecayRate,
    /// Differential branching ratio dBR/dq² (GeV⁻²): rate times the parent lifetime.
    BranchingRatio,
}

/// Everything the amplitude constructions need at one q².
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmplitudeInputs {
    pub kin: KinematicPoint,
    pub form_factors: FormFactors,
    pub couplings: EffectiveCouplings,
    /// b-quark mass entering the dipole contributions.
    pub m_b: f64,
    /// N², multiplying every bilinear.
    pub prefactor: f64,
}

impl AmplitudeInputs {
    /// Gathers masses, couplings, CKM factor and form factors for one evaluation.
    ///
    /// # Arguments
    /// * `q2` - Dilepton invariant mass squared (GeV²).
    /// * `wc` - Wilson-coefficient snapshot.
    /// * `par` - Parameter set providing masses, `Gmu`, `alpha_e`, CKM inputs
    ///   and, for [`Normalization::BranchingRatio`], the parent lifetime.
    /// * `mode` - Parent/daughter pair.
    /// * `lepton` - Lepton flavour.
    /// * `provider` - Form-factor source.
    /// * `normalization` - Rate or branching-ratio normalisation.
    ///
    /// # Returns
    /// * `Err(BvllError::Domain)` if `q2` is outside the physical range; other
    ///   variants if parameters or form factors are unavailable.
    pub fn prepare<P: FormFactorProvider + ?Sized>(
        q2: f64,
        wc: &WilsonCoefficients,
        par: &ParameterSet,
        mode: &DecayMode,
        lepton: Lepton,
        provider: &P,
        normalization: Normalization,
    ) -> Result<Self, BvllError> {
        let parent = mode.parent().label();
        let kin = KinematicPoint::new(
            q2,
            par.mass(parent)?,
            par.mass(mode.daughter().label())?,
            par.mass(lepton.label())?,
        )?;
        let couplings = EffectiveCouplings::from_snapshot(wc)?;
        let form_factors = provider.form_factors(q2, mode, par)?;

        let xi_t = CkmMatrix::from_parameters(par)?.xi_t(mode.transition());
        let mut prefactor = rate_prefactor(&kin, par.value("Gmu")?, par.value("alpha_e")?, xi_t);
        if normalization == Normalization::BranchingRatio {
            prefactor *= par.lifetime(parent)?;
        }

        Ok(Self {
            kin,
            form_factors,
            couplings,
            m_b: par.mass("b")?,
            prefactor,
        })
    }
}
