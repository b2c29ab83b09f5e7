// src/prediction/mod.rs

//! Typed entry point tying kinematics, form factors, amplitudes and the
//! angular-coefficient engine together, plus the string-keyed
//! [`compute_angular_coefficients`] boundary.

mod config;
mod results;

pub use config::PredictorConfig;
pub use results::{Scan, ScanPoint};

use crate::amplitudes::{AmplitudeInputs, HelicityAmplitudes, TransversityAmplitudes};
use crate::angular::{helicity_coefficients, transversity_coefficients, AngularCoefficients, EngineKind};
use crate::core::{BvllError, DecayMode, Lepton, ParameterSet, WilsonCoefficients};
use crate::formfactors::{BszExpansion, FormFactorProvider};
use crate::kinematics::KinematicPoint;
use crate::observables::{integrate, BinnedObservables, Observables};
use crate::validation::{check_agreement, check_finite};
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Computes the angular coefficients for one decay mode and lepton flavour.
///
/// Evaluations are pure: the predictor holds no mutable state, so one instance
/// can be shared across threads.
#[derive(Debug, Clone)]
pub struct Predictor<P: FormFactorProvider = BszExpansion> {
    mode: DecayMode,
    lepton: Lepton,
    provider: P,
    config: PredictorConfig,
}

impl Predictor<BszExpansion> {
    /// Creates a predictor using the BSZ form-factor expansion and the default configuration.
    pub fn new(mode: DecayMode, lepton: Lepton) -> Self {
        Self::with_provider(mode, lepton, BszExpansion::new())
    }

    /// Resolves meson and lepton labels, e.g. `("B0", "K*0", "mu")`.
    pub fn from_labels(parent: &str, daughter: &str, lepton: &str) -> Result<Self, BvllError> {
        Ok(Self::new(DecayMode::from_labels(parent, daughter)?, lepton.parse()?))
    }
}

impl<P: FormFactorProvider> Predictor<P> {
    /// Creates a predictor with a custom form-factor provider.
    pub fn with_provider(mode: DecayMode, lepton: Lepton, provider: P) -> Self {
        Self {
            mode,
            lepton,
            provider,
            config: PredictorConfig::default(),
        }
    }

    /// Replaces the configuration after validating it.
    pub fn with_config(mut self, config: PredictorConfig) -> Result<Self, BvllError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn mode(&self) -> &DecayMode {
        &self.mode
    }

    pub fn lepton(&self) -> Lepton {
        self.lepton
    }

    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Physical range `[4 m_ℓ², (m_B − m_V)²]` for the masses in `par`.
    pub fn q2_range(&self, par: &ParameterSet) -> Result<(f64, f64), BvllError> {
        let m_lepton = par.mass(self.lepton.label())?;
        let m_parent = par.mass(self.mode.parent().label())?;
        let m_daughter = par.mass(self.mode.daughter().label())?;
        Ok((KinematicPoint::q2_min(m_lepton), KinematicPoint::q2_max(m_parent, m_daughter)))
    }

    fn inputs(
        &self,
        q2: f64,
        wc: &WilsonCoefficients,
        par: &ParameterSet,
    ) -> Result<AmplitudeInputs, BvllError> {
        AmplitudeInputs::prepare(
            q2,
            wc,
            par,
            &self.mode,
            self.lepton,
            &self.provider,
            self.config.normalization,
        )
    }

    /// Transversity amplitudes at `q2`.
    pub fn transversity_amplitudes(
        &self,
        q2: f64,
        wc: &WilsonCoefficients,
        par: &ParameterSet,
    ) -> Result<TransversityAmplitudes, BvllError> {
        Ok(TransversityAmplitudes::assemble(&self.inputs(q2, wc, par)?))
    }

    /// Helicity amplitudes at `q2`.
    pub fn helicity_amplitudes(
        &self,
        q2: f64,
        wc: &WilsonCoefficients,
        par: &ParameterSet,
    ) -> Result<HelicityAmplitudes, BvllError> {
        Ok(HelicityAmplitudes::assemble(&self.inputs(q2, wc, par)?))
    }

    /// Angular coefficients at `q2`, reduced from the configured basis.
    ///
    /// # Arguments
    /// * `q2` - Dilepton invariant mass squared (GeV²), `4 m_ℓ² <= q2 <= (m_B − m_V)²`.
    /// * `wc` - Wilson-coefficient snapshot; absent coefficients are zero.
    /// * `par` - Masses, couplings, CKM inputs and form-factor parameters.
    ///
    /// # Returns
    /// * `Ok(AngularCoefficients)` with every entry finite.
    /// * `Err(BvllError::Domain)` for `q2` outside the physical range.
    /// * `Err(BvllError::NumericalInstability)` if the result is not finite or,
    ///   with `cross_check` enabled, if the two bases disagree.
    pub fn angular_coefficients(
        &self,
        q2: f64,
        wc: &WilsonCoefficients,
        par: &ParameterSet,
    ) -> Result<AngularCoefficients, BvllError> {
        let inputs = self.inputs(q2, wc, par)?;
        let transversity = || transversity_coefficients(&TransversityAmplitudes::assemble(&inputs));
        let helicity = || helicity_coefficients(&HelicityAmplitudes::assemble(&inputs));

        let j = match self.config.engine {
            EngineKind::Transversity => transversity(),
            EngineKind::Helicity => helicity(),
        };
        check_finite(&j)?;

        if self.config.cross_check {
            let other = match self.config.engine {
                EngineKind::Transversity => helicity(),
                EngineKind::Helicity => transversity(),
            };
            if let Err(err) = check_agreement(&j, &other, Some(self.config.cross_check_tolerance)) {
                tracing::warn!(q2, mode = %self.mode, lepton = %self.lepton, error = %err, "cross-check failed");
                return Err(err);
            }
        }

        tracing::debug!(q2, mode = %self.mode, lepton = %self.lepton, j1s = j.j1s, j1c = j.j1c, "angular coefficients");
        Ok(j)
    }

    /// Observables at `q2`.
    pub fn observables(
        &self,
        q2: f64,
        wc: &WilsonCoefficients,
        par: &ParameterSet,
    ) -> Result<Observables, BvllError> {
        Observables::from_coefficients(&self.angular_coefficients(q2, wc, par)?)
    }

    /// Evaluates the angular coefficients at every point of `q2_points` in parallel.
    ///
    /// Results keep the input order and equal those of sequential calls to
    /// [`Predictor::angular_coefficients`] bit for bit. The first failing point
    /// fails the whole scan.
    pub fn scan(
        &self,
        q2_points: &[f64],
        wc: &WilsonCoefficients,
        par: &ParameterSet,
    ) -> Result<Scan, BvllError> {
        let points = q2_points
            .par_iter()
            .map(|&q2| -> Result<ScanPoint, BvllError> {
                Ok(ScanPoint {
                    q2,
                    coefficients: self.angular_coefficients(q2, wc, par)?,
                })
            })
            .collect::<Result<Vec<_>, BvllError>>()?;
        Ok(Scan::new(self.mode.to_string(), self.lepton.to_string(), points))
    }

    /// Integrates the coefficients over `[q2_min, q2_max]` and forms the
    /// bin-level observables.
    ///
    /// # Errors
    /// * `BvllError::Domain` if either edge is outside the physical range.
    /// * `BvllError::Configuration` if the bin is empty.
    pub fn binned(
        &self,
        q2_min: f64,
        q2_max: f64,
        wc: &WilsonCoefficients,
        par: &ParameterSet,
    ) -> Result<BinnedObservables, BvllError> {
        let (lower, upper) = self.q2_range(par)?;
        for edge in [q2_min, q2_max] {
            if !edge.is_finite() || edge <= 0.0 || edge < lower || edge > upper {
                return Err(BvllError::domain(
                    edge,
                    format!("bin edge outside the physical range [{}, {}]", lower, upper),
                ));
            }
        }
        let integrated = integrate(q2_min, q2_max, self.config.bin_points, |q2| {
            self.angular_coefficients(q2, wc, par)
        })?;
        tracing::debug!(q2_min, q2_max, mode = %self.mode, lepton = %self.lepton, "binned coefficients");
        BinnedObservables::new(q2_min, q2_max, integrated)
    }
}

/// String-keyed entry point: angular coefficients keyed `"1s"`, `"1c"`, `"2s"`,
/// `"2c"`, `"3"`, `"4"`, `"5"`, `"6s"`, `"6c"`, `"7"`, `"8"`, `"9"`, using the
/// BSZ form factors and the default configuration.
///
/// # Errors
/// * `BvllError::Configuration` for unsupported meson or lepton labels.
/// * Any error of [`Predictor::angular_coefficients`].
pub fn compute_angular_coefficients(
    q2: f64,
    wc: &WilsonCoefficients,
    par: &ParameterSet,
    parent: &str,
    daughter: &str,
    lepton: &str,
) -> Result<BTreeMap<String, f64>, BvllError> {
    let predictor = Predictor::from_labels(parent, daughter, lepton)?;
    Ok(predictor.angular_coefficients(q2, wc, par)?.to_map())
}
