// src/prediction/config.rs

use crate::amplitudes::Normalization;
use crate::angular::EngineKind;
use crate::core::BvllError;
use serde::{Deserialize, Serialize};

/// Options controlling a [`super::Predictor`].
///
/// Every field has a default, so `{}` is a valid JSON configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictorConfig {
    /// Rate (`decay_rate`) or branching-ratio (`branching_ratio`) normalisation.
    #[serde(default)]
    pub normalization: Normalization,
    /// Amplitude basis used to produce the returned coefficients.
    #[serde(default)]
    pub engine: EngineKind,
    /// Evaluate both bases and fail with `NumericalInstability` if they disagree.
    #[serde(default)]
    pub cross_check: bool,
    #[serde(default = "PredictorConfig::default_cross_check_tolerance")]
    pub cross_check_tolerance: f64,
    /// Simpson nodes per q² bin (odd, at least 3).
    #[serde(default = "PredictorConfig::default_bin_points")]
    pub bin_points: usize,
}

impl PredictorConfig {
    const fn default_cross_check_tolerance() -> f64 {
        1e-9
    }

    const fn default_bin_points() -> usize {
        65
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, BvllError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|err| BvllError::configuration(format!("invalid predictor config: {}", err)))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects tolerances that are not positive and finite, and unusable node counts.
    pub fn validate(&self) -> Result<(), BvllError> {
        if !(self.cross_check_tolerance.is_finite() && self.cross_check_tolerance > 0.0) {
            return Err(BvllError::configuration(format!(
                "cross_check_tolerance must be positive, got {}",
                self.cross_check_tolerance
            )));
        }
        if self.bin_points < 3 || self.bin_points % 2 == 0 {
            return Err(BvllError::configuration(format!(
                "bin_points must be odd and at least 3, got {}",
                self.bin_points
            )));
        }
        Ok(())
    }
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            normalization: Normalization::default(),
            engine: EngineKind::default(),
            cross_check: false,
            cross_check_tolerance: Self::default_cross_check_tolerance(),
            bin_points: Self::default_bin_points(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        assert_eq!(PredictorConfig::from_json_str("{}").unwrap(), PredictorConfig::default());
    }

    #[test]
    fn parses_snake_case_variants() {
        let config = PredictorConfig::from_json_str(
            r#"{"normalization": "branching_ratio", "engine": "helicity", "cross_check": true, "bin_points": 11}"#,
        )
        .unwrap();
        assert_eq!(config.normalization, Normalization::BranchingRatio);
        assert_eq!(config.engine, EngineKind::Helicity);
        assert!(config.cross_check);
        assert_eq!(config.bin_points, 11);
    }

    #[test]
    fn rejects_invalid_values() {
        for json in [
            r#"{"bin_points": 10}"#,
            r#"{"bin_points": 1}"#,
            r#"{"cross_check_tolerance": -1.0}"#,
            r#"{"engine": "dirac"}"#,
        ] {
            assert!(matches!(
                PredictorConfig::from_json_str(json),
                Err(BvllError::Configuration { .. })
            ));
        }
    }
}
