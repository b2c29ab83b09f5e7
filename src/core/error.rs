// src/core/error.rs

//! Error handling logic

use thiserror::Error;

/// Errors raised while evaluating amplitudes, angular coefficients or observables.
///
/// Every failure is reported synchronously to the caller; nothing is retried
/// internally and no partially filled result is ever returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BvllError {
    /// The requested q² lies outside the kinematically allowed region
    /// `4 m_l² <= q² <= (m_B - m_V)²` (or is not a positive finite number).
    #[error("kinematic domain violation at q2 = {q2}: {message}")]
    Domain {
        /// Offending dilepton invariant mass squared (GeV²).
        q2: f64,
        /// Description of the violated bound.
        message: String,
    },

    /// Unsupported decay mode, lepton flavour, or an invalid configuration value.
    #[error("configuration error: {message}")]
    Configuration {
        /// Configuration failure message
        message: String,
    },

    /// The form-factor provider could not supply a form factor.
    #[error("missing form factor `{name}` for {process}")]
    MissingFormFactor {
        /// Hadronic transition label, e.g. `B->K*`.
        process: String,
        /// Name of the missing form factor or expansion coefficient.
        name: String,
    },

    /// A required entry of the parameter set is absent.
    #[error("missing parameter `{key}`")]
    MissingParameter {
        /// Textual form of the missing key.
        key: String,
    },

    /// A result could not be produced without losing precision, or is not finite.
    #[error("numerical instability: {message}")]
    NumericalInstability {
        /// NumericalInstability failure message
        message: String,
    },
}

impl BvllError {
    pub(crate) fn domain(q2: f64, message: impl Into<String>) -> Self {
        BvllError::Domain { q2, message: message.into() }
    }

    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        BvllError::Configuration { message: message.into() }
    }

    pub(crate) fn instability(message: impl Into<String>) -> Self {
        BvllError::NumericalInstability { message: message.into() }
    }
}
