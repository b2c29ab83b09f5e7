// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod error;
pub mod params;
pub mod wilson;
pub mod mode;

// Re-export public types for convenient access via `bvll::core::TypeName`
pub use error::BvllError;
pub use params::{ParamKey, ParameterSet};
pub use wilson::{EffectiveCouplings, Operator, WilsonCoefficients};
pub use mode::{DecayMode, Lepton, Meson, QuarkTransition};

pub mod constants;
pub use constants::bvll_constants::{PI, RATE_DENOMINATOR, SECOND_IN_INV_GEV}; // Re-export
