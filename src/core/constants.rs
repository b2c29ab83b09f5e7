//! Unit-conversion and mathematical constants.
//!
//! Physical inputs (masses, couplings, CKM elements, lifetimes) are never
//! hard-coded here; they always arrive through a `ParameterSet`.

/// Constants used by the rate normalisation.
pub mod bvll_constants {
    /// π
    pub const PI: f64 = std::f64::consts::PI;
    /// One second expressed in natural units (GeV⁻¹), i.e. 1/ħ.
    pub const SECOND_IN_INV_GEV: f64 = 1.519_267_515_435_317e24;
    /// Denominator `3 · 2¹⁰ · π⁵` of the B → V ℓℓ rate prefactor.
    pub const RATE_DENOMINATOR: f64 = 3.0 * 1024.0 * PI * PI * PI * PI * PI;
}
