// src/observables/binned.rs

//! q²-integrated angular coefficients and bin-averaged observables.

use super::Observables;
use crate::angular::AngularCoefficients;
use crate::core::BvllError;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Composite Simpson nodes and weights for `points` equally spaced nodes on
/// `[lower, upper]`.
///
/// # Errors
/// * `BvllError::Configuration` if `points` is even or smaller than 3, or the
///   interval is empty or not finite.
pub fn simpson_weights(lower: f64, upper: f64, points: usize) -> Result<Vec<(f64, f64)>, BvllError> {
    if points < 3 || points % 2 == 0 {
        return Err(BvllError::configuration(format!(
            "Simpson integration needs an odd number of nodes >= 3, got {}",
            points
        )));
    }
    if !(lower.is_finite() && upper.is_finite()) || upper <= lower {
        return Err(BvllError::configuration(format!(
            "invalid q2 bin [{}, {}]",
            lower, upper
        )));
    }
    let intervals = points - 1;
    let step = (upper - lower) / intervals as f64;
    Ok((0..points)
        .map(|i| {
            // the last node is pinned so the bin edge is hit exactly
            let q2 = if i == intervals { upper } else { lower + step * i as f64 };
            let weight = match i {
                0 => 1.0,
                _ if i == intervals => 1.0,
                _ if i % 2 == 1 => 4.0,
                _ => 2.0,
            };
            (q2, weight * step / 3.0)
        })
        .collect())
}

/// Integrates angular coefficients over `[lower, upper]` with Simpson's rule.
///
/// Nodes are evaluated in parallel; the weighted sum is formed sequentially in
/// node order, so the result does not depend on the thread count.
pub fn integrate<F>(lower: f64, upper: f64, points: usize, eval: F) -> Result<AngularCoefficients, BvllError>
where
    F: Fn(f64) -> Result<AngularCoefficients, BvllError> + Sync,
{
    let nodes = simpson_weights(lower, upper, points)?;
    let values: Vec<AngularCoefficients> = nodes
        .par_iter()
        .map(|(q2, _)| eval(*q2))
        .collect::<Result<Vec<_>, BvllError>>()?;

    let mut total = AngularCoefficients::default();
    for ((_, weight), value) in nodes.iter().zip(values.iter()) {
        total.accumulate(value, *weight);
    }
    Ok(total)
}

/// Coefficients integrated over a q² bin together with the ratios built from them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinnedObservables {
    pub q2_min: f64,
    pub q2_max: f64,
    /// ∫ J_i dq² over the bin.
    pub coefficients: AngularCoefficients,
    /// Ratios of integrated numerators and denominators. `rate` is the
    /// integrated rate (or branching ratio), not the bin average.
    pub observables: Observables,
}

impl BinnedObservables {
    pub fn new(q2_min: f64, q2_max: f64, coefficients: AngularCoefficients) -> Result<Self, BvllError> {
        Ok(Self {
            q2_min,
            q2_max,
            coefficients,
            observables: Observables::from_coefficients(&coefficients)?,
        })
    }

    /// Integrated rate divided by the bin width.
    pub fn average_rate(&self) -> f64 {
        self.observables.rate / (self.q2_max - self.q2_min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simpson_is_exact_for_cubics() {
        let nodes = simpson_weights(1.0, 3.0, 5).unwrap();
        let integral: f64 = nodes.iter().map(|(x, w)| w * (x * x * x - 2.0 * x)).sum();
        // [x^4/4 - x^2] from 1 to 3 = (81/4 - 9) - (1/4 - 1)
        assert!((integral - 12.0).abs() < 1e-12);
        assert_eq!(nodes.last().map(|n| n.0), Some(3.0));
    }

    #[test]
    fn rejects_even_node_counts_and_empty_bins() {
        assert!(matches!(simpson_weights(1.0, 2.0, 4), Err(BvllError::Configuration { .. })));
        assert!(matches!(simpson_weights(1.0, 2.0, 1), Err(BvllError::Configuration { .. })));
        assert!(matches!(simpson_weights(2.0, 2.0, 5), Err(BvllError::Configuration { .. })));
    }

    #[test]
    fn integrate_propagates_node_failures() {
        let result = integrate(1.0, 2.0, 5, |q2| {
            if q2 > 1.9 {
                Err(BvllError::domain(q2, "outside"))
            } else {
                Ok(AngularCoefficients::default())
            }
        });
        assert!(matches!(result, Err(BvllError::Domain { .. })));
    }
}
