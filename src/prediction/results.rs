// src/prediction/results.rs
use crate::angular::AngularCoefficients;
use crate::core::BvllError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Angular coefficients at one q² of a scan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScanPoint {
    pub q2: f64,
    pub coefficients: AngularCoefficients,
}

/// Result of a q² scan, in the order the points were requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scan {
    /// Decay mode, e.g. `B0 -> K*0`.
    mode: String,
    /// Lepton label, e.g. `mu`.
    lepton: String,
    points: Vec<ScanPoint>,
}

impl Scan {
    pub(crate) fn new(mode: String, lepton: String, points: Vec<ScanPoint>) -> Self {
        Self { mode, lepton, points }
    }

    pub fn mode(&self) -> &str {
        &self.mode
    }

    pub fn lepton(&self) -> &str {
        &self.lepton
    }

    pub fn points(&self) -> &[ScanPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Serialises the scan as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, BvllError> {
        serde_json::to_string_pretty(self)
            .map_err(|err| BvllError::configuration(format!("cannot serialise scan: {}", err)))
    }
}

impl fmt::Display for Scan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "q2 scan for {} ({}):", self.mode, self.lepton)?;
        if self.points.is_empty() {
            writeln!(f, "  no points")?;
        }
        for point in &self.points {
            writeln!(f, "  q2 = {:>8.4}: {}", point.q2, point.coefficients)?;
        }
        Ok(())
    }
}
