// src/core/wilson.rs

use super::error::BvllError;
use num_complex::Complex64;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Operators of the b → q ℓℓ effective Hamiltonian that enter B → V ℓℓ.
///
/// Primed operators have flipped quark chirality. The (pseudo)scalar operators
/// are normalised with an explicit b-quark mass, so their coefficients enter
/// the amplitudes without a quark-mass ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operator {
    /// Electromagnetic dipole.
    C7,
    /// Chirality-flipped electromagnetic dipole.
    C7p,
    /// Vector lepton current.
    C9,
    /// Chirality-flipped vector lepton current.
    C9p,
    /// Axial lepton current.
    C10,
    /// Chirality-flipped axial lepton current.
    C10p,
    /// Scalar lepton current.
    CS,
    /// Chirality-flipped scalar lepton current.
    CSp,
    /// Pseudoscalar lepton current.
    CP,
    /// Chirality-flipped pseudoscalar lepton current.
    CPp,
}

impl Operator {
    /// All operators in canonical order.
    pub const ALL: [Operator; 10] = [
        Operator::C7,
        Operator::C7p,
        Operator::C9,
        Operator::C9p,
        Operator::C10,
        Operator::C10p,
        Operator::CS,
        Operator::CSp,
        Operator::CP,
        Operator::CPp,
    ];

    /// String tag used in [`WilsonCoefficients`].
    pub fn label(&self) -> &'static str {
        match self {
            Operator::C7 => "C7",
            Operator::C7p => "C7p",
            Operator::C9 => "C9",
            Operator::C9p => "C9p",
            Operator::C10 => "C10",
            Operator::C10p => "C10p",
            Operator::CS => "CS",
            Operator::CSp => "CSp",
            Operator::CP => "CP",
            Operator::CPp => "CPp",
        }
    }

    /// Returns `true` for the four (pseudo)scalar operators.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Operator::CS | Operator::CSp | Operator::CP | Operator::CPp)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Operator {
    type Err = BvllError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .iter()
            .copied()
            .find(|op| op.label() == s)
            .ok_or_else(|| BvllError::configuration(format!("unknown operator `{}`", s)))
    }
}

/// Snapshot of Wilson coefficients in a given sector at a given scale.
///
/// Supplied by an external matching/running layer and treated as opaque
/// effective couplings here: `C7` and `C9` already contain whatever
/// corrections that layer folds in. Labels not listed in [`Operator`] belong to
/// the wider operator basis and are ignored by the amplitude code. Absent
/// coefficients are zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WilsonCoefficients {
    sector: String,
    scale: f64,
    values: BTreeMap<String, Complex64>,
}

impl WilsonCoefficients {
    /// Creates an empty snapshot (all coefficients zero).
    pub fn new(sector: impl Into<String>, scale: f64) -> Self {
        Self {
            sector: sector.into(),
            scale,
            values: BTreeMap::new(),
        }
    }

    /// Builder-style insertion of a coefficient by label.
    pub fn with(mut self, label: impl Into<String>, value: Complex64) -> Self {
        self.values.insert(label.into(), value);
        self
    }

    /// Builder-style insertion of a coefficient by operator.
    pub fn with_operator(self, op: Operator, value: Complex64) -> Self {
        self.with(op.label(), value)
    }

    /// Inserts or replaces a coefficient.
    pub fn set(&mut self, label: impl Into<String>, value: Complex64) {
        self.values.insert(label.into(), value);
    }

    /// Coefficient for a label, zero if absent.
    pub fn get(&self, label: &str) -> Complex64 {
        self.values.get(label).copied().unwrap_or_else(Complex64::zero)
    }

    /// Coefficient for an operator, zero if absent.
    pub fn coefficient(&self, op: Operator) -> Complex64 {
        self.get(op.label())
    }

    /// Sector label, e.g. `bsmumu`.
    pub fn sector(&self) -> &str {
        &self.sector
    }

    /// Renormalisation scale in GeV.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Iterates over all stored labels and values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Complex64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Returns `true` if any (pseudo)scalar coefficient is non-zero.
    pub fn has_scalar_operators(&self) -> bool {
        Operator::ALL
            .iter()
            .filter(|op| op.is_scalar())
            .any(|op| !self.coefficient(*op).is_zero())
    }
}

/// Typed view of the coefficients entering the amplitudes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EffectiveCouplings {
    pub c7: Complex64,
    pub c7p: Complex64,
    pub c9: Complex64,
    pub c9p: Complex64,
    pub c10: Complex64,
    pub c10p: Complex64,
    pub cs: Complex64,
    pub csp: Complex64,
    pub cp: Complex64,
    pub cpp: Complex64,
}

impl EffectiveCouplings {
    /// Extracts the typed record, rejecting non-finite coefficients.
    pub fn from_snapshot(wc: &WilsonCoefficients) -> Result<Self, BvllError> {
        for (label, value) in wc.iter() {
            if !(value.re.is_finite() && value.im.is_finite()) {
                return Err(BvllError::configuration(format!(
                    "Wilson coefficient `{}` is not finite ({})",
                    label, value
                )));
            }
            if label.parse::<Operator>().is_err() {
                tracing::trace!(label, sector = wc.sector(), "ignoring coefficient outside B -> V ll basis");
            }
        }
        Ok(Self {
            c7: wc.coefficient(Operator::C7),
            c7p: wc.coefficient(Operator::C7p),
            c9: wc.coefficient(Operator::C9),
            c9p: wc.coefficient(Operator::C9p),
            c10: wc.coefficient(Operator::C10),
            c10p: wc.coefficient(Operator::C10p),
            cs: wc.coefficient(Operator::CS),
            csp: wc.coefficient(Operator::CSp),
            cp: wc.coefficient(Operator::CP),
            cpp: wc.coefficient(Operator::CPp),
        })
    }

    /// Quark-chirality even and odd combinations `(C + C', C - C')` of a pair.
    pub(crate) fn split(unprimed: Complex64, primed: Complex64) -> (Complex64, Complex64) {
        (unprimed + primed, unprimed - primed)
    }
}
