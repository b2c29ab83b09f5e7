// src/core/params.rs

use super::error::BvllError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Key of a numerical input in a [`ParameterSet`].
///
/// Plain keys name global inputs (`alpha_e`, `Gmu`, `Vcb`, ...). Qualified keys
/// attach a category to a name, e.g. `("mass", "B0")`, `("lifetime", "Bs")` or
/// `("B->K* BSZ", "a1_V")`. The textual form of a qualified key is `category:name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParamKey {
    /// A key without category.
    Plain(String),
    /// A `(category, name)` pair.
    Qualified {
        /// Category, e.g. `mass`.
        category: String,
        /// Name inside the category, e.g. `B0`.
        name: String,
    },
}

impl ParamKey {
    /// Creates a key without category.
    pub fn plain(name: impl Into<String>) -> Self {
        ParamKey::Plain(name.into())
    }

    /// Creates a `(category, name)` key.
    pub fn qualified(category: impl Into<String>, name: impl Into<String>) -> Self {
        ParamKey::Qualified {
            category: category.into(),
            name: name.into(),
        }
    }

    /// Shorthand for `("mass", particle)`.
    pub fn mass(particle: &str) -> Self {
        Self::qualified("mass", particle)
    }

    /// Shorthand for `("lifetime", particle)`.
    pub fn lifetime(particle: &str) -> Self {
        Self::qualified("lifetime", particle)
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamKey::Plain(name) => write!(f, "{}", name),
            ParamKey::Qualified { category, name } => write!(f, "{}:{}", category, name),
        }
    }
}

impl FromStr for ParamKey {
    type Err = BvllError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((category, name)) if !category.is_empty() && !name.is_empty() => {
                Ok(Self::qualified(category, name))
            }
            Some(_) => Err(BvllError::configuration(format!("malformed parameter key `{}`", s))),
            None if s.is_empty() => Err(BvllError::configuration("empty parameter key")),
            None => Ok(Self::plain(s)),
        }
    }
}

/// Read-only numerical inputs: masses, lifetimes, couplings, CKM inputs and
/// form-factor shape parameters.
///
/// Serialises as a flat JSON object keyed by the textual form of [`ParamKey`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct ParameterSet {
    values: BTreeMap<ParamKey, f64>,
}

impl ParameterSet {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion.
    pub fn with(mut self, key: ParamKey, value: f64) -> Self {
        self.values.insert(key, value);
        self
    }

    /// Inserts or replaces a value, returning the previous one.
    pub fn insert(&mut self, key: ParamKey, value: f64) -> Option<f64> {
        self.values.insert(key, value)
    }

    /// Looks up a value, failing with [`BvllError::MissingParameter`] if absent.
    pub fn get(&self, key: &ParamKey) -> Result<f64, BvllError> {
        self.values
            .get(key)
            .copied()
            .ok_or_else(|| BvllError::MissingParameter { key: key.to_string() })
    }

    /// Looks up a plain key.
    pub fn value(&self, name: &str) -> Result<f64, BvllError> {
        self.get(&ParamKey::plain(name))
    }

    /// Looks up `("mass", particle)`.
    pub fn mass(&self, particle: &str) -> Result<f64, BvllError> {
        self.get(&ParamKey::mass(particle))
    }

    /// Looks up `("lifetime", particle)` (natural units, GeV⁻¹).
    pub fn lifetime(&self, particle: &str) -> Result<f64, BvllError> {
        self.get(&ParamKey::lifetime(particle))
    }

    /// Returns `true` if the key is present.
    pub fn contains(&self, key: &ParamKey) -> bool {
        self.values.contains_key(key)
    }

    /// Iterates over all entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&ParamKey, f64)> {
        self.values.iter().map(|(k, v)| (k, *v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the set holds no parameters.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parses a parameter set from a flat JSON object.
    pub fn from_json_str(json: &str) -> Result<Self, BvllError> {
        serde_json::from_str(json)
            .map_err(|err| BvllError::configuration(format!("invalid parameter set: {}", err)))
    }
}

impl TryFrom<BTreeMap<String, f64>> for ParameterSet {
    type Error = BvllError;

    fn try_from(raw: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        let mut set = ParameterSet::new();
        for (key, value) in raw {
            if !value.is_finite() {
                return Err(BvllError::configuration(format!(
                    "parameter `{}` is not finite ({})",
                    key, value
                )));
            }
            set.insert(key.parse()?, value);
        }
        Ok(set)
    }
}

impl From<ParameterSet> for BTreeMap<String, f64> {
    fn from(set: ParameterSet) -> Self {
        set.values
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }
}

impl FromIterator<(ParamKey, f64)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (ParamKey, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
