//! Parameter types and parsers
//!
//! This module defines the parameter payload sent with a provisioning request:
//! - FlatParameters: ordered `NAME=VALUE` pairs from repeated `--param` flags
//! - ParameterPayload: tagged union of flat pairs or a structured JSON value
//!
//! and the two parsers that build them from raw strings.

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Ordered collection of `NAME=VALUE` pairs
///
/// Names are unique. Insertion order is the order the parameters were given
/// on the command line.
///
/// # Examples
///
/// ```
/// use svcat_core::params::parse_variable_assignments;
///
/// let params = parse_variable_assignments(&["location=eastus", "tier=free"]).unwrap();
/// assert_eq!(params.get("location"), Some("eastus"));
/// assert_eq!(params.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlatParameters {
    pairs: Vec<(String, String)>,
}

impl FlatParameters {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pair, rejecting a name that is already present
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), ParseError> {
        let name = name.into();
        if self.contains(&name) {
            return Err(ParseError::DuplicateName { name });
        }
        self.pairs.push((name, value.into()));
        Ok(())
    }

    /// Look up a value by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Check if a name is present
    pub fn contains(&self, name: &str) -> bool {
        self.pairs.iter().any(|(n, _)| n == name)
    }

    /// Number of pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check if there are no pairs
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(n, _)| n.as_str())
    }

    /// Convert to a JSON object of string values
    pub fn to_json(&self) -> serde_json::Value {
        let map = self
            .pairs
            .iter()
            .map(|(n, v)| (n.clone(), serde_json::Value::String(v.clone())))
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(map)
    }
}

/// Resolved parameter payload
///
/// Exactly one of the two shapes. `--param` and `--params-json` are mutually
/// exclusive, so the enum makes "both populated" unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ParameterPayload {
    /// `NAME=VALUE` pairs from `--param`
    Flat(FlatParameters),
    /// Arbitrary JSON value from `--params-json`
    Structured(serde_json::Value),
}

impl ParameterPayload {
    /// Check if there is nothing to send
    ///
    /// Only an empty flat mapping is empty; a structured `null` or `{}` was
    /// supplied explicitly and is sent as given.
    pub fn is_empty(&self) -> bool {
        matches!(self, ParameterPayload::Flat(p) if p.is_empty())
    }

    /// Wire form of the payload, `None` when there is nothing to send
    pub fn to_json(&self) -> Option<serde_json::Value> {
        match self {
            ParameterPayload::Flat(p) if p.is_empty() => None,
            ParameterPayload::Flat(p) => Some(p.to_json()),
            ParameterPayload::Structured(v) => Some(v.clone()),
        }
    }

    /// Flat pairs, if this payload came from `--param`
    pub fn as_flat(&self) -> Option<&FlatParameters> {
        match self {
            ParameterPayload::Flat(p) => Some(p),
            ParameterPayload::Structured(_) => None,
        }
    }

    /// Structured value, if this payload came from `--params-json`
    pub fn as_structured(&self) -> Option<&serde_json::Value> {
        match self {
            ParameterPayload::Flat(_) => None,
            ParameterPayload::Structured(v) => Some(v),
        }
    }
}

impl Default for ParameterPayload {
    fn default() -> Self {
        ParameterPayload::Flat(FlatParameters::new())
    }
}

/// Parse `NAME=VALUE` entries into an ordered parameter set
///
/// Each entry is split on the first `=`, so values may themselves contain
/// `=`. Name and value are trimmed of surrounding whitespace. Fails on the
/// first entry that has no `=`, has an empty name, or repeats a name.
pub fn parse_variable_assignments<S: AsRef<str>>(
    params: &[S],
) -> Result<FlatParameters, ParseError> {
    let mut variables = FlatParameters::new();

    for raw in params {
        let raw = raw.as_ref();
        let (name, value) = raw
            .split_once('=')
            .ok_or_else(|| ParseError::MissingSeparator {
                entry: raw.to_string(),
            })?;

        let name = name.trim();
        if name.is_empty() {
            return Err(ParseError::EmptyName {
                entry: raw.to_string(),
            });
        }
        variables.insert(name, value.trim())?;
    }

    Ok(variables)
}

/// Parse JSON text into a structured value
///
/// Any JSON value is accepted: object, array or scalar.
pub fn parse_variable_json(params: &str) -> Result<serde_json::Value, ParseError> {
    Ok(serde_json::from_str(params)?)
}
