//! Secret references
//!
//! A secret reference points at one key inside a cluster-stored secret. It is
//! written on the command line as `SECRET[KEY]` and resolved later by the
//! provisioner, never by this crate.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::ParseError;

/// A single `SECRET[KEY]` reference
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SecretRef {
    /// Name of the secret
    pub name: String,
    /// Key within the secret
    pub key: String,
}

impl SecretRef {
    /// Parse one `SECRET[KEY]` entry
    ///
    /// The secret name runs up to the first `[`, the key up to the first `]`
    /// after it, and nothing may follow the `]`. Both parts are trimmed and
    /// must be non-empty.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidSecretRef {
            entry: raw.to_string(),
        };

        let (name, rest) = raw.split_once('[').ok_or_else(invalid)?;
        let (key, trailing) = rest.split_once(']').ok_or_else(invalid)?;
        if !trailing.is_empty() {
            return Err(invalid());
        }

        let name = name.trim();
        let key = key.trim();
        if name.is_empty() || key.is_empty() {
            return Err(invalid());
        }

        Ok(SecretRef {
            name: name.to_string(),
            key: key.to_string(),
        })
    }
}

impl fmt::Display for SecretRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.name, self.key)
    }
}

/// Mapping of secret name to key name
///
/// One key per secret. Inserting a secret name that is already present
/// replaces its key (last wins). Iteration is sorted by secret name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecretRefs {
    refs: BTreeMap<String, String>,
}

impl SecretRefs {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a reference, returning the key it replaced
    pub fn insert(&mut self, secret: SecretRef) -> Option<String> {
        self.refs.insert(secret.name, secret.key)
    }

    /// Key referenced for a secret
    pub fn get(&self, name: &str) -> Option<&str> {
        self.refs.get(name).map(String::as_str)
    }

    /// Number of referenced secrets
    pub fn len(&self) -> usize {
        self.refs.len()
    }

    /// Check if no secrets are referenced
    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    /// Iterate `(secret, key)` pairs sorted by secret name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.refs.iter().map(|(n, k)| (n.as_str(), k.as_str()))
    }
}

impl FromIterator<SecretRef> for SecretRefs {
    fn from_iter<I: IntoIterator<Item = SecretRef>>(iter: I) -> Self {
        let mut refs = SecretRefs::new();
        for r in iter {
            refs.insert(r);
        }
        refs
    }
}

/// Parse `SECRET[KEY]` entries into a secret mapping
///
/// Fails on the first malformed entry. A repeated secret name keeps the key
/// from the last entry.
pub fn parse_key_maps<S: AsRef<str>>(params: &[S]) -> Result<SecretRefs, ParseError> {
    params
        .iter()
        .map(|raw| SecretRef::parse(raw.as_ref()))
        .collect()
}
