//! Parse errors for user-supplied provisioning input.

use thiserror::Error;

/// Error type for `NAME=VALUE`, `SECRET[KEY]` and JSON parameter parsing
///
/// Every variant carries the offending raw input so the message can point
/// the user at the exact entry that failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Entry has no `=` separator
    #[error("invalid parameter ({entry}), must be in NAME=VALUE format")]
    MissingSeparator {
        /// The raw entry as supplied
        entry: String,
    },
    /// Entry has an empty name before the `=`
    #[error("invalid parameter ({entry}), parameter name is required")]
    EmptyName {
        /// The raw entry as supplied
        entry: String,
    },
    /// Same parameter name supplied more than once
    #[error("duplicate parameter ({name})")]
    DuplicateName {
        /// The repeated parameter name
        name: String,
    },
    /// Entry does not match `SECRET[KEY]`
    #[error("invalid secret reference ({entry}), must be in SECRET[KEY] format")]
    InvalidSecretRef {
        /// The raw entry as supplied
        entry: String,
    },
    /// JSON text failed to parse
    #[error("{reason}")]
    InvalidJson {
        /// Syntax error reported by the JSON parser, including position
        reason: String,
    },
}

impl ParseError {
    /// The raw input this error refers to, if it refers to a single entry
    pub fn entry(&self) -> Option<&str> {
        match self {
            ParseError::MissingSeparator { entry }
            | ParseError::EmptyName { entry }
            | ParseError::InvalidSecretRef { entry } => Some(entry),
            ParseError::DuplicateName { name } => Some(name),
            ParseError::InvalidJson { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        ParseError::InvalidJson {
            reason: err.to_string(),
        }
    }
}
