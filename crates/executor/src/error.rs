//! Executor error type.

use svcat_core::ParseError;
use thiserror::Error;

use crate::provisioner::ProvisionError;

/// Errors surfaced to the user by the provision command
#[derive(Debug, Error)]
pub enum Error {
    /// The command was invoked incorrectly
    #[error("{reason}")]
    Usage {
        /// What was wrong with the invocation
        reason: String,
    },

    /// A flag value failed to parse
    #[error("invalid {flag} value ({source})")]
    InvalidParam {
        /// The flag the bad value came from
        flag: &'static str,
        /// The underlying parse failure
        source: ParseError,
    },

    /// The provisioner rejected the request
    #[error(transparent)]
    Provision(ProvisionError),
}

impl Error {
    /// Check if this is a usage error
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::Usage { .. })
    }

    /// The parse failure behind an [`Error::InvalidParam`]
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            Error::InvalidParam { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
