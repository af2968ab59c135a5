//! Error conversion from collaborator and core error types.
//!
//! This module maps errors raised outside the executor onto the executor's
//! [`Error`] type.

use crate::provisioner::ProvisionError;
use crate::Error;
use svcat_core::MissingField;

/// Provisioner errors pass through unchanged.
impl From<ProvisionError> for Error {
    fn from(err: ProvisionError) -> Self {
        Error::Provision(err)
    }
}

/// A missing identifying field is a usage error.
impl From<MissingField> for Error {
    fn from(err: MissingField) -> Self {
        Error::Usage {
            reason: err.to_string(),
        }
    }
}

/// Convert a provisioner result to an executor Result.
pub fn convert_result<T>(result: std::result::Result<T, ProvisionError>) -> crate::Result<T> {
    result.map_err(Error::from)
}
