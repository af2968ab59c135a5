//! Command execution layer for svcat provisioning.
//!
//! The provision command runs two steps in sequence:
//!
//! 1. [`validate()`] turns raw command-line strings into a [`ProvisionRequest`]
//! 2. [`handlers::provision::provision`] hands the request to a
//!    [`Provisioner`] exactly once
//!
//! [`Svcat`] wires both steps to a provisioner.

#![warn(missing_docs)]

pub mod api;
pub mod convert;
mod error;
pub mod handlers;
pub mod provisioner;
pub mod validate;

pub use api::Svcat;
pub use error::{Error, Result};
pub use provisioner::{Catalog, InMemoryProvisioner, ProvisionError, Provisioner};
pub use validate::{resolve_parameters, resolve_secrets, validate, ProvisionInput};

pub use svcat_core::{ParameterPayload, ProvisionRequest, SecretRefs, ServiceInstance};
