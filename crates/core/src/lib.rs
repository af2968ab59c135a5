//! Core types for svcat provisioning
//!
//! This crate holds the data model shared by the executor and the CLI:
//! - `params`: `NAME=VALUE` and JSON parameter parsing, `ParameterPayload`
//! - `secrets`: `SECRET[KEY]` reference parsing, `SecretRefs`
//! - `request`: the validated `ProvisionRequest`
//! - `instance`: the `ServiceInstance` a provisioner returns
//! - `error`: `ParseError`
//!
//! Nothing here performs I/O.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod instance;
pub mod params;
pub mod request;
pub mod secrets;

pub use error::ParseError;
pub use instance::{
    ConditionStatus, ConditionType, InstanceCondition, InstanceSpec, InstanceStatus, ObjectMeta,
    ParametersFromSource, SecretKeyReference, ServiceInstance,
};
pub use params::{parse_variable_assignments, parse_variable_json, FlatParameters, ParameterPayload};
pub use request::{MissingField, ProvisionRequest, DEFAULT_NAMESPACE};
pub use secrets::{parse_key_maps, SecretRef, SecretRefs};
