//! Public types for the svcat provisioning API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Request model
// ============================================================================

pub use svcat_core::{FlatParameters, ParameterPayload, ProvisionRequest, DEFAULT_NAMESPACE};
pub use svcat_core::{SecretRef, SecretRefs};

// ============================================================================
// Instance representation
// ============================================================================

pub use svcat_core::{
    ConditionStatus, ConditionType, InstanceCondition, InstanceSpec, InstanceStatus, ObjectMeta,
    ParametersFromSource, SecretKeyReference, ServiceInstance,
};

// ============================================================================
// Errors
// ============================================================================

pub use svcat_core::{MissingField, ParseError};
pub use svcat_executor::{Error, ProvisionError, Result};
