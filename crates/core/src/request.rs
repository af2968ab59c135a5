//! The fully resolved provisioning request.

use serde::Serialize;

use crate::params::ParameterPayload;
use crate::secrets::SecretRefs;

/// Namespace used when none is given
pub const DEFAULT_NAMESPACE: &str = "default";

/// Error returned when a required identifying field is empty
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
#[error("{field} is required")]
pub struct MissingField {
    /// Human-readable name of the missing field
    pub field: &'static str,
}

/// A validated request to provision one instance
///
/// Built once per command invocation and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProvisionRequest {
    namespace: String,
    instance_name: String,
    class_name: String,
    plan_name: String,
    parameters: ParameterPayload,
    secrets: SecretRefs,
}

impl ProvisionRequest {
    /// Build a request
    ///
    /// An empty namespace falls back to [`DEFAULT_NAMESPACE`]. Empty instance,
    /// class or plan names are rejected.
    pub fn new(
        namespace: impl Into<String>,
        instance_name: impl Into<String>,
        class_name: impl Into<String>,
        plan_name: impl Into<String>,
        parameters: ParameterPayload,
        secrets: SecretRefs,
    ) -> Result<Self, MissingField> {
        let mut namespace = namespace.into();
        if namespace.trim().is_empty() {
            namespace = DEFAULT_NAMESPACE.to_string();
        }
        let instance_name = required(instance_name.into(), "an instance name")?;
        let class_name = required(class_name.into(), "a class name")?;
        let plan_name = required(plan_name.into(), "a plan name")?;

        Ok(Self {
            namespace,
            instance_name,
            class_name,
            plan_name,
            parameters,
            secrets,
        })
    }

    /// Namespace the instance is created in
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Name of the instance
    pub fn instance_name(&self) -> &str {
        &self.instance_name
    }

    /// Service class name
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Service plan name
    pub fn plan_name(&self) -> &str {
        &self.plan_name
    }

    /// Resolved parameter payload
    pub fn parameters(&self) -> &ParameterPayload {
        &self.parameters
    }

    /// Secret references
    pub fn secrets(&self) -> &SecretRefs {
        &self.secrets
    }
}

fn required(value: String, field: &'static str) -> Result<String, MissingField> {
    if value.trim().is_empty() {
        Err(MissingField { field })
    } else {
        Ok(value)
    }
}
