//! Service instance representation
//!
//! The object a provisioner returns after accepting a request. Field names
//! follow the service catalog API so the JSON/YAML output matches what a
//! cluster would report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::request::ProvisionRequest;

/// Condition reason set on a freshly accepted instance
pub const REASON_PROVISIONING: &str = "Provisioning";

/// A provisioned (or provisioning) service instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceInstance {
    /// Identity and bookkeeping
    pub metadata: ObjectMeta,
    /// Desired state, as requested
    pub spec: InstanceSpec,
    /// Observed state
    #[serde(default)]
    pub status: InstanceStatus,
}

/// Instance identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    /// Instance name
    pub name: String,
    /// Namespace
    pub namespace: String,
    /// Unique id assigned at creation
    pub uid: Uuid,
    /// Creation time
    pub creation_timestamp: DateTime<Utc>,
}

/// Requested class, plan and parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceSpec {
    /// Class external name
    pub cluster_service_class_external_name: String,
    /// Plan external name
    pub cluster_service_plan_external_name: String,
    /// Id the broker knows the instance by
    #[serde(rename = "externalID")]
    pub external_id: String,
    /// Literal parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<serde_json::Value>,
    /// Secret-backed parameters
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters_from: Vec<ParametersFromSource>,
}

/// One source of secret-backed parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParametersFromSource {
    /// Secret key holding the parameters
    pub secret_key_ref: SecretKeyReference,
}

/// Reference to a key in a secret
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretKeyReference {
    /// Secret name
    pub name: String,
    /// Key within the secret
    pub key: String,
}

/// Observed instance state
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InstanceStatus {
    /// Conditions, oldest first
    #[serde(default)]
    pub conditions: Vec<InstanceCondition>,
}

/// Condition types reported on an instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionType {
    /// Instance is ready for use
    Ready,
}

/// Tri-state condition status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionStatus {
    /// Condition holds
    True,
    /// Condition does not hold
    False,
}

/// A single status condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceCondition {
    /// Condition type
    #[serde(rename = "type")]
    pub kind: ConditionType,
    /// Condition status
    pub status: ConditionStatus,
    /// Machine-readable reason
    pub reason: String,
    /// Human-readable message
    pub message: String,
    /// When the condition last changed
    pub last_transition_time: DateTime<Utc>,
}

impl ServiceInstance {
    /// Build the instance object for a request
    ///
    /// Assigns a fresh uid and external id and records a `Ready=False`
    /// condition with reason [`REASON_PROVISIONING`].
    pub fn from_request(request: &ProvisionRequest) -> Self {
        let now = Utc::now();
        let parameters_from = request
            .secrets()
            .iter()
            .map(|(name, key)| ParametersFromSource {
                secret_key_ref: SecretKeyReference {
                    name: name.to_string(),
                    key: key.to_string(),
                },
            })
            .collect();

        ServiceInstance {
            metadata: ObjectMeta {
                name: request.instance_name().to_string(),
                namespace: request.namespace().to_string(),
                uid: Uuid::new_v4(),
                creation_timestamp: now,
            },
            spec: InstanceSpec {
                cluster_service_class_external_name: request.class_name().to_string(),
                cluster_service_plan_external_name: request.plan_name().to_string(),
                external_id: Uuid::new_v4().to_string(),
                parameters: request.parameters().to_json(),
                parameters_from,
            },
            status: InstanceStatus {
                conditions: vec![InstanceCondition {
                    kind: ConditionType::Ready,
                    status: ConditionStatus::False,
                    reason: REASON_PROVISIONING.to_string(),
                    message: "The instance is being provisioned asynchronously".to_string(),
                    last_transition_time: now,
                }],
            },
        }
    }

    /// Instance name
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Instance namespace
    pub fn namespace(&self) -> &str {
        &self.metadata.namespace
    }

    /// Whether the latest `Ready` condition is `True`
    pub fn is_ready(&self) -> bool {
        self.status
            .conditions
            .iter()
            .rev()
            .find(|c| c.kind == ConditionType::Ready)
            .is_some_and(|c| c.status == ConditionStatus::True)
    }

    /// `"Ready"` once ready, else the reason of the latest condition, or
    /// `"Pending"` when none is set
    pub fn status_summary(&self) -> &str {
        if self.is_ready() {
            return "Ready";
        }
        self.status
            .conditions
            .last()
            .map(|c| c.reason.as_str())
            .unwrap_or("Pending")
    }
}
