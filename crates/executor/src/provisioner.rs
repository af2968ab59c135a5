//! Provisioning collaborator
//!
//! [`Provisioner`] is the one seam between the command and whatever actually
//! creates instances. The executor only builds requests and forwards them.
//!
//! [`InMemoryProvisioner`] keeps created instances in process memory. The CLI
//! uses it when no cluster backend is wired in, and tests use it as a
//! substitute collaborator.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use parking_lot::RwLock;
use svcat_core::{ProvisionRequest, ServiceInstance};
use thiserror::Error;

/// Errors a provisioner can report
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProvisionError {
    /// An instance with this namespace and name already exists
    #[error("instance {namespace}/{name} already exists")]
    AlreadyExists {
        /// Namespace of the existing instance
        namespace: String,
        /// Name of the existing instance
        name: String,
    },

    /// No class with this name is offered
    #[error("class '{class}' not found")]
    ClassNotFound {
        /// Requested class
        class: String,
    },

    /// The class does not offer this plan
    #[error("plan '{plan}' not found for class '{class}'")]
    PlanNotFound {
        /// Requested class
        class: String,
        /// Requested plan
        plan: String,
    },

    /// The broker failed the request
    #[error("broker error: {reason}")]
    Broker {
        /// Failure reported by the broker
        reason: String,
    },
}

/// Creates service instances
///
/// Implementations own all cluster-level failure semantics: conflicts,
/// missing classes, broker errors and timeouts.
pub trait Provisioner: Send + Sync {
    /// Provision one instance for a validated request
    fn provision(&self, request: &ProvisionRequest) -> Result<ServiceInstance, ProvisionError>;
}

/// Class and plan names a provisioner accepts
///
/// An empty catalog accepts any class and plan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    classes: BTreeMap<String, BTreeSet<String>>,
}

impl Catalog {
    /// Create an empty (accept-all) catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class with its plans (builder pattern)
    pub fn with_class<I, S>(mut self, class: impl Into<String>, plans: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_class(class, plans);
        self
    }

    /// Add a class with its plans, merging with any plans already listed
    pub fn add_class<I, S>(&mut self, class: impl Into<String>, plans: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes
            .entry(class.into())
            .or_default()
            .extend(plans.into_iter().map(Into::into));
    }

    /// Check if no classes are listed
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Check that a class/plan pair is offered
    pub fn check(&self, class: &str, plan: &str) -> Result<(), ProvisionError> {
        if self.classes.is_empty() {
            return Ok(());
        }
        let plans = self
            .classes
            .get(class)
            .ok_or_else(|| ProvisionError::ClassNotFound {
                class: class.to_string(),
            })?;
        if !plans.contains(plan) {
            return Err(ProvisionError::PlanNotFound {
                class: class.to_string(),
                plan: plan.to_string(),
            });
        }
        Ok(())
    }
}

/// Provisioner that records instances in process memory
#[derive(Debug, Default)]
pub struct InMemoryProvisioner {
    catalog: Catalog,
    instances: RwLock<HashMap<(String, String), ServiceInstance>>,
}

impl InMemoryProvisioner {
    /// Create a provisioner that accepts any class and plan
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provisioner restricted to a catalog
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            instances: RwLock::new(HashMap::new()),
        }
    }

    /// Look up a created instance
    pub fn get(&self, namespace: &str, name: &str) -> Option<ServiceInstance> {
        self.instances
            .read()
            .get(&(namespace.to_string(), name.to_string()))
            .cloned()
    }

    /// Number of created instances
    pub fn len(&self) -> usize {
        self.instances.read().len()
    }

    /// Check if no instances were created
    pub fn is_empty(&self) -> bool {
        self.instances.read().is_empty()
    }
}

impl Provisioner for InMemoryProvisioner {
    fn provision(&self, request: &ProvisionRequest) -> Result<ServiceInstance, ProvisionError> {
        self.catalog
            .check(request.class_name(), request.plan_name())?;

        let id = (
            request.namespace().to_string(),
            request.instance_name().to_string(),
        );
        let mut instances = self.instances.write();
        if instances.contains_key(&id) {
            return Err(ProvisionError::AlreadyExists {
                namespace: id.0,
                name: id.1,
            });
        }

        let instance = ServiceInstance::from_request(request);
        instances.insert(id, instance.clone());
        Ok(instance)
    }
}
