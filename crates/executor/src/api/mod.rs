//! The `Svcat` facade.
//!
//! Bundles a provisioner with the validate-then-dispatch flow of the
//! provision command.
//!
//! # Example
//!
//! ```text
//! use std::sync::Arc;
//! use svcat_executor::{InMemoryProvisioner, ProvisionInput, Svcat};
//!
//! let svcat = Svcat::new(Arc::new(InMemoryProvisioner::new()));
//! let instance = svcat.provision(
//!     &ProvisionInput::new("wordpress-mysql-instance", "mysqldb", "free")
//!         .param("location=eastus"),
//! )?;
//! ```

mod provision;

use std::sync::Arc;

use crate::provisioner::Provisioner;

/// Entry point for provisioning operations
#[derive(Clone)]
pub struct Svcat {
    provisioner: Arc<dyn Provisioner>,
}

impl Svcat {
    /// Create a facade over a provisioner
    pub fn new(provisioner: Arc<dyn Provisioner>) -> Self {
        Self { provisioner }
    }

    /// The underlying provisioner
    pub fn provisioner(&self) -> &dyn Provisioner {
        self.provisioner.as_ref()
    }
}
