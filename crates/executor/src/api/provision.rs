//! Provision operations.

use super::Svcat;
use crate::handlers;
use crate::validate::{validate, ProvisionInput};
use crate::Result;
use svcat_core::{ProvisionRequest, ServiceInstance};

impl Svcat {
    /// Validate raw input and provision the instance it describes.
    ///
    /// Validation failures return before the provisioner is called.
    pub fn provision(&self, input: &ProvisionInput) -> Result<ServiceInstance> {
        let request = validate(input)?;
        self.provision_request(&request)
    }

    /// Provision an already validated request.
    pub fn provision_request(&self, request: &ProvisionRequest) -> Result<ServiceInstance> {
        handlers::provision::provision(self.provisioner(), request)
    }
}
