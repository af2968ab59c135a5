//! Provision request dispatcher.
//!
//! Forwards a validated request to the provisioner exactly once. No retry,
//! no deduplication: whatever the provisioner returns is what the caller gets.

use svcat_core::{ProvisionRequest, ServiceInstance};
use tracing::{debug, info, warn};

use crate::convert::convert_result;
use crate::provisioner::Provisioner;
use crate::Result;

/// Handle a provision request.
pub fn provision(p: &dyn Provisioner, request: &ProvisionRequest) -> Result<ServiceInstance> {
    debug!(
        namespace = request.namespace(),
        instance = request.instance_name(),
        class = request.class_name(),
        plan = request.plan_name(),
        secrets = request.secrets().len(),
        "provisioning instance"
    );

    match convert_result(p.provision(request)) {
        Ok(instance) => {
            info!(
                namespace = instance.namespace(),
                instance = instance.name(),
                status = instance.status_summary(),
                "instance provisioned"
            );
            Ok(instance)
        }
        Err(e) => {
            warn!(
                namespace = request.namespace(),
                instance = request.instance_name(),
                error = %e,
                "provision failed"
            );
            Err(e)
        }
    }
}
