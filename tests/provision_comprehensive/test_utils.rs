//! Shared helpers for the provision test suite.

use parking_lot::Mutex;
use svcat::{ProvisionError, ProvisionRequest, Provisioner, ServiceInstance};

/// Provisioner that records every request it receives
///
/// Succeeds by building the instance from the request, or fails with the
/// configured error.
#[derive(Default)]
pub struct RecordingProvisioner {
    pub requests: Mutex<Vec<ProvisionRequest>>,
    pub fail_with: Option<ProvisionError>,
}

impl RecordingProvisioner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(err: ProvisionError) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            fail_with: Some(err),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn last_request(&self) -> Option<ProvisionRequest> {
        self.requests.lock().last().cloned()
    }
}

impl Provisioner for RecordingProvisioner {
    fn provision(&self, request: &ProvisionRequest) -> Result<ServiceInstance, ProvisionError> {
        self.requests.lock().push(request.clone());
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(ServiceInstance::from_request(request)),
        }
    }
}
