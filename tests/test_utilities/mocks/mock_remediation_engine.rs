use async_trait::async_trait;
use exposure_responder::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock RemediationEngine that records every resource it was asked to remediate
#[derive(Default, Clone)]
pub struct MockRemediationEngine {
    pub started: Arc<Mutex<Vec<String>>>,
    pub should_fail: bool,
}

impl MockRemediationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn started(&self) -> Vec<String> {
        self.started.lock().unwrap().clone()
    }
}

#[async_trait]
impl RemediationEngine for MockRemediationEngine {
    async fn start_remediation(&self, request: &RemediationRequest) -> Result<String> {
        let resource = request.resource_name().to_string();
        if self.should_fail {
            return Err(ResponderError::RemediationSubmissionFailed {
                resource,
                details: "Mock automation failure".to_string(),
            }
            .into());
        }

        let mut started = self.started.lock().unwrap();
        started.push(resource);
        Ok(format!("00000000-0000-0000-0000-{:012}", started.len()))
    }
}
