use async_trait::async_trait;
use exposure_responder::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock IncidentBackend with Incident Manager's client token semantics:
/// a token seen before returns the record it created the first time.
#[derive(Default, Clone)]
pub struct MockIncidentBackend {
    pub submissions: Arc<Mutex<Vec<IncidentRequest>>>,
    pub records: Arc<Mutex<HashMap<String, String>>>,
}

impl MockIncidentBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submission_count(&self) -> usize {
        self.submissions.lock().unwrap().len()
    }

    pub fn incident_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn submissions(&self) -> Vec<IncidentRequest> {
        self.submissions.lock().unwrap().clone()
    }
}

#[async_trait]
impl IncidentBackend for MockIncidentBackend {
    async fn start_incident(&self, request: &IncidentRequest) -> Result<String> {
        self.submissions.lock().unwrap().push(request.clone());

        let mut records = self.records.lock().unwrap();
        let next = records.len() + 1;
        Ok(records
            .entry(request.client_token().to_string())
            .or_insert_with(|| {
                format!(
                    "arn:aws:ssm-incidents::123456789012:incident-record/S3Bucket_Security_IncidentResponse/{}",
                    next
                )
            })
            .clone())
    }
}
