use serde::Serialize;

/// One resource for which both downstream submissions succeeded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedResource {
    pub resource_name: String,
    pub resource_id: String,
    pub remediation_execution_id: String,
    pub incident_record_arn: String,
    pub dedup_key: String,
}

/// HandlingReport - Response DTO from the exposure handling use case
///
/// Returned to the Lambda runtime as the invocation result. Only produced
/// when the whole event was handled; a hard failure returns an error instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlingReport {
    pub processed: Vec<ProcessedResource>,
    /// Human-readable reason for every skipped entry
    pub skipped: Vec<String>,
}

impl HandlingReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_processed(&mut self, resource: ProcessedResource) {
        self.processed.push(resource);
    }

    pub fn record_skipped(&mut self, reason: impl Into<String>) {
        self.skipped.push(reason.into());
    }

    pub fn processed_count(&self) -> usize {
        self.processed.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// True when the event produced no downstream calls
    pub fn is_noop(&self) -> bool {
        self.processed.is_empty()
    }
}
