use crate::exposure_response::domain::IncidentRequest;
use crate::shared::Result;
use async_trait::async_trait;

/// IncidentBackend port for opening incident records
///
/// This port abstracts the incident-management service (e.g., SSM Incident
/// Manager). The request's client token is an idempotency token: the backend
/// returns the existing record when it has already seen the token, so no
/// deduplication happens on this side of the port.
#[async_trait]
pub trait IncidentBackend: Send + Sync {
    /// Opens an incident, or returns the one already opened for the same token
    ///
    /// # Returns
    /// The incident record identifier (ARN)
    ///
    /// # Errors
    /// Returns `IncidentSubmissionFailed` if the backend rejects the request
    async fn start_incident(&self, request: &IncidentRequest) -> Result<String>;
}
