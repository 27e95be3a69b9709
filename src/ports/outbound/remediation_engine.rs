use crate::exposure_response::domain::RemediationRequest;
use crate::shared::Result;
use async_trait::async_trait;

/// RemediationEngine port for starting the remediation workflow
///
/// This port abstracts the automation engine (e.g., SSM Automation) that
/// locks down an exposed resource. Submission is fire-and-forget: the
/// workflow runs asynchronously and completion is never awaited.
///
/// Implementations must be `Send + Sync` so a single instance can be shared
/// across invocations.
#[async_trait]
pub trait RemediationEngine: Send + Sync {
    /// Starts a remediation execution for one resource
    ///
    /// # Returns
    /// The execution identifier assigned by the automation engine
    ///
    /// # Errors
    /// Returns `RemediationSubmissionFailed` if the engine rejects the
    /// request (unknown document, throttling, missing permission, ...)
    async fn start_remediation(&self, request: &RemediationRequest) -> Result<String>;
}
