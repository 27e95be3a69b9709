use crate::application::dto::HandlingReport;
use crate::exposure_response::domain::ExposureEvent;
use crate::shared::Result;
use async_trait::async_trait;

/// ExposureHandlingPort - Inbound port for handling one exposure event
///
/// This port is what the Lambda entry point drives. It represents the
/// application's public API.
#[async_trait]
pub trait ExposureHandlingPort: Send + Sync {
    /// Handles every qualifying resource in the event
    ///
    /// # Returns
    /// A report of processed and skipped resources. An event with no
    /// qualifying resources yields an empty report, not an error.
    ///
    /// # Errors
    /// Returns the first hard failure (malformed finding or timestamp,
    /// remediation or incident submission). Submissions already made for
    /// earlier resources are not rolled back.
    async fn handle(&self, event: &ExposureEvent) -> Result<HandlingReport>;
}
