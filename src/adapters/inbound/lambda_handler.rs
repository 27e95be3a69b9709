use crate::application::dto::HandlingReport;
use crate::exposure_response::domain::ExposureEvent;
use crate::ports::inbound::ExposureHandlingPort;
use crate::shared::{ResponderError, Result};
use serde_json::Value;
use tracing::{error, info};

/// LambdaHandler adapter turning a raw invocation payload into a use case call
///
/// Holds the handling port for the lifetime of the execution environment so
/// AWS clients are built once and reused across invocations.
pub struct LambdaHandler<P> {
    port: P,
}

impl<P> LambdaHandler<P>
where
    P: ExposureHandlingPort,
{
    pub fn new(port: P) -> Self {
        Self { port }
    }

    /// Handles one invocation payload
    ///
    /// # Errors
    /// Returns `MalformedFinding` if the payload is not shaped like a
    /// findings event, or whatever hard failure the use case reports. An
    /// error fails the invocation so the event source can redeliver it.
    pub async fn invoke(&self, payload: Value) -> Result<HandlingReport> {
        info!(event = %payload, "Received event");

        let event: ExposureEvent = serde_json::from_value(payload).map_err(|e| {
            error!(error = %e, "Event payload does not match the findings layout");
            ResponderError::malformed_finding(format!("event payload could not be read: {}", e))
        })?;

        self.port.handle(&event).await
    }
}
