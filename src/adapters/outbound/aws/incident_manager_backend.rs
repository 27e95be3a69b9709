use crate::exposure_response::domain::IncidentRequest;
use crate::ports::outbound::IncidentBackend;
use crate::shared::{ResponderError, Result};
use async_trait::async_trait;
use aws_sdk_ssmincidents::error::DisplayErrorContext;
use aws_sdk_ssmincidents::operation::start_incident::builders::StartIncidentFluentBuilder;
use aws_sdk_ssmincidents::types::{ItemIdentifier, ItemType, ItemValue, RelatedItem};
use tracing::debug;

/// IncidentManagerBackend adapter opening incidents in SSM Incident Manager
///
/// The dedup key is sent as `clientToken`. Incident Manager answers a
/// repeated token with the incident it already created, which is what keeps
/// redelivered or repeated findings down to one incident per window.
pub struct IncidentManagerBackend {
    client: aws_sdk_ssmincidents::Client,
    response_plan_arn: String,
}

impl IncidentManagerBackend {
    pub fn new(client: aws_sdk_ssmincidents::Client, response_plan_arn: impl Into<String>) -> Self {
        Self {
            client,
            response_plan_arn: response_plan_arn.into(),
        }
    }

    pub fn response_plan_arn(&self) -> &str {
        &self.response_plan_arn
    }

    /// Prepares the `StartIncident` call without sending it
    fn start_incident_call(&self, request: &IncidentRequest) -> Result<StartIncidentFluentBuilder> {
        let items = related_items(request)?;

        Ok(self
            .client
            .start_incident()
            .response_plan_arn(&self.response_plan_arn)
            .title(request.title())
            .impact(request.impact())
            .client_token(request.client_token().as_str())
            .set_related_items(Some(items)))
    }
}

/// Converts the domain related items into the SDK shape
fn related_items(request: &IncidentRequest) -> Result<Vec<RelatedItem>> {
    request
        .related_items()
        .iter()
        .map(|item| {
            let identifier = ItemIdentifier::builder()
                .r#type(ItemType::from(item.item_type.as_str()))
                .value(ItemValue::Arn(item.arn.clone()))
                .build()?;

            Ok(RelatedItem::builder()
                .identifier(identifier)
                .title(&item.title)
                .build())
        })
        .collect()
}

#[async_trait]
impl IncidentBackend for IncidentManagerBackend {
    async fn start_incident(&self, request: &IncidentRequest) -> Result<String> {
        let submission_failed = |details: String| ResponderError::IncidentSubmissionFailed {
            resource: request.resource_name().to_string(),
            details,
        };

        let call = self
            .start_incident_call(request)
            .map_err(|e| submission_failed(e.to_string()))?;

        let output = call
            .send()
            .await
            .map_err(|e| submission_failed(DisplayErrorContext(&e).to_string()))?;

        debug!(response = ?output, "Incident Manager response");

        Ok(output.incident_record_arn().to_string())
    }
}
