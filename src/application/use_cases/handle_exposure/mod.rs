use crate::application::dto::{HandlingReport, ProcessedResource};
use crate::config::HandlerConfig;
use crate::exposure_response::domain::{
    ExposedResource, ExposureEvent, IncidentRequest, RemediationRequest,
};
use crate::exposure_response::services::{
    DedupKeyGenerator, FindingExtractor, ResourceOutcome, SkipReason,
};
use crate::ports::inbound::ExposureHandlingPort;
use crate::ports::outbound::{IncidentBackend, RemediationEngine};
use crate::shared::Result;
use async_trait::async_trait;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// HandleExposureUseCase - Core use case for responding to an exposure event
///
/// For every qualifying resource in the event it starts remediation, then
/// opens an incident keyed by the dedup key. Resources are handled one at a
/// time in event order. The first hard failure aborts the event; whatever was
/// already submitted for earlier resources stays submitted.
///
/// # Type Parameters
/// * `RE` - RemediationEngine implementation
/// * `IB` - IncidentBackend implementation
pub struct HandleExposureUseCase<RE, IB> {
    remediation_engine: RE,
    incident_backend: IB,
    extractor: FindingExtractor,
    key_generator: DedupKeyGenerator,
    incident_impact: i32,
}

impl<RE, IB> HandleExposureUseCase<RE, IB>
where
    RE: RemediationEngine,
    IB: IncidentBackend,
{
    /// Creates a new HandleExposureUseCase with injected dependencies
    pub fn new(
        remediation_engine: RE,
        incident_backend: IB,
        extractor: FindingExtractor,
        key_generator: DedupKeyGenerator,
        incident_impact: i32,
    ) -> Self {
        Self {
            remediation_engine,
            incident_backend,
            extractor,
            key_generator,
            incident_impact,
        }
    }

    /// Creates the use case from resolved handler configuration
    pub fn from_config(
        remediation_engine: RE,
        incident_backend: IB,
        config: &HandlerConfig,
    ) -> Result<Self> {
        Ok(Self::new(
            remediation_engine,
            incident_backend,
            FindingExtractor::new(config.resource_type.clone()),
            DedupKeyGenerator::new(config.dedup_window_minutes)?,
            config.incident_impact,
        ))
    }

    /// Executes the exposure handling use case
    ///
    /// # Arguments
    /// * `event` - Security Hub event carrying zero or more findings
    ///
    /// # Returns
    /// HandlingReport listing processed resources and skip reasons
    pub async fn execute(&self, event: &ExposureEvent) -> Result<HandlingReport> {
        let mut report = HandlingReport::new();

        for outcome in self.extractor.extract(event) {
            match outcome {
                ResourceOutcome::Extracted(resource) => {
                    let processed = self.process_resource(&resource).await.map_err(|e| {
                        error!(
                            resource = %resource.name(),
                            error = %e,
                            "Error processing event"
                        );
                        e
                    })?;
                    report.record_processed(processed);
                }
                ResourceOutcome::Skipped(reason) => {
                    match &reason {
                        SkipReason::TypeMismatch { .. } => debug!(reason = %reason, "Skipping resource"),
                        _ => warn!(reason = %reason, "Skipping finding"),
                    }
                    report.record_skipped(reason.to_string());
                }
                ResourceOutcome::Failed(e) => {
                    error!(error = %e, "Error processing event");
                    return Err(e);
                }
            }
        }

        info!(
            processed = report.processed_count(),
            skipped = report.skipped_count(),
            "Exposure event handled"
        );

        Ok(report)
    }

    async fn process_resource(&self, resource: &ExposedResource) -> Result<ProcessedResource> {
        let name = resource.name();
        info!(
            resource = %name,
            updated_at = resource.updated_at(),
            "Processing resource"
        );

        let execution_id = self
            .remediation_engine
            .start_remediation(&RemediationRequest::new(name.clone()))
            .await?;
        info!(
            resource = %name,
            execution_id = %execution_id,
            "Started remediation execution"
        );

        let dedup_key = self.key_generator.generate(name, resource.updated_at())?;
        let request = IncidentRequest::for_resource(resource, dedup_key.clone(), self.incident_impact);

        let started = Instant::now();
        let incident_record_arn = self.incident_backend.start_incident(&request).await?;
        let elapsed = format!("{:.2}s", started.elapsed().as_secs_f64());
        info!(
            resource = %name,
            incident_record_arn = %incident_record_arn,
            dedup_key = %dedup_key,
            elapsed = %elapsed,
            "Started incident"
        );

        Ok(ProcessedResource {
            resource_name: name.to_string(),
            resource_id: resource.resource_id().to_string(),
            remediation_execution_id: execution_id,
            incident_record_arn,
            dedup_key: dedup_key.to_string(),
        })
    }
}

#[async_trait]
impl<RE, IB> ExposureHandlingPort for HandleExposureUseCase<RE, IB>
where
    RE: RemediationEngine,
    IB: IncidentBackend,
{
    async fn handle(&self, event: &ExposureEvent) -> Result<HandlingReport> {
        self.execute(event).await
    }
}
