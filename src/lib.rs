//! exposure-responder - respond to publicly exposed S3 buckets
//!
//! This library handles Security Hub findings about publicly exposed S3
//! buckets. For every affected bucket it starts an SSM Automation runbook
//! that locks the bucket down and opens an Incident Manager incident. The
//! incident is opened with a dedup key as idempotency token, so the same
//! bucket reported repeatedly within one 15-minute window yields one
//! incident.
//!
//! # Architecture
//!
//! The library follows hexagonal architecture:
//!
//! - **Domain Layer** (`exposure_response`): event model, dedup keys, extraction
//! - **Application Layer** (`application`): the handling use case and its report
//! - **Ports** (`ports`): interfaces to the remediation engine and incident backend
//! - **Adapters** (`adapters`): AWS SDK implementations and the Lambda entry adapter
//! - **Shared** (`shared`): error taxonomy and result alias
//!
//! # Example
//!
//! ```no_run
//! use exposure_responder::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! let config = HandlerConfig::from_env()?;
//! let aws = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
//!
//! let engine = SsmRemediationEngine::new(
//!     aws_sdk_ssm::Client::new(&aws),
//!     config.remediation_document.clone(),
//!     config.remediation_parameter.clone(),
//! );
//! let backend = IncidentManagerBackend::new(
//!     aws_sdk_ssmincidents::Client::new(&aws),
//!     config.response_plan_arn.clone(),
//! );
//!
//! let use_case = HandleExposureUseCase::from_config(engine, backend, &config)?;
//! let event: ExposureEvent = serde_json::from_str(r#"{"detail": {"findings": []}}"#)?;
//! let report = use_case.execute(&event).await?;
//! assert!(report.is_noop());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod exposure_response;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::inbound::LambdaHandler;
    pub use crate::adapters::outbound::aws::{IncidentManagerBackend, SsmRemediationEngine};
    pub use crate::application::dto::{HandlingReport, ProcessedResource};
    pub use crate::application::use_cases::HandleExposureUseCase;
    pub use crate::config::HandlerConfig;
    pub use crate::exposure_response::domain::{
        DedupKey, DedupWindow, ExposedResource, ExposureEvent, Finding, IncidentRequest,
        RelatedItem, RemediationRequest, ResourceName, ResourceReference,
    };
    pub use crate::exposure_response::services::{
        DedupKeyGenerator, FindingExtractor, ResourceOutcome, SkipReason,
    };
    pub use crate::ports::inbound::ExposureHandlingPort;
    pub use crate::ports::outbound::{IncidentBackend, RemediationEngine};
    pub use crate::shared::{ResponderError, Result};
}
