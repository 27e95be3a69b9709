use crate::exposure_response::domain::{
    ExposedResource, ExposureEvent, Finding, ResourceName, ResourceReference,
};
use crate::shared::ResponderError;

/// Resource type tag Security Hub uses for S3 buckets
pub const S3_BUCKET_RESOURCE_TYPE: &str = "AwsS3Bucket";

/// Why an entry of the event produced nothing to act on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The event carries no findings at all
    NoFindings,
    /// A finding lists no resources
    NoResources { finding_index: usize },
    /// A resource is not of the type being handled
    TypeMismatch {
        finding_index: usize,
        resource_type: Option<String>,
    },
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::NoFindings => write!(f, "no findings in event"),
            SkipReason::NoResources { finding_index } => {
                write!(f, "no resources in finding #{}", finding_index)
            }
            SkipReason::TypeMismatch {
                finding_index,
                resource_type,
            } => write!(
                f,
                "resource of type '{}' in finding #{} is not handled",
                resource_type.as_deref().unwrap_or("<missing>"),
                finding_index
            ),
        }
    }
}

/// Result of examining one entry of an exposure event
#[derive(Debug)]
pub enum ResourceOutcome {
    Extracted(ExposedResource),
    Skipped(SkipReason),
    /// A resource of the handled type whose payload is missing required fields
    Failed(anyhow::Error),
}

/// FindingExtractor walks the findings of an event and classifies every
/// resource reference it meets.
///
/// Extraction is lazy and holds no cursor: calling `extract` again on the
/// same event starts over and yields the same outcomes in the same order.
#[derive(Debug, Clone)]
pub struct FindingExtractor {
    resource_type: String,
}

impl FindingExtractor {
    pub fn new(resource_type: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
        }
    }

    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    pub fn extract<'a>(
        &'a self,
        event: &'a ExposureEvent,
    ) -> impl Iterator<Item = ResourceOutcome> + 'a {
        let findings = event.findings();
        let no_findings = findings
            .is_empty()
            .then_some(ResourceOutcome::Skipped(SkipReason::NoFindings));

        no_findings.into_iter().chain(
            findings
                .iter()
                .enumerate()
                .flat_map(move |(index, finding)| self.finding_outcomes(index, finding)),
        )
    }

    fn finding_outcomes<'a>(
        &'a self,
        finding_index: usize,
        finding: &'a Finding,
    ) -> impl Iterator<Item = ResourceOutcome> + 'a {
        let resources = finding.resources();
        let no_resources = resources
            .is_empty()
            .then_some(ResourceOutcome::Skipped(SkipReason::NoResources {
                finding_index,
            }));

        no_resources.into_iter().chain(
            resources
                .iter()
                .map(move |resource| self.classify(finding_index, finding, resource)),
        )
    }

    fn classify(
        &self,
        finding_index: usize,
        finding: &Finding,
        resource: &ResourceReference,
    ) -> ResourceOutcome {
        if !resource.is_of_type(&self.resource_type) {
            return ResourceOutcome::Skipped(SkipReason::TypeMismatch {
                finding_index,
                resource_type: resource.resource_type.clone(),
            });
        }

        let Some(resource_id) = resource.id.as_deref() else {
            return ResourceOutcome::Failed(
                ResponderError::malformed_finding(format!(
                    "resource of type '{}' in finding #{} is missing 'Id'",
                    self.resource_type, finding_index
                ))
                .into(),
            );
        };

        let Some(updated_at) = finding.updated_at.as_deref() else {
            return ResourceOutcome::Failed(
                ResponderError::malformed_finding(format!(
                    "finding #{} reporting '{}' is missing 'UpdatedAt'",
                    finding_index, resource_id
                ))
                .into(),
            );
        };

        match ResourceName::from_resource_id(resource_id) {
            Ok(name) => ResourceOutcome::Extracted(ExposedResource::new(
                name,
                resource_id.to_string(),
                updated_at.to_string(),
            )),
            Err(e) => ResourceOutcome::Failed(e),
        }
    }
}

impl Default for FindingExtractor {
    fn default() -> Self {
        Self::new(S3_BUCKET_RESOURCE_TYPE)
    }
}
