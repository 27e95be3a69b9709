use super::resource::ResourceName;

/// Request to start the remediation workflow for one resource.
///
/// The workflow is parameterized by the resource name only; the document
/// name and parameter key come from configuration in the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemediationRequest {
    resource_name: ResourceName,
}

impl RemediationRequest {
    pub fn new(resource_name: ResourceName) -> Self {
        Self { resource_name }
    }

    pub fn resource_name(&self) -> &ResourceName {
        &self.resource_name
    }
}
