use crate::shared::{ResponderError, Result};

/// Separator between the ARN prefix and the short resource name.
const RESOURCE_NAME_SEPARATOR: &str = ":::";

/// NewType wrapper for the short name of an exposed resource (e.g. a bucket name)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceName(String);

impl ResourceName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            return Err(ResponderError::malformed_finding("resource name cannot be empty").into());
        }
        Ok(Self(name))
    }

    /// Derives the short name from a fully-qualified identifier by taking
    /// everything after the last `:::`. An identifier without the separator
    /// is used as-is.
    pub fn from_resource_id(resource_id: &str) -> Result<Self> {
        let name = resource_id
            .rsplit(RESOURCE_NAME_SEPARATOR)
            .next()
            .unwrap_or(resource_id);

        if name.is_empty() {
            return Err(ResponderError::malformed_finding(format!(
                "resource identifier '{}' has no name after '{}'",
                resource_id, RESOURCE_NAME_SEPARATOR
            ))
            .into());
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ResourceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A resource of the type of interest pulled out of a finding, together with
/// the timestamp of the finding that reported it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExposedResource {
    name: ResourceName,
    resource_id: String,
    updated_at: String,
}

impl ExposedResource {
    pub fn new(name: ResourceName, resource_id: String, updated_at: String) -> Self {
        Self {
            name,
            resource_id,
            updated_at,
        }
    }

    pub fn name(&self) -> &ResourceName {
        &self.name
    }

    /// The fully-qualified identifier as it appeared in the finding.
    pub fn resource_id(&self) -> &str {
        &self.resource_id
    }

    pub fn updated_at(&self) -> &str {
        &self.updated_at
    }
}
