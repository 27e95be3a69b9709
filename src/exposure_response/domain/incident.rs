use super::dedup::DedupKey;
use super::resource::{ExposedResource, ResourceName};

/// Related-item type linking an incident to the resource it is about
pub const INVOLVED_RESOURCE: &str = "INVOLVED_RESOURCE";

/// Link from an incident back to the original resource identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedItem {
    pub item_type: String,
    pub arn: String,
    pub title: String,
}

/// Request to open (or reuse) an incident record for one exposed resource.
///
/// `client_token` is the dedup key. The backend treats a repeated token as
/// the same incident, which is the only deduplication performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidentRequest {
    resource_name: ResourceName,
    title: String,
    impact: i32,
    client_token: DedupKey,
    related_items: Vec<RelatedItem>,
}

impl IncidentRequest {
    pub fn for_resource(resource: &ExposedResource, client_token: DedupKey, impact: i32) -> Self {
        let name = resource.name();
        Self {
            resource_name: name.clone(),
            title: format!("Public S3 Bucket Exposure - {}", name),
            impact,
            client_token,
            related_items: vec![RelatedItem {
                item_type: INVOLVED_RESOURCE.to_string(),
                arn: resource.resource_id().to_string(),
                title: format!("S3 Bucket Finding - {}", name),
            }],
        }
    }

    pub fn resource_name(&self) -> &ResourceName {
        &self.resource_name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn impact(&self) -> i32 {
        self.impact
    }

    pub fn client_token(&self) -> &DedupKey {
        &self.client_token
    }

    pub fn related_items(&self) -> &[RelatedItem] {
        &self.related_items
    }
}
