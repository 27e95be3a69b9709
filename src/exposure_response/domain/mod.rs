pub mod dedup;
pub mod finding;
pub mod incident;
pub mod remediation;
pub mod resource;

pub use dedup::{DedupKey, DedupWindow};
pub use finding::{ExposureEvent, Finding, FindingsDetail, ResourceReference};
pub use incident::{IncidentRequest, RelatedItem, INVOLVED_RESOURCE};
pub use remediation::RemediationRequest;
pub use resource::{ExposedResource, ResourceName};
