use serde::Deserialize;

/// Raw payload delivered to the handler.
///
/// Security Hub findings normally arrive wrapped in an EventBridge envelope
/// (`detail.findings`). A bare `findings` list at the top level is accepted
/// as well so the handler can be invoked directly with an exported finding.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExposureEvent {
    #[serde(default)]
    pub detail: Option<FindingsDetail>,
    #[serde(default)]
    pub findings: Option<Vec<Finding>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FindingsDetail {
    #[serde(default)]
    pub findings: Option<Vec<Finding>>,
}

/// A single Security Hub finding (ASFF). Only the fields the handler reads
/// are modelled; everything else in the payload is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Finding {
    #[serde(rename = "UpdatedAt", default)]
    pub updated_at: Option<String>,
    #[serde(rename = "Resources", default)]
    pub resources: Option<Vec<ResourceReference>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceReference {
    #[serde(rename = "Type", default)]
    pub resource_type: Option<String>,
    #[serde(rename = "Id", default)]
    pub id: Option<String>,
}

impl ExposureEvent {
    /// Findings carried by the event, envelope first.
    pub fn findings(&self) -> &[Finding] {
        self.detail
            .as_ref()
            .and_then(|detail| detail.findings.as_deref())
            .or(self.findings.as_deref())
            .unwrap_or(&[])
    }
}

impl Finding {
    pub fn resources(&self) -> &[ResourceReference] {
        self.resources.as_deref().unwrap_or(&[])
    }
}

impl ResourceReference {
    pub fn is_of_type(&self, resource_type: &str) -> bool {
        self.resource_type.as_deref() == Some(resource_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_findings_from_eventbridge_envelope() {
        let event: ExposureEvent = serde_json::from_str(
            r#"{
                "version": "0",
                "detail-type": "Security Hub Findings - Imported",
                "detail": {
                    "findings": [
                        {
                            "UpdatedAt": "2024-01-01T10:07:00.000Z",
                            "Resources": [{"Type": "AwsS3Bucket", "Id": "arn:aws:s3:::my-bucket"}]
                        }
                    ]
                }
            }"#,
        )
        .unwrap();

        let findings = event.findings();
        assert_eq!(findings.len(), 1);
        assert_eq!(
            findings[0].updated_at.as_deref(),
            Some("2024-01-01T10:07:00.000Z")
        );
        assert_eq!(findings[0].resources().len(), 1);
        assert!(findings[0].resources()[0].is_of_type("AwsS3Bucket"));
    }

    #[test]
    fn test_findings_from_top_level_list() {
        let event: ExposureEvent = serde_json::from_str(
            r#"{"findings": [{"UpdatedAt": "2024-01-01T10:07:00Z", "Resources": []}]}"#,
        )
        .unwrap();
        assert_eq!(event.findings().len(), 1);
        assert!(event.findings()[0].resources().is_empty());
    }

    #[test]
    fn test_missing_findings_is_empty() {
        let event: ExposureEvent = serde_json::from_str(r#"{"detail": {}}"#).unwrap();
        assert!(event.findings().is_empty());

        let event: ExposureEvent = serde_json::from_str("{}").unwrap();
        assert!(event.findings().is_empty());
    }

    #[test]
    fn test_null_resources_is_empty() {
        let finding: Finding =
            serde_json::from_str(r#"{"UpdatedAt": "2024-01-01T10:07:00Z", "Resources": null}"#)
                .unwrap();
        assert!(finding.resources().is_empty());
    }

    #[test]
    fn test_resource_without_type_matches_nothing() {
        let resource: ResourceReference =
            serde_json::from_str(r#"{"Id": "arn:aws:s3:::my-bucket"}"#).unwrap();
        assert!(!resource.is_of_type("AwsS3Bucket"));
    }
}
