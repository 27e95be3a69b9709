use thiserror::Error;

/// Failures raised while handling an exposure event.
///
/// Uses thiserror to derive Display and Error traits. Every variant is a hard
/// failure that aborts the invocation; skipped resources are not errors and
/// never appear here.
#[derive(Debug, Error)]
pub enum ResponderError {
    #[error("Malformed timestamp: '{value}'\nExpected YYYY-MM-DDTHH:MM:SSZ or YYYY-MM-DDTHH:MM:SS.fffZ\n\n💡 Hint: Security Hub reports UpdatedAt in UTC with a trailing 'Z'")]
    MalformedTimestamp { value: String },

    #[error("Malformed finding: {details}\n\n💡 Hint: Verify the event is a Security Hub finding delivered through EventBridge")]
    MalformedFinding { details: String },

    #[error("Failed to start remediation for resource: {resource}\nDetails: {details}\n\n💡 Hint: Check the automation document name and the ssm:StartAutomationExecution permission")]
    RemediationSubmissionFailed { resource: String, details: String },

    #[error("Failed to open incident for resource: {resource}\nDetails: {details}\n\n💡 Hint: Check the response plan ARN and the ssm-incidents:StartIncident permission")]
    IncidentSubmissionFailed { resource: String, details: String },

    #[error("Invalid configuration: {field}\nReason: {reason}")]
    InvalidConfiguration { field: String, reason: String },
}

impl ResponderError {
    pub fn malformed_finding(details: impl Into<String>) -> Self {
        ResponderError::MalformedFinding {
            details: details.into(),
        }
    }
}
