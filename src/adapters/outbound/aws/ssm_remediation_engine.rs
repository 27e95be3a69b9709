use crate::exposure_response::domain::RemediationRequest;
use crate::ports::outbound::RemediationEngine;
use crate::shared::{ResponderError, Result};
use async_trait::async_trait;
use aws_sdk_ssm::error::DisplayErrorContext;
use aws_sdk_ssm::operation::start_automation_execution::builders::StartAutomationExecutionFluentBuilder;

/// SsmRemediationEngine adapter starting SSM Automation executions
///
/// This adapter implements the RemediationEngine port with a single
/// `StartAutomationExecution` call. It returns as soon as the execution is
/// accepted; the runbook itself runs asynchronously inside SSM.
pub struct SsmRemediationEngine {
    client: aws_sdk_ssm::Client,
    document_name: String,
    parameter_name: String,
}

impl SsmRemediationEngine {
    pub fn new(
        client: aws_sdk_ssm::Client,
        document_name: impl Into<String>,
        parameter_name: impl Into<String>,
    ) -> Self {
        Self {
            client,
            document_name: document_name.into(),
            parameter_name: parameter_name.into(),
        }
    }

    pub fn document_name(&self) -> &str {
        &self.document_name
    }

    pub fn parameter_name(&self) -> &str {
        &self.parameter_name
    }

    /// Prepares the `StartAutomationExecution` call without sending it
    fn automation_call(&self, request: &RemediationRequest) -> StartAutomationExecutionFluentBuilder {
        self.client
            .start_automation_execution()
            .document_name(&self.document_name)
            .parameters(
                &self.parameter_name,
                vec![request.resource_name().as_str().to_string()],
            )
    }
}

#[async_trait]
impl RemediationEngine for SsmRemediationEngine {
    async fn start_remediation(&self, request: &RemediationRequest) -> Result<String> {
        let resource = request.resource_name().as_str();

        let output = self
            .automation_call(request)
            .send()
            .await
            .map_err(|e| ResponderError::RemediationSubmissionFailed {
                resource: resource.to_string(),
                details: DisplayErrorContext(&e).to_string(),
            })?;

        let execution_id = output.automation_execution_id().ok_or_else(|| {
            ResponderError::RemediationSubmissionFailed {
                resource: resource.to_string(),
                details: format!(
                    "{} accepted the request but returned no execution id",
                    self.document_name
                ),
            }
        })?;

        Ok(execution_id.to_string())
    }
}
