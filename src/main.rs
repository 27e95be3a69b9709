use aws_config::BehaviorVersion;
use exposure_responder::prelude::*;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> std::result::Result<(), Error> {
    init_tracing();

    let config = HandlerConfig::from_env()?;
    info!(
        remediation_document = %config.remediation_document,
        response_plan_arn = %config.response_plan_arn,
        resource_type = %config.resource_type,
        dedup_window_minutes = config.dedup_window_minutes,
        "Configuration loaded"
    );

    // Clients are built once per execution environment and shared by every invocation
    let aws = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let remediation_engine = SsmRemediationEngine::new(
        aws_sdk_ssm::Client::new(&aws),
        config.remediation_document.clone(),
        config.remediation_parameter.clone(),
    );
    let incident_backend = IncidentManagerBackend::new(
        aws_sdk_ssmincidents::Client::new(&aws),
        config.response_plan_arn.clone(),
    );

    let use_case = HandleExposureUseCase::from_config(remediation_engine, incident_backend, &config)?;
    let handler = LambdaHandler::new(use_case);
    let handler = &handler;

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler.invoke(event.payload).await.map_err(Error::from)
    }))
    .await
}

/// JSON logs on stdout; Lambda forwards them to CloudWatch and stamps the time.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .init();
}
