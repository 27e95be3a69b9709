//! Handler configuration.
//!
//! Settings are resolved from built-in defaults, then an optional YAML file
//! named by `EXPOSURE_RESPONDER_CONFIG`, then individual environment
//! variables, which win over everything else.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::warn;

use crate::exposure_response::services::{
    DedupKeyGenerator, DEFAULT_WINDOW_MINUTES, S3_BUCKET_RESOURCE_TYPE,
};
use crate::shared::{ResponderError, Result};

pub const CONFIG_PATH_ENV: &str = "EXPOSURE_RESPONDER_CONFIG";
pub const REMEDIATION_DOCUMENT_ENV: &str = "REMEDIATION_DOCUMENT_NAME";
pub const REMEDIATION_PARAMETER_ENV: &str = "REMEDIATION_PARAMETER_NAME";
pub const RESPONSE_PLAN_ARN_ENV: &str = "INCIDENT_RESPONSE_PLAN_ARN";
pub const RESOURCE_TYPE_ENV: &str = "EXPOSURE_RESOURCE_TYPE";
pub const DEDUP_WINDOW_ENV: &str = "DEDUP_WINDOW_MINUTES";
pub const INCIDENT_IMPACT_ENV: &str = "INCIDENT_IMPACT";

const DEFAULT_REMEDIATION_DOCUMENT: &str = "RemediatePublicS3Bucket";
const DEFAULT_REMEDIATION_PARAMETER: &str = "BucketName";
const DEFAULT_INCIDENT_IMPACT: i32 = 3;

/// Incident Manager accepts impact 1 (critical) through 5 (no impact)
const INCIDENT_IMPACT_RANGE: std::ops::RangeInclusive<i32> = 1..=5;

/// Optional YAML configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub remediation_document: Option<String>,
    pub remediation_parameter: Option<String>,
    pub response_plan_arn: Option<String>,
    pub resource_type: Option<String>,
    pub dedup_window_minutes: Option<u32>,
    pub incident_impact: Option<i32>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Fully resolved, validated settings for the handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerConfig {
    /// SSM Automation document that locks down the resource
    pub remediation_document: String,
    /// Name of the document parameter receiving the resource name
    pub remediation_parameter: String,
    /// Incident Manager response plan used to open incidents
    pub response_plan_arn: String,
    /// Security Hub resource type tag to act on
    pub resource_type: String,
    pub dedup_window_minutes: u32,
    pub incident_impact: i32,
}

impl HandlerConfig {
    /// Resolves configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let file = match var(CONFIG_PATH_ENV) {
            Some(path) => load_config_from_path(Path::new(&path))?,
            None => ConfigFile::default(),
        };

        let config = Self {
            remediation_document: var(REMEDIATION_DOCUMENT_ENV)
                .or(file.remediation_document)
                .unwrap_or_else(|| DEFAULT_REMEDIATION_DOCUMENT.to_string()),
            remediation_parameter: var(REMEDIATION_PARAMETER_ENV)
                .or(file.remediation_parameter)
                .unwrap_or_else(|| DEFAULT_REMEDIATION_PARAMETER.to_string()),
            response_plan_arn: var(RESPONSE_PLAN_ARN_ENV)
                .or(file.response_plan_arn)
                .unwrap_or_default(),
            resource_type: var(RESOURCE_TYPE_ENV)
                .or(file.resource_type)
                .unwrap_or_else(|| S3_BUCKET_RESOURCE_TYPE.to_string()),
            dedup_window_minutes: match var(DEDUP_WINDOW_ENV) {
                Some(raw) => parse_number(DEDUP_WINDOW_ENV, &raw)?,
                None => file.dedup_window_minutes.unwrap_or(DEFAULT_WINDOW_MINUTES),
            },
            incident_impact: match var(INCIDENT_IMPACT_ENV) {
                Some(raw) => parse_number(INCIDENT_IMPACT_ENV, &raw)?,
                None => file.incident_impact.unwrap_or(DEFAULT_INCIDENT_IMPACT),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validates the resolved settings.
    pub fn validate(&self) -> Result<()> {
        require_non_empty("remediation_document", &self.remediation_document)?;
        require_non_empty("remediation_parameter", &self.remediation_parameter)?;
        require_non_empty("resource_type", &self.resource_type)?;

        if !self.response_plan_arn.starts_with("arn:") {
            return Err(invalid(
                "response_plan_arn",
                format!(
                    "'{}' is not an ARN. Set {} to the Incident Manager response plan ARN",
                    self.response_plan_arn, RESPONSE_PLAN_ARN_ENV
                ),
            ));
        }

        DedupKeyGenerator::new(self.dedup_window_minutes)?;

        if !INCIDENT_IMPACT_RANGE.contains(&self.incident_impact) {
            return Err(invalid(
                "incident_impact",
                format!(
                    "{} is outside {}..={}",
                    self.incident_impact,
                    INCIDENT_IMPACT_RANGE.start(),
                    INCIDENT_IMPACT_RANGE.end()
                ),
            ));
        }

        Ok(())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file is packaged with the function and readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    warn_unknown_fields(&config);

    Ok(config)
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        warn!(field = %key, "Unknown config field will be ignored");
    }
}

fn parse_number<T: std::str::FromStr>(field: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| invalid(field, format!("'{}' is not a valid number", raw)))
}

fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field, "must not be empty".to_string()));
    }
    Ok(())
}

fn invalid(field: &str, reason: String) -> anyhow::Error {
    ResponderError::InvalidConfiguration {
        field: field.to_string(),
        reason,
    }
    .into()
}
