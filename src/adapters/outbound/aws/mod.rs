/// AWS adapters for the remediation engine and incident backend
mod incident_manager_backend;
mod ssm_remediation_engine;

pub use incident_manager_backend::IncidentManagerBackend;
pub use ssm_remediation_engine::SsmRemediationEngine;
