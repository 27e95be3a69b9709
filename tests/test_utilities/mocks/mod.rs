/// Mock implementations for testing
mod mock_incident_backend;
mod mock_remediation_engine;

pub use mock_incident_backend::MockIncidentBackend;
pub use mock_remediation_engine::MockRemediationEngine;
