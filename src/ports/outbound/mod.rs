/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (automation engine, incident backend).
pub mod incident_backend;
pub mod remediation_engine;

pub use incident_backend::IncidentBackend;
pub use remediation_engine::RemediationEngine;
