/// Exposure response domain: event model, dedup keys, and the services that
/// turn a Security Hub finding into remediation and incident requests.
pub mod domain;
pub mod services;
