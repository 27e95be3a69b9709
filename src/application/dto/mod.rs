/// Data Transfer Objects for application layer
///
/// DTOs carry use case results out to the adapters, keeping the domain
/// layer isolated from the Lambda response format.
mod handling_report;

pub use handling_report::{HandlingReport, ProcessedResource};
