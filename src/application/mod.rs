/// Application layer - Use cases and DTOs
///
/// This layer orchestrates the domain services and coordinates with the
/// remediation engine and incident backend through ports.
pub mod dto;
pub mod use_cases;
