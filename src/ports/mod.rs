/// Ports module defining interfaces for hexagonal architecture
///
/// Inbound ports are driven by the Lambda entry point; outbound ports are
/// implemented by the AWS adapters and by test doubles.
pub mod inbound;
pub mod outbound;
