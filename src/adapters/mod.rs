/// Adapters layer - Infrastructure implementations
///
/// Inbound adapters translate Lambda invocations into use case calls;
/// outbound adapters implement the ports against AWS services.
pub mod inbound;
pub mod outbound;
