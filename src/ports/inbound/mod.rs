/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., the
/// Lambda runtime) use to interact with the application core.
pub mod exposure_handling_port;

pub use exposure_handling_port::ExposureHandlingPort;
