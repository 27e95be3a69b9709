/// Shared utilities used across all layers
pub mod error;
pub mod result;

pub use error::ResponderError;
pub use result::Result;
