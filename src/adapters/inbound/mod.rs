/// Inbound adapters - Entry points that drive the inbound ports
mod lambda_handler;

pub use lambda_handler::LambdaHandler;
