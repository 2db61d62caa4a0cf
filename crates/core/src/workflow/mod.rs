//! Budget workflow: upstream ports and the service that drives the engine

pub mod ports;
pub mod service;

pub use ports::*;
pub use service::*;
