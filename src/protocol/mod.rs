//! High-level components of the telemetry protocol: message structures,
//! exchange logic, and CAN transport.
pub mod exchange;
pub mod messages;
pub mod transport;
