//! Abstraction traits used by the transport layer (CAN bus, timer, and
//! temperature sensor).
pub mod can_bus;
pub mod temperature;
pub mod tick_timer;
