//! Sensor abstraction consumed by the exchange loop.

/// Source of the reading packed into every outbound frame.
pub trait TemperatureSensor {
    /// Latest reading in degrees Celsius. May be any sign in principle;
    /// see the codec for the unsigned wire representation.
    fn current_temperature(&mut self) -> f64;
}
