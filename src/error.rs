//! Error definitions shared across library modules.
//! Each type models a specific failure scenario (CAN ID construction,
//! bus timing validation, transport bring-up, etc.).
use thiserror_no_std::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
/// Errors that can occur while building an 11-bit standard CAN identifier.
pub enum CanIdError {
    /// The raw value does not fit in the 11-bit identifier field.
    #[error("Standard identifier out of range: {raw:#X}")]
    OutOfRange { raw: u16 },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
/// Bit-timing parameters rejected by [`BusConfig::validate`].
///
/// The admissible ranges follow the bxCAN register layout: every field is
/// expressed in time quanta and stored minus one in hardware.
///
/// [`BusConfig::validate`]: crate::protocol::transport::config::BusConfig::validate
pub enum BusConfigError {
    /// The baud-rate prescaler must stay in the 1..=1024 range.
    #[error("Invalid prescaler: {prescaler}")]
    InvalidPrescaler { prescaler: u16 },
    /// Time segment 1 must stay in the 1..=16 time-quanta range.
    #[error("Invalid time segment 1: {quanta}")]
    InvalidTimeSegment1 { quanta: u8 },
    /// Time segment 2 must stay in the 1..=8 time-quanta range.
    #[error("Invalid time segment 2: {quanta}")]
    InvalidTimeSegment2 { quanta: u8 },
    /// The synchronisation jump width must stay in the 1..=4 time-quanta range.
    #[error("Invalid sync jump width: {quanta}")]
    InvalidSyncJumpWidth { quanta: u8 },
    /// The acceptance filter references an identifier above 11 bits.
    #[error("Filter identifier out of range")]
    FilterIdOutOfRange,
}

//==================================================================================INIT_ERROR

#[derive(Error, Debug)]
/// Fatal failures while bringing the CAN transport up.
///
/// Per-cycle conditions are recovered locally and never surface here; only
/// an unusable transport halts the node.
pub enum InitError<E: core::fmt::Debug> {
    /// The supplied bit-timing configuration is inconsistent.
    #[error(transparent)]
    Config(#[from] BusConfigError),

    /// The CAN peripheral rejected initialisation.
    #[error("CAN peripheral init failed: {0:?}")]
    Peripheral(E),

    /// The acceptance filter could not be configured.
    #[error("Filter configuration failed: {0:?}")]
    Filter(E),

    /// The peripheral refused to leave initialisation mode.
    #[error("Bus start failed: {0:?}")]
    Start(E),
}
