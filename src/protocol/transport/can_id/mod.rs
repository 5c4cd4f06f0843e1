//! Creation and validation of the 11-bit standard CAN identifiers used by
//! the telemetry exchange.
use crate::error::CanIdError;
use embedded_can::StandardId;

//==================================================================================CAN_ID
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Encapsulates a standard CAN identifier (11 bits) stored inside a `u16`.
pub struct CanId(pub u16);

impl CanId {
    /// Highest raw value an 11-bit identifier can take.
    pub const MAX_RAW: u16 = 0x7FF;

    /// Validate and wrap a raw identifier.
    pub const fn new(raw: u16) -> Result<Self, CanIdError> {
        if raw > Self::MAX_RAW {
            return Err(CanIdError::OutOfRange { raw });
        }
        Ok(Self(raw))
    }

    /// Return the raw 11-bit value.
    #[inline]
    pub const fn raw(&self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for CanId {
    type Error = CanIdError;

    fn try_from(raw: u16) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

// Bridges to the `embedded-can` identifier types so HAL adapters can hand
// identifiers across without re-validating.

impl From<StandardId> for CanId {
    fn from(id: StandardId) -> Self {
        Self(id.as_raw())
    }
}

impl TryFrom<CanId> for StandardId {
    type Error = CanIdError;

    fn try_from(id: CanId) -> Result<Self, Self::Error> {
        StandardId::new(id.0).ok_or(CanIdError::OutOfRange { raw: id.0 })
    }
}
