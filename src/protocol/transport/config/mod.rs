//! Immutable bus configuration handed to the CAN transport at bring-up.
//!
//! The codec and exchange driver never touch these values; they exist so
//! firmware can describe its deployment (bit timing, mode, acceptance
//! filter) as data and keep peripheral registers out of the protocol core.
use crate::error::BusConfigError;
use crate::protocol::transport::can_id::CanId;

/// Operating mode requested from the CAN peripheral.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusMode {
    /// Regular operation on a shared bus.
    Normal,
    /// Internal loopback: every transmitted frame is also received locally.
    /// Lets a single node exercise the full exchange without a second
    /// device on the bus.
    Loopback,
}

/// Acceptance filter in identifier/mask form.
///
/// A mask bit set to `1` requires the corresponding identifier bit to
/// match; the all-zero mask accepts every frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FilterConfig {
    pub id: u16,
    pub mask: u16,
}

impl FilterConfig {
    /// Accept every frame on the bus.
    pub const fn accept_all() -> Self {
        Self { id: 0, mask: 0 }
    }
}

/// Bit timing and peripheral settings, expressed in time quanta.
///
/// A nominal bit is `1 + time_segment_1 + time_segment_2` quanta long; the
/// peripheral clock divided by `prescaler` gives the quantum frequency.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusConfig {
    /// Baud-rate prescaler applied to the peripheral clock (1..=1024).
    pub prescaler: u16,
    /// Synchronisation jump width in time quanta (1..=4).
    pub sync_jump_width: u8,
    /// Time segment 1 in time quanta (1..=16), sample point included.
    pub time_segment_1: u8,
    /// Time segment 2 in time quanta (1..=8).
    pub time_segment_2: u8,
    /// Requested peripheral mode.
    pub mode: BusMode,
    /// Let the peripheral retry lost arbitration / errored frames.
    pub auto_retransmission: bool,
    /// Inbound acceptance filter.
    pub filter: FilterConfig,
}

impl BusConfig {
    /// Single-node self-test preset: loopback mode with the timing used by
    /// the reference deployment. On a 45 MHz peripheral clock the nominal
    /// bit rate lands at 45 MHz / (16 × 22 tq) ≈ 128 kbit/s.
    pub const fn loopback() -> Self {
        let mut config = Self::DEPLOYMENT_TIMING;
        config.mode = BusMode::Loopback;
        config
    }

    const DEPLOYMENT_TIMING: Self = Self {
        prescaler: 16,
        sync_jump_width: 1,
        time_segment_1: 15,
        time_segment_2: 6,
        mode: BusMode::Normal,
        auto_retransmission: true,
        filter: FilterConfig::accept_all(),
    };

    /// Nominal bit rate resulting from this timing for a given peripheral
    /// clock, in bits per second.
    pub const fn bit_rate(&self, peripheral_clock_hz: u32) -> u32 {
        let quanta_per_bit =
            1 + self.time_segment_1 as u32 + self.time_segment_2 as u32;
        peripheral_clock_hz / (self.prescaler as u32 * quanta_per_bit)
    }

    /// Check the timing parameters against the bxCAN register ranges.
    ///
    /// Transport implementations are expected to call this before writing
    /// any register and surface the failure as
    /// [`InitError::Config`](crate::error::InitError).
    pub fn validate(&self) -> Result<(), BusConfigError> {
        if self.prescaler == 0 || self.prescaler > 1024 {
            return Err(BusConfigError::InvalidPrescaler {
                prescaler: self.prescaler,
            });
        }
        if self.time_segment_1 == 0 || self.time_segment_1 > 16 {
            return Err(BusConfigError::InvalidTimeSegment1 {
                quanta: self.time_segment_1,
            });
        }
        if self.time_segment_2 == 0 || self.time_segment_2 > 8 {
            return Err(BusConfigError::InvalidTimeSegment2 {
                quanta: self.time_segment_2,
            });
        }
        if self.sync_jump_width == 0 || self.sync_jump_width > 4 {
            return Err(BusConfigError::InvalidSyncJumpWidth {
                quanta: self.sync_jump_width,
            });
        }
        if self.filter.id > CanId::MAX_RAW || self.filter.mask > CanId::MAX_RAW {
            return Err(BusConfigError::FilterIdOutOfRange);
        }
        Ok(())
    }
}

impl Default for BusConfig {
    /// Deployment timing on a regular shared bus.
    fn default() -> Self {
        Self::DEPLOYMENT_TIMING
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deployment_bit_rate() {
        // 45 MHz APB1 clock, 22 quanta per bit, prescaler 16
        let config = BusConfig::loopback();
        assert_eq!(config.bit_rate(45_000_000), 127_840);
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(BusConfig::loopback().validate().is_ok());
        assert!(BusConfig::default().validate().is_ok());
        assert_eq!(BusConfig::loopback().mode, BusMode::Loopback);
        assert_eq!(BusConfig::default().mode, BusMode::Normal);
    }

    #[test]
    fn test_validate_rejects_out_of_range_timing() {
        let mut config = BusConfig::default();
        config.prescaler = 0;
        assert!(matches!(
            config.validate(),
            Err(BusConfigError::InvalidPrescaler { prescaler: 0 })
        ));

        let mut config = BusConfig::default();
        config.time_segment_1 = 17;
        assert!(config.validate().is_err());

        let mut config = BusConfig::default();
        config.time_segment_2 = 9;
        assert!(config.validate().is_err());

        let mut config = BusConfig::default();
        config.sync_jump_width = 5;
        assert!(config.validate().is_err());

        let mut config = BusConfig::default();
        config.filter = FilterConfig { id: 0x800, mask: 0 };
        assert!(config.validate().is_err());
    }
}
