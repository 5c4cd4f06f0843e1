//! Telemetry transport layer: CAN frame representation, 11-bit identifier
//! management, bus configuration, and abstraction traits.
//!
//! ## Deployment Constants
//!
//! These constants pin down the single message type the exchange uses and
//! the pacing of the periodic loop.

pub mod can_frame;
pub mod can_id;
pub mod config;
pub mod traits;

use can_id::CanId;

/// Identifier carried by every outbound telemetry frame.
///
/// A single standard (11-bit) identifier distinguishes this message type on
/// the shared bus. The receive path deliberately does not filter on it;
/// see [`ExchangeDriver::receive_cycle`].
///
/// [`ExchangeDriver::receive_cycle`]: crate::protocol::exchange::driver::ExchangeDriver::receive_cycle
pub const TELEMETRY_FRAME_ID: CanId = CanId(0x0F5);

/// Recommended period between exchange ticks (ms).
///
/// Each tick performs one send attempt and one receive poll. At the
/// deployment bit rate (~128 kbit/s) a full 8-byte standard frame occupies
/// the bus for roughly 1 ms, so a 250 ms period keeps the telemetry load
/// well under 1 % of bus capacity while the displayed counters still move
/// visibly.
///
/// # Example
///
/// ```rust,ignore
/// use embassy_time::{Duration, Ticker};
/// use cantherm::protocol::transport::TELEMETRY_PERIOD_MS;
///
/// let mut ticker = Ticker::every(Duration::from_millis(TELEMETRY_PERIOD_MS as u64));
/// loop {
///     ticker.next().await;
///     // run one send cycle + one receive poll
/// }
/// ```
pub const TELEMETRY_PERIOD_MS: u32 = 250;
