//! In-memory representation of a classic CAN data frame as exchanged with
//! the bus transport.
use crate::protocol::transport::can_id::CanId;
use embedded_can::{Frame, Id, StandardId};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Raw CAN frame as written to or read from the bus.
pub struct CanFrame {
    /// Standard 11-bit CAN identifier.
    pub id: CanId,
    /// Payload buffer. Classic CAN frames always provide eight bytes.
    pub data: [u8; 8],
    /// Number of valid payload bytes (Data Length Code, 0 to 8).
    pub len: usize,
}

// `embedded-can` bridge so HAL adapters can build and consume frames
// through the ecosystem trait. The telemetry exchange only ever produces
// standard-addressing data frames; remote and extended frames are refused.
impl Frame for CanFrame {
    fn new(id: impl Into<Id>, data: &[u8]) -> Option<Self> {
        if data.len() > 8 {
            return None;
        }
        let standard_id = match id.into() {
            Id::Standard(standard_id) => standard_id,
            Id::Extended(_) => return None,
        };

        let mut payload = [0u8; 8];
        payload[..data.len()].copy_from_slice(data);

        Some(Self {
            id: CanId::from(standard_id),
            data: payload,
            len: data.len(),
        })
    }

    fn new_remote(_id: impl Into<Id>, _dlc: usize) -> Option<Self> {
        // Remote frames play no role in the telemetry exchange.
        None
    }

    fn is_extended(&self) -> bool {
        false
    }

    fn is_remote_frame(&self) -> bool {
        false
    }

    fn id(&self) -> Id {
        Id::Standard(StandardId::new(self.id.0 & CanId::MAX_RAW).unwrap_or(StandardId::ZERO))
    }

    fn dlc(&self) -> usize {
        self.len
    }

    fn data(&self) -> &[u8] {
        &self.data[..self.len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_trait_round_trip() {
        let id = StandardId::new(0x0F5).expect("valid standard id");
        let frame =
            CanFrame::new(id, &[0x4D, 0x69, 0x63, 0x68, 0x69, 0x07, 0xEA, 0x00]).expect("8 bytes fit");

        assert_eq!(frame.id, CanId(0x0F5));
        assert_eq!(frame.dlc(), 8);
        assert_eq!(Frame::data(&frame)[0], 0x4D);
        assert!(frame.is_data_frame());
        assert!(frame.is_standard());
    }

    #[test]
    fn test_frame_trait_refuses_oversized_and_remote() {
        let id = StandardId::new(0x0F5).expect("valid standard id");
        assert!(CanFrame::new(id, &[0u8; 9]).is_none());
        assert!(CanFrame::new_remote(id, 8).is_none());
    }
}
