//! Byte-level codec for the fixed 8-byte telemetry frame: field offsets,
//! scaled fixed-point temperature, and the total pack/unpack functions.
//!
//! Both directions are total: any name/reading encodes (truncation and
//! padding cover every input length) and any 8-byte payload decodes to a
//! well-typed record. Frame integrity is the transport's responsibility;
//! there is no checksum inside the frame.
use crate::protocol::messages::{NodeName, TelemetryMessage, NAME_LEN};

/// Wire size of every telemetry frame.
pub const FRAME_LEN: usize = 8;

// Field offsets inside the frame.
const SEQUENCE_OFFSET: usize = 5;
const TEMPERATURE_OFFSET: usize = 6;

/// Fixed-point scale of the temperature field (0.1 °C resolution).
const TEMPERATURE_SCALE: f64 = 10.0;

//==================================================================================ENCODE

/// Pack a telemetry record into its 8-byte wire form.
///
/// Layout: bytes 0-4 name, byte 5 sequence, bytes 6-7 temperature ×10 as
/// unsigned 16 bits little endian.
pub fn encode(message: &TelemetryMessage) -> [u8; FRAME_LEN] {
    let mut frame = [0u8; FRAME_LEN];

    // Bytes 0-4: name, already truncated/padded by `NodeName`.
    frame[..NAME_LEN].copy_from_slice(&message.name.raw());

    // Byte 5: counter.
    frame[SEQUENCE_OFFSET] = message.sequence;

    // Bytes 6-7: temperature (Little Endian).
    let scaled = scale_temperature(message.temperature);
    frame[TEMPERATURE_OFFSET..].copy_from_slice(&scaled.to_le_bytes());

    frame
}

/// Scale a reading to tenths of a degree on an unsigned 16-bit value.
///
/// Readings below zero are not representable: the value wraps through the
/// unsigned field (the cast goes through `i32` to wrap rather than
/// saturate) and decodes as a large positive reading on the far side.
fn scale_temperature(degrees: f64) -> u16 {
    (degrees * TEMPERATURE_SCALE + 0.5) as i32 as u16
}

//==================================================================================DECODE

/// Unpack an 8-byte payload into a telemetry record.
///
/// Total function: all-zero input yields an empty name, sequence 0 and
/// 0.0 °C; arbitrary bytes yield an arbitrary but well-typed record. The
/// name bytes may lack a terminator; [`NodeName`] bounds every view at
/// [`NAME_LEN`] bytes.
pub fn decode(payload: &[u8; FRAME_LEN]) -> TelemetryMessage {
    let mut name = [0u8; NAME_LEN];
    name.copy_from_slice(&payload[..NAME_LEN]);

    let raw_temperature = u16::from_le_bytes([
        payload[TEMPERATURE_OFFSET],
        payload[TEMPERATURE_OFFSET + 1],
    ]);

    TelemetryMessage {
        name: NodeName::from_raw(name),
        sequence: payload[SEQUENCE_OFFSET],
        // No sign recovery: the field is unsigned on the wire.
        temperature: raw_temperature as f64 / TEMPERATURE_SCALE,
    }
}
