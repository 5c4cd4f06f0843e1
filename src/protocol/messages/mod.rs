//! Telemetry message structures exchanged on the bus: a typed wrapper
//! around the 5-byte node name plus the record the codec packs into the
//! 8-byte wire frame.
//!
//! # Wire layout (Little Endian order)
//!
//! ```text
//! Bytes 0-4 (5 bytes) : node name, raw bytes, no terminator guaranteed
//! Byte  5   (1 byte ) : sequence counter, wraps modulo 256
//! Bytes 6-7 (2 bytes) : temperature ×10, unsigned 16 bits, little endian
//! ```

use core::fmt;

/// Number of name bytes carried by every telemetry frame.
pub const NAME_LEN: usize = 5;

/// Wrapper around the 5-byte node identity transmitted in every frame.
///
/// Construction from a string truncates to [`NAME_LEN`] bytes and zero-pads
/// shorter input; the wire form carries the raw bytes with no terminator.
///
/// # Example
///
/// ```
/// use cantherm::protocol::messages::NodeName;
///
/// let name = NodeName::new("Michi");
/// assert_eq!(name.raw(), *b"Michi");
/// assert_eq!(name.as_str(), "Michi");
///
/// // Longer input keeps only the first five bytes.
/// let truncated = NodeName::new("Michigan");
/// assert_eq!(truncated, name);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NodeName([u8; NAME_LEN]);

impl NodeName {
    /// Build a `NodeName` from raw wire bytes.
    #[inline]
    pub const fn from_raw(raw: [u8; NAME_LEN]) -> Self {
        Self(raw)
    }

    /// Build a `NodeName` from a string, truncating to [`NAME_LEN`] bytes
    /// and zero-padding shorter input. Total over any input length.
    pub fn new(name: &str) -> Self {
        let mut raw = [0u8; NAME_LEN];
        let bytes = name.as_bytes();
        let len = bytes.len().min(NAME_LEN);
        raw[..len].copy_from_slice(&bytes[..len]);
        Self(raw)
    }

    /// Return the underlying 5 bytes, padding included.
    #[inline]
    pub const fn raw(&self) -> [u8; NAME_LEN] {
        self.0
    }

    /// Bounded string view: stops at the first NUL byte. Frames received
    /// from the bus may carry arbitrary bytes here; the view falls back to
    /// the longest valid UTF-8 prefix.
    pub fn as_str(&self) -> &str {
        let end = self.0.iter().position(|&b| b == 0).unwrap_or(NAME_LEN);
        match core::str::from_utf8(&self.0[..end]) {
            Ok(name) => name,
            Err(err) => {
                let valid = err.valid_up_to();
                core::str::from_utf8(&self.0[..valid]).unwrap_or("")
            }
        }
    }

    /// Whether the name carries no visible byte at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0[0] == 0
    }
}

impl From<[u8; NAME_LEN]> for NodeName {
    #[inline]
    fn from(raw: [u8; NAME_LEN]) -> Self {
        Self::from_raw(raw)
    }
}

impl From<NodeName> for [u8; NAME_LEN] {
    #[inline]
    fn from(name: NodeName) -> Self {
        name.raw()
    }
}

impl fmt::Display for NodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One telemetry record, the logical content of a single wire frame.
///
/// The same shape serves both directions: the exchange driver builds one
/// fresh record per send cycle, and the codec produces one from every
/// received frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TelemetryMessage {
    /// Node identity, exactly 5 wire bytes.
    pub name: NodeName,
    /// Frame counter, wraps modulo 256. Owned by the exchange driver.
    pub sequence: u8,
    /// Reading in degrees Celsius. Signed in principle; see the codec for
    /// the unsigned wire representation.
    pub temperature: f64,
}

impl TelemetryMessage {
    /// Assemble a record from its fields.
    #[inline]
    pub const fn new(name: NodeName, sequence: u8, temperature: f64) -> Self {
        Self {
            name,
            sequence,
            temperature,
        }
    }
}

impl fmt::Display for TelemetryMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (#{}) {:.1} C",
            self.name, self.sequence, self.temperature
        )
    }
}
