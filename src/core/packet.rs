//! Captured-packet data model.
//!
//! [`CapturePacket`] is a plain data holder: capture metadata plus the raw
//! payload bytes. It is constructed by the caller (typically from a capture
//! source), handed to the codec by reference, and never retained by the codec
//! past a single call. Equality is field-wise, byte-wise for the payload.

use chrono::{DateTime, Utc};

/// Fixed size of the encoded packet header in bytes.
///
/// Every binary encoding starts with exactly this many header bytes,
/// regardless of payload size.
pub const CAPTURE_META_LEN: usize = 22;

/// Metadata describing how a packet was captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureInfo {
    /// Time the packet was captured, microsecond resolution.
    pub timestamp: DateTime<Utc>,
    /// Number of bytes actually read off the wire.
    pub capture_length: u32,
    /// Size of the original on-wire packet. Conceptually `>= capture_length`,
    /// but never validated against it.
    pub length: u32,
    /// Index of the capturing interface.
    pub interface_index: u32,
}

impl Default for CaptureInfo {
    fn default() -> Self {
        Self {
            timestamp: DateTime::UNIX_EPOCH,
            capture_length: 0,
            length: 0,
            interface_index: 0,
        }
    }
}

/// One captured packet: capture metadata, an identifier, and the raw payload.
///
/// At decode time `data` holds whatever trails the fixed header; its length
/// is independent of the `length`/`capture_length` fields, which are
/// informational only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturePacket {
    /// Capture metadata.
    pub info: CaptureInfo,
    /// Unsigned packet identifier.
    pub id: u32,
    /// Raw payload bytes.
    pub data: Vec<u8>,
}
