//! Reference codec: JSON serialization followed by gzip compression.
//!
//! Kept alongside the binary codec for size/latency comparison. Unlike the
//! binary layout it round-trips every field at full width: integers are
//! carried textually and the timestamp travels as RFC 3339, so nothing wraps
//! at 16 bits. Compression runs at a speed-favoring level by default.
//!
//! The JSON field mapping is an explicit wire schema rather than a derive on
//! the public types, so the encoded field names are pinned independently of
//! any refactor of [`CapturePacket`].

use std::io::{Read, Write};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{DateTime, Utc};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::{Deserialize, Serialize};

use crate::core::packet::{CaptureInfo, CapturePacket};
use crate::error::{CodecError, Result};

/// Wire schema for the JSON encoding. Field names match the original capture
/// tooling; the payload travels base64-encoded since JSON needs a textual
/// carrier for raw bytes.
#[derive(Serialize, Deserialize)]
struct WireRecord {
    ts: DateTime<Utc>,
    cap_len: u32,
    len: u32,
    iface_idx: u32,
    id: u32,
    data: String,
}

impl From<&CapturePacket> for WireRecord {
    fn from(packet: &CapturePacket) -> Self {
        Self {
            ts: packet.info.timestamp,
            cap_len: packet.info.capture_length,
            len: packet.info.length,
            iface_idx: packet.info.interface_index,
            id: packet.id,
            data: BASE64.encode(&packet.data),
        }
    }
}

impl WireRecord {
    fn into_packet(self) -> Result<CapturePacket> {
        let data = BASE64
            .decode(&self.data)
            .map_err(|e| CodecError::MalformedText(format!("invalid payload encoding: {e}")))?;
        Ok(CapturePacket {
            info: CaptureInfo {
                timestamp: self.ts,
                capture_length: self.cap_len,
                length: self.len,
                interface_index: self.iface_idx,
            },
            id: self.id,
            data,
        })
    }
}

/// JSON + gzip codec.
///
/// Synchronous and reentrant like the binary codec; no buffer pooling, every
/// call allocates fresh.
#[derive(Debug, Clone, Copy)]
pub struct JsonGzipCodec {
    level: Compression,
}

impl JsonGzipCodec {
    /// Codec with the default speed-favoring compression level.
    pub fn new() -> Self {
        Self {
            level: Compression::fast(),
        }
    }

    /// Codec with an explicit gzip level (0-9). Levels are validated at the
    /// configuration layer; out-of-range values are clamped by flate2.
    pub fn with_level(level: u32) -> Self {
        Self {
            level: Compression::new(level),
        }
    }

    /// Codec from configuration.
    pub fn from_config(config: &crate::config::ReferenceConfig) -> Self {
        Self::with_level(config.gzip_level)
    }

    /// Serialize to JSON, then gzip-compress.
    pub fn encode(&self, packet: &CapturePacket) -> Result<Vec<u8>> {
        let json = serde_json::to_vec(&WireRecord::from(packet))
            .map_err(|e| CodecError::MalformedText(e.to_string()))?;

        let mut encoder = GzEncoder::new(Vec::with_capacity(json.len() / 2 + 32), self.level);
        encoder.write_all(&json)?;
        Ok(encoder.finish()?)
    }

    /// Decompress, then parse. Malformed gzip and malformed record text are
    /// reported as distinct errors; there is no partial recovery.
    pub fn decode(&self, input: &[u8]) -> Result<CapturePacket> {
        let mut json = Vec::new();
        GzDecoder::new(input)
            .read_to_end(&mut json)
            .map_err(CodecError::MalformedGzip)?;

        let record: WireRecord = serde_json::from_slice(&json)
            .map_err(|e| CodecError::MalformedText(e.to_string()))?;
        record.into_packet()
    }
}

impl Default for JsonGzipCodec {
    fn default() -> Self {
        Self::new()
    }
}
