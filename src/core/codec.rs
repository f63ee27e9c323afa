//! Fixed-layout binary codec for [`CapturePacket`].
//!
//! ## Wire Format
//! 22-byte big-endian header followed immediately by the raw payload:
//!
//! ```text
//! offset  size  field
//!      0     8  timestamp, microseconds since epoch
//!      8     2  capture_length (mod 65536)
//!     10     2  reserved, zero-filled
//!     12     2  length (mod 65536)
//!     14     2  reserved, zero-filled
//!     16     2  interface_index (mod 65536)
//!     18     2  id (mod 65536)
//!     20     2  reserved, zero-filled
//!     22..   N  payload
//! ```
//!
//! The reserved gaps are part of the wire contract and must not be compacted.
//! The 16-bit fields silently wrap modulo 65536 on encode; callers needing
//! full-range values use the reference codec instead.
//!
//! Decode never uses `capture_length`/`length` to bound the payload: the
//! payload is always exactly the bytes trailing the header.

use std::io::Write;

use bytes::Bytes;
use chrono::DateTime;
use tracing::debug;

use crate::core::packet::{CaptureInfo, CapturePacket, CAPTURE_META_LEN};
use crate::error::{CodecError, Result};
use crate::utils::buffer_pool::{PacketBuf, PacketBufferPool};

/// Stateless fixed-layout codec. All operations are synchronous, CPU-bound,
/// and reentrant; independent packets may be encoded/decoded concurrently
/// without coordination.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryCodec;

fn be_u16(input: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes([input[offset], input[offset + 1]])
}

impl BinaryCodec {
    /// Serialize the header into a fixed 22-byte block, reserved gaps
    /// zero-filled.
    fn write_meta(packet: &CapturePacket, meta: &mut [u8; CAPTURE_META_LEN]) {
        let micros = packet.info.timestamp.timestamp_micros() as u64;
        meta[0..8].copy_from_slice(&micros.to_be_bytes());
        meta[8..10].copy_from_slice(&(packet.info.capture_length as u16).to_be_bytes());
        meta[12..14].copy_from_slice(&(packet.info.length as u16).to_be_bytes());
        meta[16..18].copy_from_slice(&(packet.info.interface_index as u16).to_be_bytes());
        meta[18..20].copy_from_slice(&(packet.id as u16).to_be_bytes());
    }

    /// Encode into a fresh buffer of exactly `22 + data.len()` bytes.
    pub fn encode(&self, packet: &CapturePacket) -> Bytes {
        let mut out = Vec::with_capacity(CAPTURE_META_LEN + packet.data.len());
        let mut meta = [0u8; CAPTURE_META_LEN];
        Self::write_meta(packet, &mut meta);
        out.extend_from_slice(&meta);
        out.extend_from_slice(&packet.data);
        Bytes::from(out)
    }

    /// Encode into a pooled buffer, falling back to a direct allocation when
    /// the packet exceeds the largest tier. The buffer returns to the pool
    /// when the result is dropped.
    pub fn encode_pooled(&self, packet: &CapturePacket, pool: &PacketBufferPool) -> PacketBuf {
        let mut buf = pool.acquire_or_alloc(CAPTURE_META_LEN + packet.data.len());
        let mut meta = [0u8; CAPTURE_META_LEN];
        Self::write_meta(packet, &mut meta);
        buf.extend_from_slice(&meta);
        buf.extend_from_slice(&packet.data);
        buf
    }

    /// Write header then payload as two sequential writes into `sink`,
    /// returning the total byte count.
    ///
    /// Not atomic: a sink shared by concurrent encoders must be serialized by
    /// the caller, or interleaved output results. Sink errors propagate
    /// verbatim with no retry.
    pub fn encode_to<W: Write>(&self, packet: &CapturePacket, sink: &mut W) -> Result<usize> {
        let mut meta = [0u8; CAPTURE_META_LEN];
        Self::write_meta(packet, &mut meta);
        sink.write_all(&meta)?;
        sink.write_all(&packet.data)?;
        Ok(CAPTURE_META_LEN + packet.data.len())
    }

    /// Parse only the 22-byte header; the returned packet has empty `data`.
    ///
    /// Fails with [`CodecError::TruncatedMeta`] when the input is shorter
    /// than the header. Reserved offsets are ignored.
    pub fn decode_meta(&self, input: &[u8]) -> Result<CapturePacket> {
        if input.len() < CAPTURE_META_LEN {
            debug!(got = input.len(), "decode input shorter than packet meta");
            return Err(CodecError::TruncatedMeta(input.len()));
        }

        let micros = u64::from_be_bytes([
            input[0], input[1], input[2], input[3], input[4], input[5], input[6], input[7],
        ]);
        // chrono's representable range is narrower than i64 microseconds;
        // timestamps outside it are a caller error and clamp to the epoch.
        let timestamp =
            DateTime::from_timestamp_micros(micros as i64).unwrap_or(DateTime::UNIX_EPOCH);

        Ok(CapturePacket {
            info: CaptureInfo {
                timestamp,
                capture_length: u32::from(be_u16(input, 8)),
                length: u32::from(be_u16(input, 12)),
                interface_index: u32::from(be_u16(input, 16)),
            },
            id: u32::from(be_u16(input, 18)),
            data: Vec::new(),
        })
    }

    /// Decode header and payload. The payload is a fresh copy of everything
    /// after the header; the decoded length fields never bound it.
    pub fn decode(&self, input: &[u8]) -> Result<CapturePacket> {
        let mut packet = self.decode_meta(input)?;
        packet.data = input[CAPTURE_META_LEN..].to_vec();
        Ok(packet)
    }

    /// Decode header and payload, copying the payload into a pooled buffer.
    ///
    /// The payload bytes live in the returned buffer; the packet's own `data`
    /// field stays empty. The buffer returns to the pool when dropped, so it
    /// must be kept alive as long as the payload is needed.
    pub fn decode_pooled(
        &self,
        input: &[u8],
        pool: &PacketBufferPool,
    ) -> Result<(CapturePacket, PacketBuf)> {
        let packet = self.decode_meta(input)?;
        let payload = &input[CAPTURE_META_LEN..];
        let mut buf = pool.acquire_or_alloc(payload.len());
        buf.extend_from_slice(payload);
        Ok((packet, buf))
    }
}
