//! # capture-codec
//!
//! Compact binary codec for captured network-packet records.
//!
//! A [`CapturePacket`] (capture metadata plus raw payload) is serialized to a
//! fixed-layout byte stream: a 22-byte big-endian header followed by the raw
//! payload. For high-frequency encode/decode cycles, pooled entry points draw
//! their backing buffers from a size-tiered [`PacketBufferPool`] instead of
//! allocating fresh.
//!
//! ## Components
//! - **Binary codec**: [`BinaryCodec`] with `encode`, `encode_to`, `decode`,
//!   `decode_meta` and pooled variants
//! - **Buffer pool**: [`PacketBufferPool`] with four fixed capacity tiers and
//!   scoped release guards
//! - **Reference codec**: [`JsonGzipCodec`], JSON + gzip, used for
//!   size/latency comparison; round-trips full-width fields
//!
//! ## Wire Format
//! ```text
//! [Timestamp µs(8)] [CapLen(2)] [rsvd(2)] [Len(2)] [rsvd(2)] [Iface(2)] [Id(2)] [rsvd(2)] [Payload(N)]
//! ```
//!
//! Header fields above 65535 wrap modulo 65536 on encode. Callers that need
//! full-range values must use the reference codec.
//!
//! ## Example
//! ```rust
//! use capture_codec::{BinaryCodec, CapturePacket, PacketBufferPool};
//!
//! let packet = CapturePacket::default();
//! let bytes = BinaryCodec.encode(&packet);
//! let decoded = BinaryCodec.decode(&bytes).expect("header present");
//! assert_eq!(decoded, packet);
//!
//! let pool = PacketBufferPool::new();
//! let pooled = BinaryCodec.encode_pooled(&packet, &pool);
//! assert_eq!(&pooled[..], &bytes[..]);
//! // buffer returns to the pool when `pooled` drops
//! ```

#![warn(clippy::unwrap_used, clippy::expect_used)]

pub mod config;
pub mod core;
pub mod error;
pub mod utils;

pub use crate::config::CodecConfig;
pub use crate::core::codec::BinaryCodec;
pub use crate::core::packet::{CaptureInfo, CapturePacket, CAPTURE_META_LEN};
pub use crate::core::reference::JsonGzipCodec;
pub use crate::error::{CodecError, Result};
pub use crate::utils::buffer_pool::{PacketBuf, PacketBufferPool, PooledBuffer, Tier};
