//! # Core Codec Components
//!
//! The packet data model and the two codecs over it.
//!
//! ## Components
//! - **Packet**: capture metadata + raw payload data model
//! - **Codec**: fixed-layout binary encode/decode with pooled entry points
//! - **Reference**: JSON + gzip codec used for comparison
//!
//! ## Wire Format
//! ```text
//! [Timestamp µs(8)] [CapLen(2)] [rsvd(2)] [Len(2)] [rsvd(2)] [Iface(2)] [Id(2)] [rsvd(2)] [Payload(N)]
//! ```
//!
//! The header is exactly 22 bytes; the three reserved gaps are zero-filled
//! on encode and ignored on decode, and are part of the wire contract.

pub mod codec;
pub mod packet;
pub mod reference;
