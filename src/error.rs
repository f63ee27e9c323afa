//! # Error Types
//!
//! Error handling for the capture codec.
//!
//! The binary codec has exactly one recoverable failure: decode input shorter
//! than the fixed header. Sink write errors from `encode_to` are propagated
//! unmodified with no retry. The reference codec surfaces its two decode
//! failure modes distinctly: a malformed/truncated gzip stream versus
//! structurally invalid record text.
//!
//! Out-of-range header fields are *not* errors: the binary encoder truncates
//! them modulo 65536 by documented contract.

use std::io;
use thiserror::Error;

use crate::core::packet::CAPTURE_META_LEN;

/// Primary error type for all codec operations
#[derive(Error, Debug)]
pub enum CodecError {
    /// Sink write failure from `encode_to`, passed through verbatim
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Decode input shorter than the fixed header
    #[error("packet meta truncated: got {0} bytes, need {CAPTURE_META_LEN}")]
    TruncatedMeta(usize),

    /// Reference codec: gzip stream could not be decompressed
    #[error("malformed compressed stream: {0}")]
    MalformedGzip(#[source] io::Error),

    /// Reference codec: decompressed text is not a valid record
    #[error("malformed record text: {0}")]
    MalformedText(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Type alias for Results using CodecError
pub type Result<T> = std::result::Result<T, CodecError>;
