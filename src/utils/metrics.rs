//! Observability and Metrics
//!
//! Thread-safe counters for codec and buffer-pool activity, for callers that
//! want visibility into encode/decode volume and pool effectiveness under
//! sustained load.
//!
//! A `CodecMetrics` instance is shared explicitly (e.g. behind an `Arc`)
//! rather than living in global state, so test isolation and lifetime stay
//! in the caller's hands.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use tracing::info;

/// Metrics collector for codec operations
#[derive(Debug)]
pub struct CodecMetrics {
    /// Total packets encoded
    pub encodes_total: AtomicU64,
    /// Total bytes produced by encodes
    pub bytes_encoded: AtomicU64,
    /// Total packets decoded
    pub decodes_total: AtomicU64,
    /// Total bytes consumed by decodes
    pub bytes_decoded: AtomicU64,
    /// Decode rejections (truncated meta, malformed reference input)
    pub decode_errors: AtomicU64,
    /// Pool acquires served from a tier
    pub pool_acquires: AtomicU64,
    /// Pool acquires that fell back to a direct allocation
    pub pool_fallbacks: AtomicU64,
    /// Start time for uptime calculation
    start_time: Instant,
}

impl CodecMetrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self {
            encodes_total: AtomicU64::new(0),
            bytes_encoded: AtomicU64::new(0),
            decodes_total: AtomicU64::new(0),
            bytes_decoded: AtomicU64::new(0),
            decode_errors: AtomicU64::new(0),
            pool_acquires: AtomicU64::new(0),
            pool_fallbacks: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Record an encode producing `byte_count` bytes
    pub fn encode(&self, byte_count: u64) {
        self.encodes_total.fetch_add(1, Ordering::Relaxed);
        self.bytes_encoded.fetch_add(byte_count, Ordering::Relaxed);
    }

    /// Record a decode consuming `byte_count` bytes
    pub fn decode(&self, byte_count: u64) {
        self.decodes_total.fetch_add(1, Ordering::Relaxed);
        self.bytes_decoded.fetch_add(byte_count, Ordering::Relaxed);
    }

    /// Record a decode rejection
    pub fn decode_error(&self) {
        self.decode_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a pool acquire served from a tier
    pub fn pool_acquire(&self) {
        self.pool_acquires.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a pool acquire that fell back to direct allocation
    pub fn pool_fallback(&self) {
        self.pool_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            encodes_total: self.encodes_total.load(Ordering::Relaxed),
            bytes_encoded: self.bytes_encoded.load(Ordering::Relaxed),
            decodes_total: self.decodes_total.load(Ordering::Relaxed),
            bytes_decoded: self.bytes_decoded.load(Ordering::Relaxed),
            decode_errors: self.decode_errors.load(Ordering::Relaxed),
            pool_acquires: self.pool_acquires.load(Ordering::Relaxed),
            pool_fallbacks: self.pool_fallbacks.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }

    /// Log current metrics
    pub fn log_metrics(&self) {
        let snapshot = self.snapshot();
        info!(
            encodes_total = snapshot.encodes_total,
            bytes_encoded = snapshot.bytes_encoded,
            decodes_total = snapshot.decodes_total,
            bytes_decoded = snapshot.bytes_decoded,
            decode_errors = snapshot.decode_errors,
            pool_acquires = snapshot.pool_acquires,
            pool_fallbacks = snapshot.pool_fallbacks,
            uptime_seconds = snapshot.uptime_seconds,
            "Codec metrics snapshot"
        );
    }
}

impl Default for CodecMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of metrics at a point in time
#[derive(Debug, Clone)]
pub struct MetricsSnapshot {
    pub encodes_total: u64,
    pub bytes_encoded: u64,
    pub decodes_total: u64,
    pub bytes_decoded: u64,
    pub decode_errors: u64,
    pub pool_acquires: u64,
    pub pool_fallbacks: u64,
    pub uptime_seconds: u64,
}
