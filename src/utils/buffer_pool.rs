//! # Buffer Pool
//!
//! Size-tiered object pool for packet encode/decode buffers, to avoid
//! repeated heap allocation when payload sizes cluster around a few common
//! sizes (SYN-sized, ~1KB, ~8KB, jumbo).
//!
//! A pool is an explicit, constructible object injected into codec call
//! sites; there is no process-global state. Each capacity tier keeps its own
//! free list; `acquire` picks the smallest tier that fits the request and
//! hands back the buffer together with a scoped release guard, so the buffer
//! returns to its tier on every exit path.
//!
//! Buffers are recycled, not zeroed, between uses. The codec overwrites the
//! full header region before exposing a buffer, so stale bytes never leak
//! into emitted records.
//!
//! ## Usage
//! ```rust
//! use capture_codec::utils::buffer_pool::PacketBufferPool;
//!
//! let pool = PacketBufferPool::new();
//! let mut buf = pool.acquire(256).expect("fits the 1KB tier");
//! buf.extend_from_slice(b"payload");
//! // Buffer returns to its tier on drop
//! ```

use std::sync::{Arc, Mutex};

use tracing::trace;

use crate::core::packet::CAPTURE_META_LEN;
use crate::utils::metrics::CodecMetrics;

/// One fixed buffer-capacity class.
///
/// Capacities are `CAPTURE_META_LEN` plus the payload sizes the original
/// capture workloads cluster around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Header + 128 bytes (SYN-sized packets)
    Small,
    /// Header + 1 KiB
    Mid,
    /// Header + 8 KiB
    Large,
    /// Header + 64 KiB
    XLarge,
}

impl Tier {
    /// All tiers in ascending capacity order.
    pub const ALL: [Tier; 4] = [Tier::Small, Tier::Mid, Tier::Large, Tier::XLarge];

    /// Payload bytes this tier accommodates beyond the fixed header.
    pub fn payload_capacity(self) -> usize {
        match self {
            Tier::Small => 128,
            Tier::Mid => 1024,
            Tier::Large => 8192,
            Tier::XLarge => 65536,
        }
    }

    /// Total physical capacity of buffers in this tier.
    pub fn capacity(self) -> usize {
        CAPTURE_META_LEN + self.payload_capacity()
    }

    /// Smallest tier whose capacity covers `required` total bytes, or `None`
    /// if the request exceeds the largest tier.
    pub fn for_size(required: usize) -> Option<Tier> {
        Tier::ALL.into_iter().find(|t| required <= t.capacity())
    }

    fn index(self) -> usize {
        match self {
            Tier::Small => 0,
            Tier::Mid => 1,
            Tier::Large => 2,
            Tier::XLarge => 3,
        }
    }
}

type Shelf = Arc<Mutex<Vec<Vec<u8>>>>;

/// A pooled buffer that returns itself to its tier when dropped.
///
/// Dropping the guard is the release: it happens exactly once, even on early
/// error returns, and hands the exact physical buffer back for reuse.
pub struct PooledBuffer {
    buffer: Vec<u8>,
    shelf: Shelf,
    tier: Tier,
}

impl PooledBuffer {
    /// The tier this buffer was drawn from.
    pub fn tier(&self) -> Tier {
        self.tier
    }
}

impl Drop for PooledBuffer {
    fn drop(&mut self) {
        // Clear length but keep capacity; contents are not zeroed.
        self.buffer.clear();
        if let Ok(mut free) = self.shelf.lock() {
            free.push(std::mem::take(&mut self.buffer));
        }
    }
}

impl std::ops::Deref for PooledBuffer {
    type Target = Vec<u8>;

    fn deref(&self) -> &Self::Target {
        &self.buffer
    }
}

impl std::ops::DerefMut for PooledBuffer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.buffer
    }
}

/// Backing storage for a codec result: pooled when a tier fits, plain heap
/// allocation when the request exceeds the largest tier.
pub enum PacketBuf {
    /// Drawn from a pool tier; released on drop.
    Pooled(PooledBuffer),
    /// Direct allocation, freed normally.
    Heap(Vec<u8>),
}

impl PacketBuf {
    /// Whether this buffer came from a pool tier.
    pub fn is_pooled(&self) -> bool {
        matches!(self, PacketBuf::Pooled(_))
    }
}

impl std::ops::Deref for PacketBuf {
    type Target = Vec<u8>;

    fn deref(&self) -> &Self::Target {
        match self {
            PacketBuf::Pooled(b) => b,
            PacketBuf::Heap(v) => v,
        }
    }
}

impl std::ops::DerefMut for PacketBuf {
    fn deref_mut(&mut self) -> &mut Self::Target {
        match self {
            PacketBuf::Pooled(b) => b,
            PacketBuf::Heap(v) => v,
        }
    }
}

/// Thread-safe, size-tiered buffer pool.
///
/// Concurrent `acquire`/release from any thread is safe; a buffer is never
/// held by two callers at once. Clones share the same free lists.
#[derive(Clone)]
pub struct PacketBufferPool {
    shelves: [Shelf; 4],
    metrics: Option<Arc<CodecMetrics>>,
}

impl PacketBufferPool {
    /// Create an empty pool; buffers are allocated lazily on first acquire
    /// per tier.
    pub fn new() -> Self {
        Self::with_prewarm(0)
    }

    /// Create a pool with `count` buffers pre-allocated per tier.
    pub fn with_prewarm(count: usize) -> Self {
        let shelves = Tier::ALL.map(|tier| {
            let mut free = Vec::with_capacity(count);
            for _ in 0..count {
                free.push(Vec::with_capacity(tier.capacity()));
            }
            Arc::new(Mutex::new(free))
        });
        Self {
            shelves,
            metrics: None,
        }
    }

    /// Attach a shared metrics collector recording acquire/fallback counts.
    pub fn with_metrics(mut self, metrics: Arc<CodecMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Create a pool from configuration.
    pub fn from_config(config: &crate::config::PoolConfig) -> Self {
        Self::with_prewarm(config.prewarm_per_tier)
    }

    /// Acquire a buffer with capacity for `required` total bytes (header +
    /// payload). Returns `None` when the request exceeds the largest tier;
    /// the caller must then fall back to a direct allocation.
    ///
    /// The returned buffer has logical length 0 and physical capacity of the
    /// chosen tier; grow it by appending.
    pub fn acquire(&self, required: usize) -> Option<PooledBuffer> {
        let tier = Tier::for_size(required)?;
        let shelf = &self.shelves[tier.index()];
        let buffer = match shelf.lock() {
            Ok(mut free) => free
                .pop()
                .unwrap_or_else(|| Vec::with_capacity(tier.capacity())),
            // Poisoned shelf: serve a fresh buffer rather than fail the caller.
            Err(_) => Vec::with_capacity(tier.capacity()),
        };
        if let Some(metrics) = &self.metrics {
            metrics.pool_acquire();
        }
        Some(PooledBuffer {
            buffer,
            shelf: Arc::clone(shelf),
            tier,
        })
    }

    /// Acquire from the pool, or fall back to a direct heap allocation when
    /// no tier fits. Used by the pooled codec entry points.
    pub fn acquire_or_alloc(&self, required: usize) -> PacketBuf {
        match self.acquire(required) {
            Some(buf) => PacketBuf::Pooled(buf),
            None => {
                trace!(required, "request exceeds largest tier, allocating directly");
                if let Some(metrics) = &self.metrics {
                    metrics.pool_fallback();
                }
                PacketBuf::Heap(Vec::with_capacity(required))
            }
        }
    }

    /// Number of free buffers currently shelved for `tier`.
    pub fn available(&self, tier: Tier) -> usize {
        self.shelves[tier.index()]
            .lock()
            .map(|free| free.len())
            .unwrap_or(0)
    }
}

impl Default for PacketBufferPool {
    fn default() -> Self {
        Self::new()
    }
}
