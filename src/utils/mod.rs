//! # Utility Modules
//!
//! Supporting utilities for buffer pooling, logging, and observability.
//!
//! ## Components
//! - **Buffer Pool**: size-tiered reusable buffers with scoped release guards
//! - **Logging**: structured logging configuration
//! - **Metrics**: thread-safe codec/pool counters

pub mod buffer_pool;
pub mod logging;
pub mod metrics;

// Re-export public types for advanced users
pub use buffer_pool::{PacketBuf, PacketBufferPool, PooledBuffer, Tier};
