//! # Configuration Management
//!
//! Centralized configuration for the capture codec.
//!
//! The codec itself needs no configuration to operate; this module covers the
//! tunable edges: buffer-pool prewarming, the reference codec's gzip level,
//! and logging.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()`
//! - Direct instantiation with defaults
//! - Environment-variable overrides via `from_env()`

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::error::{CodecError, Result};

/// Default gzip level for the reference codec (best speed).
pub const DEFAULT_GZIP_LEVEL: u32 = 1;

/// Upper bound on per-tier pool prewarming; beyond this the pool pins an
/// unreasonable amount of memory (4096 buffers on the 64KiB tier is ~256MB).
pub const MAX_POOL_PREWARM: usize = 4096;

/// Top-level codec configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CodecConfig {
    /// Buffer-pool configuration
    #[serde(default)]
    pub pool: PoolConfig,

    /// Reference-codec configuration
    #[serde(default)]
    pub reference: ReferenceConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CodecConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)
            .map_err(|e| CodecError::Config(format!("failed to open config file: {e}")))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| CodecError::Config(format!("failed to read config file: {e}")))?;

        Self::from_toml(&contents)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content)
            .map_err(|e| CodecError::Config(format!("failed to parse TOML: {e}")))
    }

    /// Load configuration from environment variables, starting from defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(prewarm) = std::env::var("CAPTURE_CODEC_POOL_PREWARM") {
            if let Ok(val) = prewarm.parse::<usize>() {
                config.pool.prewarm_per_tier = val;
            }
        }

        if let Ok(level) = std::env::var("CAPTURE_CODEC_GZIP_LEVEL") {
            if let Ok(val) = level.parse::<u32>() {
                config.reference.gzip_level = val;
            }
        }

        Ok(config)
    }

    /// Validate the configuration for common issues and misconfigurations.
    ///
    /// Returns a list of validation errors; empty means valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        errors.extend(self.pool.validate());
        errors.extend(self.reference.validate());
        errors.extend(self.logging.validate());
        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(CodecError::Config(format!(
                "configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}

/// Buffer-pool configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PoolConfig {
    /// Buffers pre-allocated per capacity tier at pool construction
    #[serde(default)]
    pub prewarm_per_tier: usize,
}

impl PoolConfig {
    /// Validate pool configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.prewarm_per_tier > MAX_POOL_PREWARM {
            errors.push(format!(
                "pool prewarm too large: {} buffers per tier (maximum: {MAX_POOL_PREWARM})",
                self.prewarm_per_tier
            ));
        }

        errors
    }
}

/// Reference-codec configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReferenceConfig {
    /// Gzip compression level (0-9); the default favors speed over ratio
    pub gzip_level: u32,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            gzip_level: DEFAULT_GZIP_LEVEL,
        }
    }
}

impl ReferenceConfig {
    /// Validate reference-codec configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.gzip_level > 9 {
            errors.push(format!(
                "invalid gzip level: {} (valid range: 0-9)",
                self.gzip_level
            ));
        }

        errors
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Application name for logs
    pub app_name: String,

    /// Log level
    #[serde(with = "log_level_serde")]
    pub log_level: Level,

    /// Whether to use JSON formatting for logs
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            app_name: String::from("capture-codec"),
            log_level: Level::INFO,
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.app_name.is_empty() {
            errors.push("application name cannot be empty".to_string());
        } else if self.app_name.len() > 64 {
            errors.push(format!(
                "application name too long: {} characters (maximum: 64)",
                self.app_name.len()
            ));
        }

        errors
    }
}

/// Helper module for tracing::Level serialization/deserialization
mod log_level_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;
    use tracing::Level;

    pub fn serialize<S>(level: &Level, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let level_str = match *level {
            Level::TRACE => "trace",
            Level::DEBUG => "debug",
            Level::INFO => "info",
            Level::WARN => "warn",
            Level::ERROR => "error",
        };
        level_str.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Level, D::Error>
    where
        D: Deserializer<'de>,
    {
        let level_str = String::deserialize(deserializer)?;
        Level::from_str(&level_str)
            .map_err(|_| serde::de::Error::custom(format!("invalid log level: {level_str}")))
    }
}
