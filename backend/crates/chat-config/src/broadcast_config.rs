use crate::{ConfigError, ConfigErrorResult, OverflowPolicy};

use serde::Deserialize;

// Live-broadcast buffer constraints
pub const MIN_MAX_BUFFER_SIZE: usize = 1;
pub const MAX_MAX_BUFFER_SIZE: usize = 100_000;
pub const DEFAULT_MAX_BUFFER_SIZE: usize = 1000;

// SSE keep-alive constraints (seconds)
pub const MIN_SSE_KEEP_ALIVE_SECS: u64 = 1;
pub const MAX_SSE_KEEP_ALIVE_SECS: u64 = 300;
pub const DEFAULT_SSE_KEEP_ALIVE_SECS: u64 = 15;

/// Live fan-out settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BroadcastConfig {
    /// Pending deliveries a subscriber may hold before overflow handling kicks in
    pub max_buffer_size: usize,
    pub overflow_policy: OverflowPolicy,
    /// Interval between SSE keep-alive comments
    pub sse_keep_alive_secs: u64,
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self {
            max_buffer_size: DEFAULT_MAX_BUFFER_SIZE,
            overflow_policy: OverflowPolicy::default(),
            sse_keep_alive_secs: DEFAULT_SSE_KEEP_ALIVE_SECS,
        }
    }
}

impl BroadcastConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_buffer_size < MIN_MAX_BUFFER_SIZE || self.max_buffer_size > MAX_MAX_BUFFER_SIZE
        {
            return Err(ConfigError::broadcast(format!(
                "broadcast.max_buffer_size must be {}-{}, got {}",
                MIN_MAX_BUFFER_SIZE, MAX_MAX_BUFFER_SIZE, self.max_buffer_size
            )));
        }

        if self.sse_keep_alive_secs < MIN_SSE_KEEP_ALIVE_SECS
            || self.sse_keep_alive_secs > MAX_SSE_KEEP_ALIVE_SECS
        {
            return Err(ConfigError::broadcast(format!(
                "broadcast.sse_keep_alive_secs must be {}-{}, got {}",
                MIN_SSE_KEEP_ALIVE_SECS, MAX_SSE_KEEP_ALIVE_SECS, self.sse_keep_alive_secs
            )));
        }

        Ok(())
    }
}
