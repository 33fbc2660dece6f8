use chat_config::{BroadcastConfig, DEFAULT_MAX_BUFFER_SIZE, OverflowPolicy};

/// Configuration for the broadcast hub
#[derive(Debug, Clone)]
pub struct HubConfig {
    /// Pending deliveries each subscription may hold (bounded to prevent memory exhaustion)
    pub max_buffer_size: usize,
    pub overflow_policy: OverflowPolicy,
}

impl HubConfig {
    pub fn with_capacity(max_buffer_size: usize) -> Self {
        Self {
            max_buffer_size,
            ..Default::default()
        }
    }
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            max_buffer_size: DEFAULT_MAX_BUFFER_SIZE,
            overflow_policy: OverflowPolicy::Shared,
        }
    }
}

impl From<&BroadcastConfig> for HubConfig {
    fn from(config: &BroadcastConfig) -> Self {
        Self {
            max_buffer_size: config.max_buffer_size,
            overflow_policy: config.overflow_policy,
        }
    }
}
