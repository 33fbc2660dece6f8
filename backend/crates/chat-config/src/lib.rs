mod broadcast_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod overflow_policy;
mod server_config;
mod websocket_config;

#[cfg(test)]
mod tests;

pub use broadcast_config::{
    BroadcastConfig, DEFAULT_MAX_BUFFER_SIZE, DEFAULT_SSE_KEEP_ALIVE_SECS, MAX_MAX_BUFFER_SIZE,
    MAX_SSE_KEEP_ALIVE_SECS, MIN_MAX_BUFFER_SIZE, MIN_SSE_KEEP_ALIVE_SECS,
};
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use overflow_policy::OverflowPolicy;
pub use server_config::ServerConfig;
pub use websocket_config::{
    DEFAULT_SEND_BUFFER_SIZE, MAX_SEND_BUFFER_SIZE, MIN_SEND_BUFFER_SIZE, WebSocketConfig,
};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const CONFIG_DIR_ENV: &str = "CHAT_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".chat";
const CONFIG_FILE_NAME: &str = "config.toml";
