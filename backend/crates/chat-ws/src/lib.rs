pub mod app_state;
pub mod broadcast_hub;
pub mod connection_config;
pub mod connection_id;
pub mod delivery;
pub mod error;
pub mod frame_parser;
pub mod hub_config;
pub mod hub_stats;
pub mod metrics;
pub mod publish_result;
pub mod shutdown_coordinator;
pub mod shutdown_guard;
pub mod subscription;
pub mod subscription_id;
pub mod subscription_state;
pub mod web_socket_connection;

mod mailbox;

pub use app_state::{AppState, handler};
pub use broadcast_hub::BroadcastHub;
pub use connection_config::ConnectionConfig;
pub use connection_id::ConnectionId;
pub use delivery::Delivery;
pub use error::{Result, WsError};
pub use frame_parser::{
    ChatFrame, INVALID_JSON_FORMAT, INVALID_MESSAGE_FORMAT, SERIALIZATION_FAILED, error_frame,
    parse_chat_frame,
};
pub use hub_config::HubConfig;
pub use hub_stats::HubStats;
pub use metrics::Metrics;
pub use publish_result::PublishResult;
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
pub use subscription::Subscription;
pub use subscription_id::SubscriptionId;
pub use subscription_state::SubscriptionState;
pub use web_socket_connection::WebSocketConnection;

pub use chat_config::OverflowPolicy;

#[cfg(test)]
mod tests;
