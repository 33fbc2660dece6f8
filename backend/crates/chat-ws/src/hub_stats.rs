use serde::Serialize;

/// Point-in-time counters for the broadcast hub
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HubStats {
    pub active_subscriptions: usize,
    /// Every publish call, including overflowed ones
    pub published: u64,
    /// Publishes accepted onto the live path
    pub delivered: u64,
    pub overflowed: u64,
    pub evicted: u64,
    /// Largest backlog among active subscriptions
    pub pending: usize,
}
