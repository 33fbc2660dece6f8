use metrics::{counter, gauge, histogram};

/// Metrics collector for hub and WebSocket operations
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "chat_ws" }
    }

    /// Record new WebSocket connection established
    pub fn connection_established(&self) {
        counter!(format!("{}.connections.established", self.prefix)).increment(1);
        gauge!(format!("{}.connections.active", self.prefix)).increment(1.0);
    }

    /// Record WebSocket connection closed
    pub fn connection_closed(&self, reason: &str) {
        counter!(format!("{}.connections.closed", self.prefix)).increment(1);
        counter!(format!("{}.connections.closed.{}", self.prefix, reason)).increment(1);
        gauge!(format!("{}.connections.active", self.prefix)).decrement(1.0);
    }

    /// Record inbound frame accepted
    pub fn frame_received(&self, frame_type: &str) {
        counter!(format!("{}.frames.received", self.prefix)).increment(1);
        counter!(format!("{}.frames.received.{}", self.prefix, frame_type)).increment(1);
    }

    /// Record inbound frame answered with an error frame
    pub fn frame_rejected(&self, reason: &str) {
        counter!(format!("{}.frames.rejected", self.prefix)).increment(1);
        counter!(format!("{}.frames.rejected.{}", self.prefix, reason)).increment(1);
    }

    pub fn message_published(&self, receivers: usize) {
        counter!(format!("{}.messages.published", self.prefix)).increment(1);
        histogram!(format!("{}.messages.receivers", self.prefix)).record(receivers as f64);
    }

    pub fn publish_overflowed(&self) {
        counter!(format!("{}.messages.overflowed", self.prefix)).increment(1);
    }

    pub fn subscription_opened(&self, active: usize) {
        counter!(format!("{}.subscriptions.opened", self.prefix)).increment(1);
        gauge!(format!("{}.subscriptions.active", self.prefix)).set(active as f64);
    }

    pub fn subscription_closed(&self, reason: &str, active: usize) {
        counter!(format!("{}.subscriptions.closed", self.prefix)).increment(1);
        counter!(format!("{}.subscriptions.closed.{}", self.prefix, reason)).increment(1);
        gauge!(format!("{}.subscriptions.active", self.prefix)).set(active as f64);
    }

    /// Record a slow subscriber removed under the evict policy
    pub fn subscriber_evicted(&self) {
        counter!(format!("{}.subscriptions.evicted", self.prefix)).increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
