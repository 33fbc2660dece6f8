use crate::broadcast_hub::HubCore;
use crate::mailbox::Mailbox;
use crate::{Delivery, SubscriptionId, SubscriptionState};

use std::sync::Arc;

use futures::Stream;

/// Read side of a hub subscription.
///
/// Yields every message published after it was created, in hub order, until
/// it is cancelled, dropped, or drained after the hub detached it. Dropping
/// the handle cancels the subscription.
pub struct Subscription {
    id: SubscriptionId,
    mailbox: Arc<Mailbox>,
    core: Arc<HubCore>,
}

impl Subscription {
    pub(crate) fn new(id: SubscriptionId, mailbox: Arc<Mailbox>, core: Arc<HubCore>) -> Self {
        Self { id, mailbox, core }
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    pub fn state(&self) -> SubscriptionState {
        self.mailbox.state()
    }

    /// Deliveries currently waiting to be consumed
    pub fn backlog(&self) -> usize {
        self.mailbox.backlog()
    }

    /// Wait for the next delivery. `None` once the subscription has ended.
    ///
    /// Cancel-safe: dropping the future never loses a delivery.
    pub async fn recv(&mut self) -> Option<Delivery> {
        loop {
            if let Some(delivery) = self.mailbox.pop() {
                return Some(delivery);
            }

            match self.mailbox.state() {
                SubscriptionState::Active => {}
                SubscriptionState::Draining => {
                    // The hub stops pushing before it flips the state, so one more
                    // pop is enough to see anything that raced with the check above.
                    if let Some(delivery) = self.mailbox.pop() {
                        return Some(delivery);
                    }
                    self.finish("drained");
                    return None;
                }
                SubscriptionState::Closed => return None,
            }

            self.mailbox.notified().await;
        }
    }

    /// Next delivery if one is already buffered
    pub fn try_recv(&mut self) -> Option<Delivery> {
        self.mailbox.pop()
    }

    /// Cancel the subscription and release its buffer. Idempotent.
    pub fn cancel(&mut self) {
        self.finish("cancelled");
    }

    /// Turn the subscription into a stream; dropping the stream cancels it.
    pub fn into_stream(self) -> impl Stream<Item = Delivery> + Send + 'static {
        futures::stream::unfold(self, |mut subscription| async move {
            subscription
                .recv()
                .await
                .map(|delivery| (delivery, subscription))
        })
    }

    fn finish(&mut self, reason: &'static str) {
        self.core.detach(self.id);
        if let Some(discarded) = self.mailbox.close() {
            self.core.subscription_closed(self.id, reason, discarded);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.finish("dropped");
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("state", &self.state())
            .field("backlog", &self.backlog())
            .finish()
    }
}
