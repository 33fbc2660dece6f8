use crate::mailbox::Mailbox;
use crate::{
    Delivery, HubConfig, HubStats, Metrics, OverflowPolicy, PublishResult, Subscription,
    SubscriptionId,
};

use chat_core::Message;
use chat_db::MessageStore;

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, info, warn};
use parking_lot::Mutex;

/// Fans published messages out to every active subscription.
///
/// Every publish goes through one lock that assigns the sequence number,
/// appends to history and pushes into the subscriber mailboxes, so all
/// subscribers observe the same total order. Publishing never waits on a
/// consumer: mailboxes are bounded and overflow is resolved according to
/// the configured [`OverflowPolicy`].
pub struct BroadcastHub {
    core: Arc<HubCore>,
}

pub(crate) struct HubCore {
    inner: Mutex<HubInner>,
    store: MessageStore,
    config: HubConfig,
    metrics: Metrics,
}

struct HubInner {
    /// Last sequence number handed out
    sequence: u64,
    subscribers: HashMap<SubscriptionId, Arc<Mailbox>>,
    shutting_down: bool,
    delivered: u64,
    overflowed: u64,
    evicted: u64,
}

impl BroadcastHub {
    pub fn new(store: MessageStore, config: HubConfig, metrics: Metrics) -> Self {
        info!(
            "Broadcast hub initialized (max buffer size {}, overflow policy {})",
            config.max_buffer_size, config.overflow_policy
        );

        Self {
            core: Arc::new(HubCore {
                inner: Mutex::new(HubInner {
                    sequence: 0,
                    subscribers: HashMap::new(),
                    shutting_down: false,
                    delivered: 0,
                    overflowed: 0,
                    evicted: 0,
                }),
                store,
                config,
                metrics,
            }),
        }
    }

    /// Record the message in history and fan it out to live subscribers
    pub fn publish(&self, message: Message) -> PublishResult {
        let message = Arc::new(message);
        let core = &self.core;
        let capacity = core.config.max_buffer_size;

        let mut inner = core.inner.lock();
        inner.sequence += 1;
        let sequence = inner.sequence;

        // History is written before fan-out so overflow never loses a message
        core.store.append(Arc::clone(&message));

        let delivery = Delivery {
            sequence,
            message: Arc::clone(&message),
        };

        match core.config.overflow_policy {
            OverflowPolicy::Shared => {
                let pending = inner.max_backlog();
                if pending >= capacity {
                    inner.overflowed += 1;
                    drop(inner);

                    warn!(
                        "Failed to broadcast message {} from sender {}: live buffer full ({}/{} pending)",
                        sequence,
                        message.sender(),
                        pending,
                        capacity
                    );
                    core.metrics.publish_overflowed();
                    return PublishResult::Overflow { sequence };
                }

                for mailbox in inner.subscribers.values() {
                    // Capacity was checked above and consumers only shrink backlogs
                    let _ = mailbox.push(delivery.clone());
                }

                inner.delivered += 1;
                let receivers = inner.subscribers.len();
                drop(inner);

                debug!(
                    "Message {} published from sender {} ({} receivers)",
                    sequence,
                    message.sender(),
                    receivers
                );
                core.metrics.message_published(receivers);
                PublishResult::Success {
                    sequence,
                    receivers,
                }
            }
            OverflowPolicy::EvictSlow => {
                let full: Vec<SubscriptionId> = inner
                    .subscribers
                    .iter()
                    .filter_map(|(id, mailbox)| mailbox.push(delivery.clone()).err().map(|_| *id))
                    .collect();

                for id in &full {
                    if let Some(mailbox) = inner.subscribers.remove(id) {
                        mailbox.begin_draining();
                    }
                }

                inner.evicted += full.len() as u64;
                inner.delivered += 1;
                let receivers = inner.subscribers.len();
                drop(inner);

                for id in &full {
                    warn!(
                        "Evicted subscription {}: backlog reached {} pending deliveries",
                        id, capacity
                    );
                    core.metrics.subscriber_evicted();
                }
                debug!(
                    "Message {} published from sender {} ({} receivers)",
                    sequence,
                    message.sender(),
                    receivers
                );
                core.metrics.message_published(receivers);
                PublishResult::Success {
                    sequence,
                    receivers,
                }
            }
        }
    }

    /// Register a new subscription that starts after the latest publish
    pub fn subscribe(&self) -> Subscription {
        let id = SubscriptionId::new();
        let mailbox = Arc::new(Mailbox::new(self.core.config.max_buffer_size));

        let mut inner = self.core.inner.lock();
        if inner.shutting_down {
            drop(inner);
            mailbox.begin_draining();
            debug!("Subscription {} created after shutdown, ending immediately", id);
            return Subscription::new(id, mailbox, Arc::clone(&self.core));
        }

        inner.subscribers.insert(id, Arc::clone(&mailbox));
        let total = inner.subscribers.len();
        let after = inner.sequence;
        drop(inner);

        debug!(
            "Subscription {} registered after message {} ({} active)",
            id, after, total
        );
        self.core.metrics.subscription_opened(total);

        Subscription::new(id, mailbox, Arc::clone(&self.core))
    }

    /// Cancel a subscription by id, releasing its buffer. Idempotent.
    pub fn cancel(&self, id: SubscriptionId) {
        if let Some(mailbox) = self.core.detach(id)
            && let Some(discarded) = mailbox.close()
        {
            self.core.subscription_closed(id, "cancelled", discarded);
        }
    }

    /// Detach every subscription so consumers drain their backlog and finish
    pub fn close_all(&self) {
        let detached: Vec<Arc<Mailbox>> = {
            let mut inner = self.core.inner.lock();
            inner.shutting_down = true;
            inner.subscribers.drain().map(|(_, mailbox)| mailbox).collect()
        };

        for mailbox in &detached {
            mailbox.begin_draining();
        }

        info!(
            "Broadcast hub closed, {} subscriptions draining",
            detached.len()
        );
    }

    /// Full history, or the `limit` most recent messages
    pub fn history(&self, limit: Option<usize>) -> Vec<Arc<Message>> {
        match limit {
            Some(limit) => self.core.store.find_last(limit),
            None => self.core.store.find_all(),
        }
    }

    pub fn store(&self) -> &MessageStore {
        &self.core.store
    }

    pub fn config(&self) -> &HubConfig {
        &self.core.config
    }

    pub fn subscriber_count(&self) -> usize {
        self.core.inner.lock().subscribers.len()
    }

    pub fn stats(&self) -> HubStats {
        let inner = self.core.inner.lock();
        HubStats {
            active_subscriptions: inner.subscribers.len(),
            published: inner.sequence,
            delivered: inner.delivered,
            overflowed: inner.overflowed,
            evicted: inner.evicted,
            pending: inner.max_backlog(),
        }
    }
}

impl Clone for BroadcastHub {
    fn clone(&self) -> Self {
        Self {
            core: Arc::clone(&self.core),
        }
    }
}

impl HubCore {
    /// Remove a subscription from the active table
    pub(crate) fn detach(&self, id: SubscriptionId) -> Option<Arc<Mailbox>> {
        self.inner.lock().subscribers.remove(&id)
    }

    pub(crate) fn subscription_closed(&self, id: SubscriptionId, reason: &str, discarded: usize) {
        debug!(
            "Subscription {} closed ({}), {} pending deliveries released",
            id, reason, discarded
        );
        let active = self.inner.lock().subscribers.len();
        self.metrics.subscription_closed(reason, active);
    }
}

impl HubInner {
    fn max_backlog(&self) -> usize {
        self.subscribers
            .values()
            .map(|mailbox| mailbox.backlog())
            .max()
            .unwrap_or(0)
    }
}
