use crate::{Delivery, SubscriptionState};

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU8, Ordering};

use parking_lot::Mutex;
use tokio::sync::Notify;

/// Bounded pending buffer for one subscription.
///
/// Written only by the hub (while it holds its table lock), read only by the
/// owning `Subscription`. A single consumer means `notify_one`'s stored permit
/// covers the check-then-wait race in `Subscription::recv`.
pub(crate) struct Mailbox {
    queue: Mutex<VecDeque<Delivery>>,
    state: AtomicU8,
    notify: Notify,
    capacity: usize,
}

impl Mailbox {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            state: AtomicU8::new(SubscriptionState::Active as u8),
            notify: Notify::new(),
            capacity,
        }
    }

    /// Enqueue a delivery; hands it back if the buffer is at capacity
    pub(crate) fn push(&self, delivery: Delivery) -> Result<(), Delivery> {
        {
            let mut queue = self.queue.lock();
            if queue.len() >= self.capacity {
                return Err(delivery);
            }
            queue.push_back(delivery);
        }
        self.notify.notify_one();
        Ok(())
    }

    pub(crate) fn pop(&self) -> Option<Delivery> {
        self.queue.lock().pop_front()
    }

    pub(crate) fn backlog(&self) -> usize {
        self.queue.lock().len()
    }

    pub(crate) fn state(&self) -> SubscriptionState {
        SubscriptionState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// Active -> Draining. No-op in any other state.
    pub(crate) fn begin_draining(&self) {
        let _ = self.state.compare_exchange(
            SubscriptionState::Active as u8,
            SubscriptionState::Draining as u8,
            Ordering::AcqRel,
            Ordering::Acquire,
        );
        self.notify.notify_one();
    }

    /// Move to Closed and drop everything still buffered.
    ///
    /// Returns the number of discarded deliveries, or `None` if it was already closed.
    pub(crate) fn close(&self) -> Option<usize> {
        let previous = self
            .state
            .swap(SubscriptionState::Closed as u8, Ordering::AcqRel);
        if previous == SubscriptionState::Closed as u8 {
            return None;
        }

        let discarded = {
            let mut queue = self.queue.lock();
            let discarded = queue.len();
            queue.clear();
            queue.shrink_to_fit();
            discarded
        };
        self.notify.notify_one();
        Some(discarded)
    }

    pub(crate) async fn notified(&self) {
        self.notify.notified().await;
    }
}
