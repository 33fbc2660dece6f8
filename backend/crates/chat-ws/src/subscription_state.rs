/// Lifecycle of a subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SubscriptionState {
    /// Registered with the hub and receiving new publishes
    Active = 0,
    /// Detached from the hub; buffered deliveries can still be drained
    Draining = 1,
    /// Buffer released, sequence finished
    Closed = 2,
}

impl SubscriptionState {
    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Active,
            1 => Self::Draining,
            _ => Self::Closed,
        }
    }
}

impl std::fmt::Display for SubscriptionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Draining => write!(f, "draining"),
            Self::Closed => write!(f, "closed"),
        }
    }
}
