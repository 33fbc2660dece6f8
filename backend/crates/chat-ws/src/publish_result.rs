/// Outcome of a publish on the live broadcast path.
///
/// The message is in history either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishResult {
    /// Accepted for live delivery
    Success { sequence: u64, receivers: usize },
    /// Live buffer full; not delivered to any subscriber
    Overflow { sequence: u64 },
}

impl PublishResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn sequence(&self) -> u64 {
        match self {
            Self::Success { sequence, .. } | Self::Overflow { sequence } => *sequence,
        }
    }
}
