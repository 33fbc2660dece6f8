use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// What the broadcast hub does when a subscriber's backlog reaches capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// One shared live buffer: the publish is dropped for every subscriber
    #[default]
    Shared,
    /// Per-subscriber buffers: the slow subscriber is evicted, the rest still receive
    EvictSlow,
}

impl FromStr for OverflowPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "shared" => Ok(Self::Shared),
            "evict_slow" => Ok(Self::EvictSlow),
            other => Err(format!("unknown overflow policy '{}'", other)),
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shared => write!(f, "shared"),
            Self::EvictSlow => write!(f, "evict_slow"),
        }
    }
}
