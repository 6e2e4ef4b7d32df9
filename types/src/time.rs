//! Timestamp type used throughout the feed.
//!
//! Timestamps are Unix epoch seconds (UTC). Day bucketing for the vote
//! time series uses the UTC date portion only.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// A Unix timestamp in seconds since epoch (UTC).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The epoch (time zero).
    pub const EPOCH: Self = Self(0);

    pub fn new(secs: u64) -> Self {
        Self(secs)
    }

    /// Get the current system time as a `Timestamp`.
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before Unix epoch")
            .as_secs();
        Self(secs)
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    /// Seconds elapsed since this timestamp (relative to `now`).
    pub fn elapsed_since(&self, now: Timestamp) -> u64 {
        now.0.saturating_sub(self.0)
    }

    /// Whether this timestamp + duration has passed relative to `now`.
    pub fn has_expired(&self, duration_secs: u64, now: Timestamp) -> bool {
        now.0 >= self.0.saturating_add(duration_secs)
    }

    /// Number of whole UTC days since the epoch.
    pub fn day_index(&self) -> u64 {
        self.0 / 86_400
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_index_buckets_by_utc_day() {
        assert_eq!(Timestamp::new(0).day_index(), 0);
        assert_eq!(Timestamp::new(86_399).day_index(), 0);
        assert_eq!(Timestamp::new(86_400).day_index(), 1);
    }

    #[test]
    fn has_expired_saturates() {
        let t = Timestamp::new(u64::MAX - 10);
        assert!(!t.has_expired(100, Timestamp::new(u64::MAX - 5)));
    }
}
