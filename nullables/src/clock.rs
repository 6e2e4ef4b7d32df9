//! Nullable clock — deterministic time for testing.

use std::cell::Cell;
use tally_types::Timestamp;

const SECS_PER_DAY: u64 = 86_400;

/// A deterministic clock for feed and simulator tests.
///
/// Time only moves when told to, so tests can pin the "just in" window or
/// spread simulated votes across calendar days without sleeping.
pub struct NullClock {
    current: Cell<Timestamp>,
}

impl NullClock {
    pub fn new(initial_secs: u64) -> Self {
        Self::at(Timestamp::new(initial_secs))
    }

    /// Start the clock at a specific timestamp.
    pub fn at(start: Timestamp) -> Self {
        Self {
            current: Cell::new(start),
        }
    }

    /// The current time.
    pub fn now(&self) -> Timestamp {
        self.current.get()
    }

    /// Advance time by a number of seconds.
    pub fn advance(&self, secs: u64) {
        let now = self.current.get();
        self.current.set(Timestamp::new(now.as_secs() + secs));
    }

    /// Advance by whole UTC days, for tests that span the trend series'
    /// calendar-day buckets.
    pub fn advance_days(&self, days: u64) {
        self.advance(days * SECS_PER_DAY);
    }

    /// Set the time to a specific value.
    pub fn set(&self, secs: u64) {
        self.current.set(Timestamp::new(secs));
    }
}
