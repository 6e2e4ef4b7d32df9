//! Feature-unlock tiers derived from a credit balance.

use serde::{Deserialize, Serialize};
use tally_types::Credits;

/// Unlock tier thresholds, checked against the current balance on read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UnlockTier {
    /// Below every threshold.
    Member,
    /// Balance of at least 100 credits.
    Contributor,
    /// Balance of at least 500 credits.
    Guardian,
}

impl UnlockTier {
    pub const CONTRIBUTOR_THRESHOLD: Credits = Credits::whole(100);
    pub const GUARDIAN_THRESHOLD: Credits = Credits::whole(500);

    /// The tier a balance currently qualifies for.
    pub fn for_balance(balance: Credits) -> Self {
        if balance >= Self::GUARDIAN_THRESHOLD {
            UnlockTier::Guardian
        } else if balance >= Self::CONTRIBUTOR_THRESHOLD {
            UnlockTier::Contributor
        } else {
            UnlockTier::Member
        }
    }
}
