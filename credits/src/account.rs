//! A user's mutable credit balance.

use serde::{Deserialize, Serialize};
use tally_types::{Credits, UserId};

/// A credit balance owned by a single user.
///
/// Initialized to zero at account creation and mutated only through signed
/// deltas. The balance may go negative — penalties are not clamped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditAccount {
    owner: UserId,
    balance: Credits,
}

impl CreditAccount {
    /// Open an account with a zero balance.
    pub fn open(owner: UserId) -> Self {
        Self {
            owner,
            balance: Credits::ZERO,
        }
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn balance(&self) -> Credits {
        self.balance
    }

    /// Apply a signed delta to the balance.
    pub fn apply(&mut self, delta: Credits) {
        if delta.is_zero() {
            return;
        }
        self.balance = self.balance.saturating_add(delta);
        tracing::debug!(
            owner = %self.owner,
            delta = %delta,
            balance = %self.balance,
            "credit delta applied"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_at_zero() {
        let account = CreditAccount::open(UserId::new(1));
        assert_eq!(account.balance(), Credits::ZERO);
    }

    #[test]
    fn applies_signed_deltas() {
        let mut account = CreditAccount::open(UserId::new(1));
        account.apply(Credits::whole(5));
        account.apply(Credits::from_tenths(25));
        assert_eq!(account.balance(), Credits::from_tenths(75));
        account.apply(-Credits::whole(10));
        assert_eq!(account.balance(), Credits::from_tenths(-25));
    }

    #[test]
    fn zero_delta_is_a_no_op() {
        let mut account = CreditAccount::open(UserId::new(1));
        account.apply(Credits::ZERO);
        assert_eq!(account.balance(), Credits::ZERO);
    }
}
