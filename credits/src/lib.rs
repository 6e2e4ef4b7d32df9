//! Credit account engine.
//!
//! A credit account is a signed balance attached to a user, mutated only by
//! applying deltas computed elsewhere (the verdict ledger). Unlock tiers are
//! pure read-side threshold checks, never account state.

pub mod account;
pub mod tier;

pub use account::CreditAccount;
pub use tier::UnlockTier;
