//! Verdict ledger — the credit-scoring core of Truth Tally.
//!
//! The ledger owns every news item's vote set and derives, from the item's
//! authoritative verdict plus a voter's per-item history, the credit delta for
//! every vote, re-vote, evidence submission, and share. Credit deltas are
//! returned to the caller; the ledger never touches accounts itself.
//!
//! Every mutating call names the acting user explicitly — there is no ambient
//! session. Synthetic simulator votes go through dedicated entry points that
//! bypass voter state and credits entirely.

pub mod engine;
pub mod error;
pub mod item;
pub mod scoring;

pub use engine::{ItemDraft, ShareOutcome, VerdictLedger, VoteOutcome};
pub use error::LedgerError;
pub use item::{Evidence, NewsItem, Response, Vote, VoteSet, VoterState};
pub use scoring::RevoteAck;
