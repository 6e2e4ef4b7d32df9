//! Ledger error type.

use tally_types::{EvidenceId, ItemId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("unknown news item: {0}")]
    UnknownItem(ItemId),

    #[error("unknown evidence: {0}")]
    UnknownEvidence(EvidenceId),

    #[error("changing a recorded vote on {0} requires explicit acknowledgment")]
    RevoteNotAcknowledged(ItemId),

    #[error("evidence authors cannot like or respond to their own evidence")]
    EvidenceAuthorInteraction,
}
