//! The verdict ledger engine — item arena plus all credited actions.

use crate::error::LedgerError;
use crate::item::{Evidence, NewsItem, Response, Vote, VoteSet, VoterState};
use crate::scoring::{
    self, RevoteAck, EVIDENCE_AWARD, FAKE_SUBMISSION_PENALTY, SHARE_AWARD,
};
use std::collections::HashMap;
use tally_types::{
    Category, Credits, EvidenceId, ItemId, ResponseId, Timestamp, UserId, Verdict, VerdictReport,
    VoteId,
};

/// The fields a submitter provides; everything else is ledger-assigned.
#[derive(Clone, Debug)]
pub struct ItemDraft {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub location: String,
    pub category: Category,
}

/// Result of a vote cast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoteOutcome {
    /// The vote was recorded; apply `delta` to the voter's account.
    Recorded { vote_id: VoteId, delta: Credits },
    /// The voter re-cast their existing choice — nothing changed, nothing
    /// scored, no confirmation needed.
    Unchanged,
}

impl VoteOutcome {
    /// Credit delta to apply to the voter's account.
    pub fn delta(&self) -> Credits {
        match self {
            VoteOutcome::Recorded { delta, .. } => *delta,
            VoteOutcome::Unchanged => Credits::ZERO,
        }
    }
}

/// Result of a share attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareOutcome {
    /// First share of a Real-verdict item.
    Credited(Credits),
    /// The share award was already claimed for this item.
    AlreadyShared,
    /// The item's verdict is not Real; sharing earns nothing.
    NotEligible,
}

impl ShareOutcome {
    pub fn delta(&self) -> Credits {
        match self {
            ShareOutcome::Credited(delta) => *delta,
            _ => Credits::ZERO,
        }
    }
}

/// Owns every news item and all per-voter voting state.
///
/// Items live in an id-keyed arena; display ordering (newest first) is kept
/// separately so re-votes and click increments are in-place updates, never
/// whole-collection rewrites.
#[derive(Clone, Debug, Default)]
pub struct VerdictLedger {
    items: HashMap<ItemId, NewsItem>,
    /// Feed order, most recent first.
    order: Vec<ItemId>,
    voter_states: HashMap<(ItemId, UserId), VoterState>,
    next_item: u64,
    next_vote: u64,
    next_evidence: u64,
    next_response: u64,
}

impl VerdictLedger {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Submission ──────────────────────────────────────────────────────

    /// Commit a user submission with its completed verification report.
    ///
    /// Returns the new item id and the credit delta for the *submitter*:
    /// −10 when the verdict resolved to Fake, zero otherwise. Callers must
    /// only invoke this once verification completed (success or fallback) —
    /// an abandoned submission commits nothing.
    pub fn submit(
        &mut self,
        draft: ItemDraft,
        report: VerdictReport,
        author: UserId,
        now: Timestamp,
    ) -> (ItemId, Credits) {
        let penalty = if report.verdict == Verdict::Fake {
            FAKE_SUBMISSION_PENALTY
        } else {
            Credits::ZERO
        };
        let id = self.insert_item(draft, report, Some(author), 1, now);
        tracing::info!(item = %id, author = %author, penalty = %penalty, "news item submitted");
        (id, penalty)
    }

    /// Insert a simulator-generated item. Not attributable, never credited.
    pub fn push_synthetic_item(
        &mut self,
        draft: ItemDraft,
        clicks: u64,
        now: Timestamp,
    ) -> ItemId {
        self.insert_item(draft, VerdictReport::unverified(), None, clicks, now)
    }

    fn insert_item(
        &mut self,
        draft: ItemDraft,
        report: VerdictReport,
        author: Option<UserId>,
        clicks: u64,
        now: Timestamp,
    ) -> ItemId {
        let id = ItemId::new(self.next_item);
        self.next_item += 1;
        let item = NewsItem {
            id,
            title: draft.title,
            description: draft.description,
            image_url: draft.image_url,
            location: draft.location,
            category: draft.category,
            report,
            clicks,
            created_at: now,
            votes: VoteSet::new(),
            evidence: Vec::new(),
            author,
        };
        self.items.insert(id, item);
        self.order.insert(0, id);
        id
    }

    // ── Voting ──────────────────────────────────────────────────────────

    /// Cast or change a vote.
    ///
    /// A re-cast of the identical choice is a no-op. Changing a recorded
    /// choice requires [`RevoteAck::Confirmed`]; without it the call fails
    /// and no state is touched. The returned delta applies to the voter's
    /// own account only — item authors are never affected by votes.
    pub fn cast_vote(
        &mut self,
        item_id: ItemId,
        voter: UserId,
        choice: bool,
        location: &str,
        ack: RevoteAck,
        now: Timestamp,
    ) -> Result<VoteOutcome, LedgerError> {
        let item = self
            .items
            .get_mut(&item_id)
            .ok_or(LedgerError::UnknownItem(item_id))?;
        let state = self.voter_states.entry((item_id, voter)).or_default();

        if let Some(prev) = state.choice {
            if prev == choice {
                return Ok(VoteOutcome::Unchanged);
            }
            if ack != RevoteAck::Confirmed {
                return Err(LedgerError::RevoteNotAcknowledged(item_id));
            }
        }

        let delta = scoring::vote_delta(item.report.verdict, state.choice, choice);

        if let Some(old_id) = state.vote_id {
            item.votes.remove(old_id);
        }
        let vote_id = VoteId::new(self.next_vote);
        self.next_vote += 1;
        item.votes.push(Vote {
            id: vote_id,
            voter: Some(voter),
            is_real: choice,
            location: location.to_string(),
            timestamp: now,
        });

        state.choice = Some(choice);
        state.vote_id = Some(vote_id);
        state.vote_count += 1;

        tracing::debug!(
            item = %item_id,
            voter = %voter,
            choice,
            casts = state.vote_count,
            delta = %delta,
            "vote recorded"
        );
        Ok(VoteOutcome::Recorded { vote_id, delta })
    }

    /// Append a synthetic simulator vote directly to an item's sequence.
    ///
    /// Bypasses voter state and credit logic entirely — these votes belong
    /// to no user and can be merged additively with real activity.
    pub fn push_synthetic_vote(
        &mut self,
        item_id: ItemId,
        is_real: bool,
        location: String,
        now: Timestamp,
    ) -> Result<VoteId, LedgerError> {
        let item = self
            .items
            .get_mut(&item_id)
            .ok_or(LedgerError::UnknownItem(item_id))?;
        let vote_id = VoteId::new(self.next_vote);
        self.next_vote += 1;
        item.votes.push(Vote {
            id: vote_id,
            voter: None,
            is_real,
            location,
            timestamp: now,
        });
        Ok(vote_id)
    }

    // ── Evidence ────────────────────────────────────────────────────────

    /// Attach evidence to an item. Awards a flat +15 to the submitter per
    /// submission, independent of the verdict and uncapped.
    pub fn submit_evidence(
        &mut self,
        item_id: ItemId,
        author: UserId,
        text: String,
        image_url: Option<String>,
        author_location: String,
    ) -> Result<(EvidenceId, Credits), LedgerError> {
        let item = self
            .items
            .get_mut(&item_id)
            .ok_or(LedgerError::UnknownItem(item_id))?;
        let id = EvidenceId::new(self.next_evidence);
        self.next_evidence += 1;
        item.evidence.insert(
            0,
            Evidence {
                id,
                author,
                text,
                image_url,
                author_location,
                likes: Default::default(),
                responses: Vec::new(),
            },
        );
        tracing::debug!(item = %item_id, evidence = %id, author = %author, "evidence submitted");
        Ok((id, EVIDENCE_AWARD))
    }

    /// Toggle a like on a piece of evidence. Idempotent per user; returns
    /// whether the user likes the evidence after the call. The evidence
    /// author cannot like their own evidence.
    pub fn toggle_like(
        &mut self,
        item_id: ItemId,
        evidence_id: EvidenceId,
        user: UserId,
    ) -> Result<bool, LedgerError> {
        let evidence = self.evidence_mut(item_id, evidence_id)?;
        if evidence.author == user {
            return Err(LedgerError::EvidenceAuthorInteraction);
        }
        if evidence.likes.remove(&user) {
            Ok(false)
        } else {
            evidence.likes.insert(user);
            Ok(true)
        }
    }

    /// Append a response under a piece of evidence. The evidence author
    /// cannot respond to their own evidence.
    pub fn add_response(
        &mut self,
        item_id: ItemId,
        evidence_id: EvidenceId,
        author: UserId,
        author_name: String,
        text: String,
    ) -> Result<ResponseId, LedgerError> {
        let id = ResponseId::new(self.next_response);
        let evidence = self.evidence_mut(item_id, evidence_id)?;
        if evidence.author == author {
            return Err(LedgerError::EvidenceAuthorInteraction);
        }
        evidence.responses.push(Response {
            id,
            author,
            author_name,
            text,
        });
        self.next_response += 1;
        Ok(id)
    }

    fn evidence_mut(
        &mut self,
        item_id: ItemId,
        evidence_id: EvidenceId,
    ) -> Result<&mut Evidence, LedgerError> {
        self.items
            .get_mut(&item_id)
            .ok_or(LedgerError::UnknownItem(item_id))?
            .evidence_by_id_mut(evidence_id)
            .ok_or(LedgerError::UnknownEvidence(evidence_id))
    }

    // ── Sharing & clicks ────────────────────────────────────────────────

    /// Claim the one-time share award. Only Real-verdict items are
    /// shareable; repeat calls and ineligible items change nothing.
    pub fn share(&mut self, item_id: ItemId, user: UserId) -> Result<ShareOutcome, LedgerError> {
        let item = self
            .items
            .get(&item_id)
            .ok_or(LedgerError::UnknownItem(item_id))?;
        if item.report.verdict != Verdict::Real {
            return Ok(ShareOutcome::NotEligible);
        }
        let state = self.voter_states.entry((item_id, user)).or_default();
        if state.shared {
            return Ok(ShareOutcome::AlreadyShared);
        }
        state.shared = true;
        tracing::debug!(item = %item_id, user = %user, "share award claimed");
        Ok(ShareOutcome::Credited(SHARE_AWARD))
    }

    /// Increment the click/impression counter.
    pub fn record_click(&mut self, item_id: ItemId) -> Result<u64, LedgerError> {
        let item = self
            .items
            .get_mut(&item_id)
            .ok_or(LedgerError::UnknownItem(item_id))?;
        item.clicks += 1;
        Ok(item.clicks)
    }

    // ── Reads ───────────────────────────────────────────────────────────

    pub fn item(&self, id: ItemId) -> Option<&NewsItem> {
        self.items.get(&id)
    }

    /// Per-item voter state; default (never voted, never shared) when the
    /// pair has no history.
    pub fn voter_state(&self, item_id: ItemId, voter: UserId) -> VoterState {
        self.voter_states
            .get(&(item_id, voter))
            .copied()
            .unwrap_or_default()
    }

    /// Item ids in feed order (most recent first).
    pub fn order(&self) -> &[ItemId] {
        &self.order
    }

    /// Items in feed order.
    pub fn iter(&self) -> impl Iterator<Item = &NewsItem> {
        self.order.iter().filter_map(|id| self.items.get(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
