//! News item state: votes, evidence, per-voter tracking.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tally_types::{
    Category, EvidenceId, ItemId, ResponseId, Timestamp, UserId, VerdictReport, VoteId,
};

/// A single vote on a news item. Immutable once created; a re-vote retracts
/// the voter's previous vote and appends a fresh one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vote {
    pub id: VoteId,
    /// `None` for synthetic simulator votes, which are not attributable.
    pub voter: Option<UserId>,
    pub is_real: bool,
    /// Resolved location label (city name or raw coordinate string).
    pub location: String,
    pub timestamp: Timestamp,
}

/// A response under a piece of evidence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub id: ResponseId,
    pub author: UserId,
    pub author_name: String,
    pub text: String,
}

/// Evidence attached to a news item. Immutable except for its likes set and
/// responses, both mutated only by actors other than the author.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    pub id: EvidenceId,
    pub author: UserId,
    pub text: String,
    pub image_url: Option<String>,
    pub author_location: String,
    pub likes: HashSet<UserId>,
    pub responses: Vec<Response>,
}

/// A news item's vote sequence plus a per-voter index.
///
/// The `Vec` keeps chronological (insertion) order for the aggregation views;
/// the index enforces single-vote-per-voter and gives O(1) re-vote lookup.
/// Synthetic votes never appear in the index.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VoteSet {
    votes: Vec<Vote>,
    voter_index: HashMap<UserId, VoteId>,
}

impl VoteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vote. An attributed voter must not already be present;
    /// callers retract the prior vote first.
    pub(crate) fn push(&mut self, vote: Vote) {
        if let Some(voter) = vote.voter {
            debug_assert!(!self.voter_index.contains_key(&voter));
            self.voter_index.insert(voter, vote.id);
        }
        self.votes.push(vote);
    }

    /// Remove a vote by id (re-vote retraction).
    pub(crate) fn remove(&mut self, id: VoteId) {
        if let Some(pos) = self.votes.iter().position(|v| v.id == id) {
            let removed = self.votes.remove(pos);
            if let Some(voter) = removed.voter {
                self.voter_index.remove(&voter);
            }
        }
    }

    /// The recorded vote id for a voter, if any.
    pub fn vote_id_for(&self, voter: UserId) -> Option<VoteId> {
        self.voter_index.get(&voter).copied()
    }

    /// Votes in chronological order.
    pub fn as_slice(&self) -> &[Vote] {
        &self.votes
    }

    pub fn len(&self) -> usize {
        self.votes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }
}

/// A news report in the feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    /// Origin location label of the reported event.
    pub location: String,
    pub category: Category,
    pub report: VerdictReport,
    /// Click/impression counter.
    pub clicks: u64,
    pub created_at: Timestamp,
    pub votes: VoteSet,
    pub evidence: Vec<Evidence>,
    /// Submitting user; `None` for simulator-generated items.
    pub author: Option<UserId>,
}

impl NewsItem {
    pub fn evidence_by_id(&self, id: EvidenceId) -> Option<&Evidence> {
        self.evidence.iter().find(|e| e.id == id)
    }

    pub(crate) fn evidence_by_id_mut(&mut self, id: EvidenceId) -> Option<&mut Evidence> {
        self.evidence.iter_mut().find(|e| e.id == id)
    }
}

/// Per-(item, voter) state tracked by the ledger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoterState {
    /// The voter's current recorded choice, if any.
    pub choice: Option<bool>,
    /// Which vote in the item's sequence belongs to this voter.
    pub vote_id: Option<VoteId>,
    /// Total number of casts, counting every re-vote. Never decremented.
    pub vote_count: u32,
    /// Whether the share award has been claimed for this item.
    pub shared: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vote(id: u64, voter: Option<u64>, is_real: bool) -> Vote {
        Vote {
            id: VoteId::new(id),
            voter: voter.map(UserId::new),
            is_real,
            location: "London".to_string(),
            timestamp: Timestamp::new(id),
        }
    }

    #[test]
    fn remove_clears_voter_index() {
        let mut set = VoteSet::new();
        set.push(vote(1, Some(9), true));
        assert_eq!(set.vote_id_for(UserId::new(9)), Some(VoteId::new(1)));
        set.remove(VoteId::new(1));
        assert_eq!(set.vote_id_for(UserId::new(9)), None);
        assert!(set.is_empty());
    }

    #[test]
    fn synthetic_votes_never_enter_the_index() {
        let mut set = VoteSet::new();
        set.push(vote(1, None, true));
        set.push(vote(2, None, false));
        assert_eq!(set.len(), 2);
        assert!(set.as_slice().iter().all(|v| v.voter.is_none()));
    }

    #[test]
    fn order_is_chronological() {
        let mut set = VoteSet::new();
        set.push(vote(1, None, true));
        set.push(vote(2, Some(5), false));
        set.push(vote(3, None, true));
        let ids: Vec<_> = set.as_slice().iter().map(|v| v.id.raw()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
