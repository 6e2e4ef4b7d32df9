//! The news feed and its simulated organic growth.

use crate::templates::{SAMPLE_DESCRIPTIONS, SAMPLE_TITLES};
use rand::Rng;
use tally_ledger::{ItemDraft, LedgerError, NewsItem, RevoteAck, ShareOutcome, VerdictLedger, VoteOutcome};
use tally_places::WORLD_CITIES;
use tally_types::{Category, Credits, ItemId, Timestamp, UserId, VerdictReport};

/// How long an item is flagged "just in" after creation.
pub const JUST_IN_WINDOW_SECS: u64 = 60;

/// Probability that a tick synthesizes a new item instead of a vote burst.
const NEW_ITEM_PROBABILITY: f64 = 0.3;
/// Cap on feed size for simulated item growth.
const MAX_SIMULATED_ITEMS: usize = 20;
/// Synthetic votes are skewed toward "real" at this probability.
const SYNTHETIC_REAL_BIAS: f64 = 0.6;
/// Upper bound (exclusive) on a synthetic item's starting click count.
const MAX_SYNTHETIC_CLICKS: u64 = 50;

/// What a simulator tick did, for logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickReport {
    /// A new synthetic item was prepended.
    NewItem(ItemId),
    /// A burst of synthetic votes landed on an existing item.
    VoteBurst { item: ItemId, votes: usize },
    /// Nothing happened (empty feed on a burst roll).
    Idle,
}

/// The feed: a verdict ledger plus display-order concerns.
#[derive(Clone, Debug, Default)]
pub struct NewsFeed {
    ledger: VerdictLedger,
}

impl NewsFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the underlying ledger.
    pub fn ledger(&self) -> &VerdictLedger {
        &self.ledger
    }

    /// Mutable access for vote/evidence/share actions, which the ledger owns.
    pub fn ledger_mut(&mut self) -> &mut VerdictLedger {
        &mut self.ledger
    }

    /// Commit a user submission (verification already completed) at the top
    /// of the feed. Returns the item id and the submitter's credit delta.
    pub fn submit(
        &mut self,
        draft: ItemDraft,
        report: VerdictReport,
        author: UserId,
        now: Timestamp,
    ) -> (ItemId, Credits) {
        self.ledger.submit(draft, report, author, now)
    }

    /// One simulator step, normally driven every few seconds.
    ///
    /// With probability 0.3 (while under the item cap) a new templated item
    /// arrives; otherwise a random existing item takes a burst of 1–3
    /// synthetic votes. Synthetic activity never touches voter state or
    /// credits.
    pub fn tick<R: Rng>(&mut self, rng: &mut R, now: Timestamp) -> TickReport {
        let roll_new = rng.gen_bool(NEW_ITEM_PROBABILITY);

        if roll_new && self.ledger.len() < MAX_SIMULATED_ITEMS {
            let draft = random_draft(rng);
            let clicks = rng.gen_range(0..MAX_SYNTHETIC_CLICKS);
            let id = self.ledger.push_synthetic_item(draft, clicks, now);
            tracing::debug!(item = %id, "simulator added news item");
            return TickReport::NewItem(id);
        }

        if self.ledger.is_empty() {
            return TickReport::Idle;
        }

        let index = rng.gen_range(0..self.ledger.len());
        let item = self.ledger.order()[index];
        let burst = rng.gen_range(1..=3);
        for _ in 0..burst {
            let is_real = rng.gen_bool(SYNTHETIC_REAL_BIAS);
            let city = WORLD_CITIES[rng.gen_range(0..WORLD_CITIES.len())];
            // The item exists; a failure here would be a bookkeeping bug.
            let _ = self
                .ledger
                .push_synthetic_vote(item, is_real, city.name.to_string(), now);
        }
        tracing::debug!(item = %item, votes = burst, "simulator vote burst");
        TickReport::VoteBurst { item, votes: burst }
    }

    /// Items with viewer-preferred categories first, relative order preserved
    /// within both partitions. An empty preference set leaves feed order
    /// untouched.
    pub fn sorted_for(&self, preferred: &[Category]) -> Vec<&NewsItem> {
        if preferred.is_empty() {
            return self.ledger.iter().collect();
        }
        let (mut wanted, rest): (Vec<&NewsItem>, Vec<&NewsItem>) = self
            .ledger
            .iter()
            .partition(|item| preferred.contains(&item.category));
        wanted.extend(rest);
        wanted
    }

    // Convenience pass-throughs so callers need not reach into the ledger
    // for the common actions.

    pub fn cast_vote(
        &mut self,
        item: ItemId,
        voter: UserId,
        choice: bool,
        location: &str,
        ack: RevoteAck,
        now: Timestamp,
    ) -> Result<VoteOutcome, LedgerError> {
        self.ledger.cast_vote(item, voter, choice, location, ack, now)
    }

    pub fn share(&mut self, item: ItemId, user: UserId) -> Result<ShareOutcome, LedgerError> {
        self.ledger.share(item, user)
    }
}

/// Whether an item should carry the "just in" display flag. Recomputed per
/// render, never persisted.
pub fn is_just_in(item: &NewsItem, now: Timestamp) -> bool {
    item.created_at.elapsed_since(now) < JUST_IN_WINDOW_SECS
}

fn random_draft<R: Rng>(rng: &mut R) -> ItemDraft {
    let title = SAMPLE_TITLES[rng.gen_range(0..SAMPLE_TITLES.len())];
    let description = SAMPLE_DESCRIPTIONS[rng.gen_range(0..SAMPLE_DESCRIPTIONS.len())];
    let category = Category::ALL[rng.gen_range(0..Category::ALL.len())];
    let city = WORLD_CITIES[rng.gen_range(0..WORLD_CITIES.len())];
    ItemDraft {
        title: title.to_string(),
        description: description.to_string(),
        image_url: None,
        location: city.name.to_string(),
        category,
    }
}
