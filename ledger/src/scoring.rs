//! Credit scoring rules for votes and credited actions.
//!
//! The scheme is asymmetric on re-votes: changing to agree with the verdict
//! recovers only half the normal reward, while changing to disagree still
//! costs the full penalty. Voting speculatively against the verdict and then
//! "fixing" it therefore never nets out to the honest first-vote reward.

use tally_types::{Credits, Verdict};

/// Reward for a first vote that agrees with an official verdict.
pub const AGREE_AWARD: Credits = Credits::whole(5);
/// Penalty for any vote that disagrees with an official verdict.
pub const DISAGREE_PENALTY: Credits = Credits::whole(-5);
/// Half-weight reward when a re-vote switches to agreement.
pub const REVOTE_AGREE_AWARD: Credits = Credits::from_tenths(25);
/// Flat award per evidence submission, independent of the verdict.
pub const EVIDENCE_AWARD: Credits = Credits::whole(15);
/// One-time award for sharing an item with a Real verdict.
pub const SHARE_AWARD: Credits = Credits::whole(5);
/// Penalty applied to the submitter when the verdict resolves to Fake.
pub const FAKE_SUBMISSION_PENALTY: Credits = Credits::whole(-10);

/// Explicit acknowledgment that the voter intends to change a recorded vote.
///
/// Re-votes must never be applied silently; callers obtain confirmation from
/// the user and pass [`RevoteAck::Confirmed`] on the second cast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevoteAck {
    NotRequested,
    Confirmed,
}

/// Credit delta for casting `choice` given the item's verdict and the voter's
/// previously recorded choice (if any).
///
/// Unofficial verdicts (Unverified/Verifying/Dilemma) carry no credit
/// consequence. A re-vote first reverses the prior vote's effect, then applies
/// the new choice at half weight on agreement or full weight on disagreement.
pub fn vote_delta(verdict: Verdict, prior: Option<bool>, choice: bool) -> Credits {
    if !verdict.is_official() {
        return Credits::ZERO;
    }
    let verdict_real = verdict.is_real();

    match prior {
        None => {
            if choice == verdict_real {
                AGREE_AWARD
            } else {
                DISAGREE_PENALTY
            }
        }
        Some(prev) => {
            let reversal = if prev == verdict_real {
                -AGREE_AWARD
            } else {
                -DISAGREE_PENALTY
            };
            let applied = if choice == verdict_real {
                REVOTE_AGREE_AWARD
            } else {
                DISAGREE_PENALTY
            };
            reversal + applied
        }
    }
}
