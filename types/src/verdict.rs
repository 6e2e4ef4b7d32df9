//! Verdict status for a news item.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The authoritative verification status of a news item.
///
/// Only `Real` and `Fake` are *official* verdicts — community votes on items
/// in any other state carry no credit consequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Not yet submitted for verification.
    Unverified,
    /// Verification in flight.
    Verifying,
    /// Verified as real.
    Real,
    /// Verified as fake.
    Fake,
    /// The verifier could not decide.
    Dilemma,
}

impl Verdict {
    /// Whether this verdict attaches credit consequences to votes.
    pub fn is_official(&self) -> bool {
        matches!(self, Verdict::Real | Verdict::Fake)
    }

    /// Whether the official verdict says the item is real.
    pub fn is_real(&self) -> bool {
        matches!(self, Verdict::Real)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verdict::Unverified => "Unverified",
            Verdict::Verifying => "Verifying",
            Verdict::Real => "Real",
            Verdict::Fake => "Fake",
            Verdict::Dilemma => "Dilemma",
        };
        write!(f, "{s}")
    }
}

/// A completed verification result attached to a news item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerdictReport {
    pub verdict: Verdict,
    /// Verifier confidence, 0–100.
    pub confidence: Option<u8>,
    /// Free-text explanation from the verifier.
    pub reasoning: Option<String>,
    /// Whether the attached image looks AI-generated.
    pub ai_generated_image: Option<bool>,
}

impl VerdictReport {
    /// Report for an item that has never been submitted for verification.
    pub fn unverified() -> Self {
        Self {
            verdict: Verdict::Unverified,
            confidence: None,
            reasoning: None,
            ai_generated_image: None,
        }
    }

    /// Substitute report used when the verification call fails or times out.
    ///
    /// Submissions proceed on this rather than blocking the feed, and the
    /// undecided verdict means the submitter is not penalized.
    pub fn fallback() -> Self {
        Self {
            verdict: Verdict::Dilemma,
            confidence: Some(0),
            reasoning: Some("An error occurred during analysis. Unable to verify.".to_string()),
            ai_generated_image: Some(false),
        }
    }
}
