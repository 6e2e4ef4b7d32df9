//! Overall and locality-filtered vote tallies.

use serde::{Deserialize, Serialize};
use tally_ledger::Vote;

/// Real/fake counts with percentages. Only produced for non-empty vote sets,
/// so the percentages are always well-defined (no zero-division sentinel).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tally {
    pub real: usize,
    pub fake: usize,
    pub total: usize,
    pub real_pct: f64,
    pub fake_pct: f64,
}

impl Tally {
    fn from_counts(real: usize, total: usize) -> Self {
        let fake = total - real;
        let real_pct = real as f64 / total as f64 * 100.0;
        Self {
            real,
            fake,
            total,
            real_pct,
            fake_pct: 100.0 - real_pct,
        }
    }
}

/// Tally the whole vote sequence; `None` when there are no votes.
pub fn overall_tally(votes: &[Vote]) -> Option<Tally> {
    if votes.is_empty() {
        return None;
    }
    let real = votes.iter().filter(|v| v.is_real).count();
    Some(Tally::from_counts(real, votes.len()))
}

/// Locality heuristic: one label is a case-insensitive substring of the
/// other, checked symmetrically. A label comparison, not geocoding.
pub fn is_local(vote_location: &str, origin: &str) -> bool {
    let a = vote_location.to_lowercase();
    let b = origin.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

/// Tally restricted to votes local to the item's origin; `None` when no
/// local vote exists.
pub fn local_tally(votes: &[Vote], origin: &str) -> Option<Tally> {
    let local: Vec<&Vote> = votes.iter().filter(|v| is_local(&v.location, origin)).collect();
    if local.is_empty() {
        return None;
    }
    let real = local.iter().filter(|v| v.is_real).count();
    Some(Tally::from_counts(real, local.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_types::{Timestamp, VoteId};

    fn vote(is_real: bool, location: &str) -> Vote {
        Vote {
            id: VoteId::new(0),
            voter: None,
            is_real,
            location: location.to_string(),
            timestamp: Timestamp::new(0),
        }
    }

    #[test]
    fn empty_set_has_no_tally() {
        assert_eq!(overall_tally(&[]), None);
    }

    #[test]
    fn two_real_one_fake() {
        let votes = [vote(true, "Delhi"), vote(true, "Delhi"), vote(false, "Lima")];
        let tally = overall_tally(&votes).unwrap();
        assert_eq!(tally.real, 2);
        assert_eq!(tally.fake, 1);
        assert!((tally.real_pct - 66.7).abs() < 0.05);
        assert!((tally.fake_pct - 33.3).abs() < 0.05);
    }

    #[test]
    fn locality_is_symmetric_and_case_insensitive() {
        assert!(is_local("karimnagar", "Karimnagar"));
        assert!(is_local("Greater London", "london"));
        assert!(is_local("london", "Greater London"));
        assert!(!is_local("Paris", "London"));
    }

    #[test]
    fn local_tally_filters_by_origin() {
        let votes = [
            vote(true, "Karimnagar"),
            vote(false, "Hyderabad"),
            vote(true, "Karimnagar"),
        ];
        let local = local_tally(&votes, "Karimnagar").unwrap();
        assert_eq!(local.total, 2);
        assert_eq!(local.real, 2);
        assert_eq!(local.real_pct, 100.0);
        assert_eq!(local_tally(&votes, "Tokyo"), None);
    }
}
