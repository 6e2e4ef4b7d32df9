//! Per-location vote breakdown.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tally_ledger::Vote;

/// Vote counts for a single resolved location label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationTally {
    pub location: String,
    pub real: usize,
    pub fake: usize,
    pub total: usize,
}

/// Group votes by location label, sorted descending by total. Ties keep
/// first-encounter order (stable sort over encounter-ordered groups).
pub fn location_breakdown(votes: &[Vote]) -> Vec<LocationTally> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<LocationTally> = Vec::new();

    for vote in votes {
        let slot = match index.get(vote.location.as_str()) {
            Some(&i) => i,
            None => {
                index.insert(vote.location.as_str(), groups.len());
                groups.push(LocationTally {
                    location: vote.location.clone(),
                    real: 0,
                    fake: 0,
                    total: 0,
                });
                groups.len() - 1
            }
        };
        let group = &mut groups[slot];
        if vote.is_real {
            group.real += 1;
        } else {
            group.fake += 1;
        }
        group.total += 1;
    }

    groups.sort_by(|a, b| b.total.cmp(&a.total));
    groups
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
    fn groups_and_sorts_by_total() {
        let votes = [
            vote(true, "Delhi"),
            vote(false, "Lima"),
            vote(true, "Lima"),
            vote(false, "Lima"),
            vote(true, "Delhi"),
            vote(true, "Tokyo"),
        ];
        let breakdown = location_breakdown(&votes);
        assert_eq!(breakdown.len(), 3);
        assert_eq!(breakdown[0].location, "Lima");
        assert_eq!(breakdown[0].real, 1);
        assert_eq!(breakdown[0].fake, 2);
        assert_eq!(breakdown[1].location, "Delhi");
        assert_eq!(breakdown[2].location, "Tokyo");
    }

    #[test]
    fn ties_keep_encounter_order() {
        let votes = [vote(true, "Rome"), vote(false, "Cairo")];
        let breakdown = location_breakdown(&votes);
        assert_eq!(breakdown[0].location, "Rome");
        assert_eq!(breakdown[1].location, "Cairo");
    }

    #[test]
    fn empty_votes_empty_breakdown() {
        assert!(location_breakdown(&[]).is_empty());
    }
}
