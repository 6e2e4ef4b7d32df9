use proptest::prelude::*;

use tally_aggregate::{
    cumulative_series, is_local, location_breakdown, overall_tally, TrendData,
};
use tally_ledger::Vote;
use tally_types::{Timestamp, VoteId};

fn arb_vote() -> impl Strategy<Value = Vote> {
    (
        any::<bool>(),
        prop::sample::select(vec!["Delhi", "Lima", "Tokyo", "London", "Karimnagar"]),
        0u64..10 * 86_400,
    )
        .prop_map(|(is_real, location, secs)| Vote {
            id: VoteId::new(secs),
            voter: None,
            is_real,
            location: location.to_string(),
            timestamp: Timestamp::new(secs),
        })
}

proptest! {
    /// Percentages always sum to 100 and counts to the total.
    #[test]
    fn tally_percentages_sum_to_hundred(votes in prop::collection::vec(arb_vote(), 1..200)) {
        let tally = overall_tally(&votes).unwrap();
        prop_assert_eq!(tally.real + tally.fake, tally.total);
        prop_assert!((tally.real_pct + tally.fake_pct - 100.0).abs() < 1e-9);
        prop_assert!(tally.real_pct >= 0.0 && tally.real_pct <= 100.0);
    }

    /// Breakdown totals partition the vote set and come out sorted.
    #[test]
    fn breakdown_partitions_votes(votes in prop::collection::vec(arb_vote(), 0..200)) {
        let breakdown = location_breakdown(&votes);
        let total: usize = breakdown.iter().map(|g| g.total).sum();
        prop_assert_eq!(total, votes.len());
        for group in &breakdown {
            prop_assert_eq!(group.real + group.fake, group.total);
        }
        for pair in breakdown.windows(2) {
            prop_assert!(pair[0].total >= pair[1].total);
        }
    }

    /// A cumulative series never decreases and its final point counts
    /// every vote.
    #[test]
    fn series_monotone_and_complete(votes in prop::collection::vec(arb_vote(), 0..200)) {
        if let TrendData::Series(points) = cumulative_series(&votes) {
            for pair in points.windows(2) {
                prop_assert!(pair[1].real >= pair[0].real);
                prop_assert!(pair[1].fake >= pair[0].fake);
            }
            let last = points.last().unwrap();
            prop_assert_eq!(last.real, votes.iter().filter(|v| v.is_real).count());
            prop_assert_eq!(last.fake, votes.iter().filter(|v| !v.is_real).count());
        }
    }

    /// Locality is symmetric.
    #[test]
    fn locality_symmetric(a in "[A-Za-z ]{1,12}", b in "[A-Za-z ]{1,12}") {
        prop_assert_eq!(is_local(&a, &b), is_local(&b, &a));
    }

    /// Every label is local to itself, whatever the case.
    #[test]
    fn locality_reflexive(label in "[A-Za-z ]{1,12}") {
        prop_assert!(is_local(&label, &label.to_uppercase()));
    }
}
