use proptest::prelude::*;

use tally_types::{Credits, Timestamp, Verdict};

proptest! {
    /// Credits addition is commutative and ZERO is the identity.
    #[test]
    fn credits_addition_laws(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
        let ca = Credits::from_tenths(a);
        let cb = Credits::from_tenths(b);
        prop_assert_eq!(ca + cb, cb + ca);
        prop_assert_eq!(ca + Credits::ZERO, ca);
    }

    /// Negation reverses every delta exactly (the re-vote reversal relies on this).
    #[test]
    fn credits_negation_round_trips(a in -1_000_000i64..1_000_000) {
        let c = Credits::from_tenths(a);
        prop_assert_eq!(c + (-c), Credits::ZERO);
        prop_assert_eq!(-(-c), c);
    }

    /// Whole-credit construction and tenths agree.
    #[test]
    fn whole_credits_are_ten_tenths(n in -100_000i64..100_000) {
        prop_assert_eq!(Credits::whole(n).tenths(), n * 10);
    }

    /// Credits survive a serde round trip unchanged.
    #[test]
    fn credits_serde_round_trip(a in i64::MIN / 2..i64::MAX / 2) {
        let c = Credits::from_tenths(a);
        let json = serde_json::to_string(&c).unwrap();
        let back: Credits = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(c, back);
    }

    /// Day indices are monotone in time.
    #[test]
    fn day_index_monotone(t1 in 0u64..10_000_000_000, dt in 0u64..10_000_000) {
        let a = Timestamp::new(t1);
        let b = Timestamp::new(t1 + dt);
        prop_assert!(a.day_index() <= b.day_index());
    }

    /// elapsed_since never underflows.
    #[test]
    fn elapsed_never_underflows(t1 in 0u64..1_000_000, t2 in 0u64..1_000_000) {
        let earlier = Timestamp::new(t1);
        let later = Timestamp::new(t2);
        let _ = earlier.elapsed_since(later);
    }
}

#[test]
fn verdict_officialness_partition() {
    let official: Vec<_> = [
        Verdict::Unverified,
        Verdict::Verifying,
        Verdict::Real,
        Verdict::Fake,
        Verdict::Dilemma,
    ]
    .into_iter()
    .filter(Verdict::is_official)
    .collect();
    assert_eq!(official, vec![Verdict::Real, Verdict::Fake]);
}
