//! Cumulative vote time series, bucketed by UTC calendar day.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tally_ledger::Vote;
use tally_types::Timestamp;
use tally_utils::utc_date_string;

/// Minimum number of distinct days before a trend is meaningful.
const MIN_TREND_DAYS: usize = 2;

/// Cumulative totals at the end of one calendar day.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// UTC date, `YYYY-MM-DD`.
    pub day: String,
    pub real: usize,
    pub fake: usize,
}

/// The cumulative time series, or an explicit insufficient-data marker when
/// the votes span fewer than two distinct days.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendData {
    InsufficientData,
    Series(Vec<TrendPoint>),
}

/// Bucket votes by UTC day and accumulate running real/fake counts.
pub fn cumulative_series(votes: &[Vote]) -> TrendData {
    // BTreeMap keeps days ascending; day keys are whole days since epoch.
    let mut per_day: BTreeMap<u64, (usize, usize)> = BTreeMap::new();
    for vote in votes {
        let bucket = per_day.entry(vote.timestamp.day_index()).or_insert((0, 0));
        if vote.is_real {
            bucket.0 += 1;
        } else {
            bucket.1 += 1;
        }
    }

    if per_day.len() < MIN_TREND_DAYS {
        return TrendData::InsufficientData;
    }

    let mut real = 0;
    let mut fake = 0;
    let series = per_day
        .into_iter()
        .map(|(day, (r, f))| {
            real += r;
            fake += f;
            TrendPoint {
                day: utc_date_string(Timestamp::new(day * 86_400)),
                real,
                fake,
            }
        })
        .collect();
    TrendData::Series(series)
}
