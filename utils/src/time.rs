//! Calendar helpers for UTC day bucketing.

use tally_types::Timestamp;

/// Format a timestamp's UTC date portion as `YYYY-MM-DD`.
///
/// Uses the civil-from-days algorithm (Howard Hinnant) on whole days since
/// the Unix epoch, so no timezone database is involved.
pub fn utc_date_string(ts: Timestamp) -> String {
    let (y, m, d) = civil_from_days(ts.day_index() as i64);
    format!("{y:04}-{m:02}-{d:02}")
}

/// Convert days since 1970-01-01 to a (year, month, day) civil date.
fn civil_from_days(z: i64) -> (i64, u32, u32) {
    let z = z + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let m = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    (if m <= 2 { y + 1 } else { y }, m, d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_new_years_1970() {
        assert_eq!(utc_date_string(Timestamp::EPOCH), "1970-01-01");
    }

    #[test]
    fn known_dates() {
        // 2024-02-29 00:00:00 UTC (leap day)
        assert_eq!(utc_date_string(Timestamp::new(1_709_164_800)), "2024-02-29");
        // 2000-01-01 00:00:00 UTC
        assert_eq!(utc_date_string(Timestamp::new(946_684_800)), "2000-01-01");
    }

    #[test]
    fn same_day_same_string() {
        let morning = Timestamp::new(1_709_164_800 + 3600);
        let evening = Timestamp::new(1_709_164_800 + 82_000);
        assert_eq!(utc_date_string(morning), utc_date_string(evening));
    }
}
