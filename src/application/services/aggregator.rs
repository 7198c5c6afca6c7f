//! Daily bucketing of records over a lookback window.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};

use crate::domain::entities::{DAY_KEY_FORMAT, Lookback, TimeSeries, ToolRecord, TrendPoint};

/// First day (inclusive) of the window, as a `YYYY-MM-DD` key.
pub fn since_key(lookback: Lookback, today: NaiveDate) -> String {
    today
        .checked_sub_days(Days::new(u64::from(lookback.get())))
        .unwrap_or(NaiveDate::MIN)
        .format(DAY_KEY_FORMAT)
        .to_string()
}

/// Counts records per creation day within `[today - lookback, today]`.
///
/// `today` is passed in rather than read here; callers take it from a
/// [`crate::domain::clock::Clock`].
///
/// Days are compared as `YYYY-MM-DD` string prefixes of `created_at`; the
/// fixed-width zero-padded format makes lexical order chronological. Records
/// without a ten-character prefix are skipped. Days with no records are not
/// emitted.
pub fn aggregate(records: &[ToolRecord], lookback: Lookback, today: NaiveDate) -> TimeSeries {
    let since = since_key(lookback, today);
    let until = today.format(DAY_KEY_FORMAT).to_string();

    let mut buckets: BTreeMap<&str, u32> = BTreeMap::new();
    for record in records {
        let Some(day) = record.created_day() else {
            tracing::debug!(id = %record.id, created_at = %record.created_at, "Skipping record without a date prefix");
            continue;
        };

        if day >= since.as_str() && day <= until.as_str() {
            *buckets.entry(day).or_default() += 1;
        }
    }

    TimeSeries {
        points: buckets
            .into_iter()
            .map(|(day, count)| TrendPoint::new(day, count))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn records_on(days: &[(&str, usize)]) -> Vec<ToolRecord> {
        let mut records = Vec::new();
        for (day, count) in days {
            for i in 0..*count {
                records.push(ToolRecord::new(
                    format!("{day}-{i}"),
                    "tool",
                    format!("{day}T12:00:00Z"),
                ));
            }
        }
        records
    }

    #[test]
    fn test_buckets_three_days() {
        let records = records_on(&[("2024-01-02", 1), ("2024-01-01", 2), ("2024-01-03", 3)]);
        // Window is [today - 7, today] inclusive; from 2024-01-10 it would start
        // at 2024-01-03 and drop the first two days (see test_since_boundary_is_inclusive).
        let series = aggregate(&records, Lookback::SEVEN_DAYS, date(2024, 1, 8));

        assert_eq!(
            series.points,
            vec![
                TrendPoint::new("2024-01-01", 2),
                TrendPoint::new("2024-01-02", 1),
                TrendPoint::new("2024-01-03", 3),
            ]
        );
    }

    #[test]
    fn test_since_boundary_is_inclusive() {
        let records = records_on(&[("2024-01-02", 1), ("2024-01-03", 1)]);
        let series = aggregate(&records, Lookback::SEVEN_DAYS, date(2024, 1, 10));

        assert_eq!(series.points, vec![TrendPoint::new("2024-01-03", 1)]);
    }

    #[test]
    fn test_future_records_excluded() {
        let records = records_on(&[("2024-01-10", 1), ("2024-01-11", 4)]);
        let series = aggregate(&records, Lookback::SEVEN_DAYS, date(2024, 1, 10));

        assert_eq!(series.points, vec![TrendPoint::new("2024-01-10", 1)]);
    }

    #[test]
    fn test_empty_collection() {
        let series = aggregate(&[], Lookback::THREE_MONTHS, date(2024, 1, 10));
        assert!(series.is_empty());
    }

    #[test]
    fn test_malformed_dates_skipped() {
        let mut records = records_on(&[("2024-01-09", 1)]);
        records.push(ToolRecord::new("bad", "tool", "yesterday"));
        let series = aggregate(&records, Lookback::SEVEN_DAYS, date(2024, 1, 10));

        assert_eq!(series.total(), 1);
    }

    #[test]
    fn test_window_crosses_year() {
        let records = records_on(&[("2023-12-30", 1), ("2023-11-01", 1), ("2024-01-02", 2)]);
        let series = aggregate(&records, Lookback::SEVEN_DAYS, date(2024, 1, 5));

        assert_eq!(
            series.points,
            vec![
                TrendPoint::new("2023-12-30", 1),
                TrendPoint::new("2024-01-02", 2),
            ]
        );
    }

    #[test]
    fn test_unlabeled_window_aggregates() {
        let records = records_on(&[("2024-01-01", 1), ("2024-01-08", 1)]);
        let series = aggregate(&records, Lookback::days(3), date(2024, 1, 10));

        assert_eq!(series.points, vec![TrendPoint::new("2024-01-08", 1)]);
    }

    #[test]
    fn test_properties_hold_across_windows() {
        let today = date(2024, 3, 15);
        let records = records_on(&[
            ("2023-12-01", 3),
            ("2024-01-20", 2),
            ("2024-02-29", 1),
            ("2024-03-08", 4),
            ("2024-03-15", 2),
            ("2024-03-16", 5),
        ]);

        for lookback in [Lookback::SEVEN_DAYS, Lookback::THIRTY_DAYS, Lookback::THREE_MONTHS] {
            let since = since_key(lookback, today);
            let until = today.format(DAY_KEY_FORMAT).to_string();
            let series = aggregate(&records, lookback, today);

            let expected = records
                .iter()
                .filter_map(|r| r.created_day())
                .filter(|d| *d >= since.as_str() && *d <= until.as_str())
                .count() as u64;
            assert_eq!(series.total(), expected);

            for pair in series.points.windows(2) {
                assert!(pair[0].day < pair[1].day);
            }
            for point in &series.points {
                assert!(point.day >= since && point.day <= until);
                assert!(point.count >= 1);
            }
        }
    }

    #[test]
    fn test_since_key() {
        assert_eq!(since_key(Lookback::SEVEN_DAYS, date(2024, 1, 10)), "2024-01-03");
        assert_eq!(since_key(Lookback::THIRTY_DAYS, date(2024, 3, 1)), "2024-01-31");
    }
}
