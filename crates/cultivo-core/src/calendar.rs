//! Pure calendar arithmetic for series expansion and delta-day shifts.
//!
//! Everything here works on date-only components; time-of-day enters the
//! picture once, in [`normalize_to_noon`], so that a persisted date survives
//! any offset-based re-interpretation without crossing a day boundary.

use chrono::{DateTime, Duration, Months, NaiveDate, Utc};

use crate::models::Frequency;

/// Safety bound on series expansion. A misconfigured frequency/range pair
/// stops here instead of generating an unbounded batch.
pub const MAX_OCCURRENCES: usize = 50;

/// Next date in a series. Fixed-step frequencies add calendar days; monthly
/// advances the calendar month, clamping day 29-31 to the last day of a
/// shorter month (Jan 31 -> Feb 29 -> Mar 29).
pub fn advance(date: NaiveDate, frequency: Frequency) -> NaiveDate {
    match frequency {
        Frequency::Daily => date + Duration::days(1),
        Frequency::Every2Days => date + Duration::days(2),
        Frequency::Weekly => date + Duration::days(7),
        Frequency::Biweekly => date + Duration::days(14),
        Frequency::Monthly => date + Months::new(1),
    }
}

/// Occurrence dates from `start` to `end` inclusive, stepping via
/// [`advance`], capped at `max`. Empty when `start > end`.
pub fn occurrences_between(
    start: NaiveDate,
    end: NaiveDate,
    frequency: Frequency,
    max: usize,
) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut current = start;
    while current <= end && dates.len() < max {
        dates.push(current);
        current = advance(current, frequency);
    }
    dates
}

/// Signed whole-day difference `b - a` on date-only components.
pub fn day_delta(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days()
}

/// Canonical noon-UTC instant for a calendar date. Noon keeps the date
/// stable under re-interpretation at any offset up to +/-12h.
pub fn normalize_to_noon(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(12, 0, 0).unwrap().and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[rstest]
    #[case(Frequency::Daily, "2024-03-10", "2024-03-11")]
    #[case(Frequency::Daily, "2024-12-31", "2025-01-01")]
    #[case(Frequency::Every2Days, "2024-03-10", "2024-03-12")]
    #[case(Frequency::Weekly, "2024-03-10", "2024-03-17")]
    #[case(Frequency::Biweekly, "2024-03-10", "2024-03-24")]
    #[case(Frequency::Monthly, "2024-03-10", "2024-04-10")]
    #[case(Frequency::Monthly, "2024-12-15", "2025-01-15")]
    fn advance_steps_by_frequency(
        #[case] frequency: Frequency,
        #[case] from: &str,
        #[case] to: &str,
    ) {
        assert_eq!(advance(d(from), frequency), d(to));
    }

    #[rstest]
    #[case("2024-01-31", "2024-02-29")] // leap year
    #[case("2025-01-31", "2025-02-28")]
    #[case("2024-03-31", "2024-04-30")]
    #[case("2024-05-31", "2024-06-30")]
    fn monthly_advance_clamps_to_month_end(#[case] from: &str, #[case] to: &str) {
        assert_eq!(advance(d(from), Frequency::Monthly), d(to));
    }

    #[test]
    fn occurrences_are_inclusive_of_both_bounds() {
        let dates = occurrences_between(
            d("2024-01-01"),
            d("2024-01-22"),
            Frequency::Weekly,
            MAX_OCCURRENCES,
        );
        assert_eq!(
            dates,
            vec![d("2024-01-01"), d("2024-01-08"), d("2024-01-15"), d("2024-01-22")]
        );
    }

    #[test]
    fn occurrences_empty_when_start_after_end() {
        let dates = occurrences_between(
            d("2024-01-22"),
            d("2024-01-01"),
            Frequency::Daily,
            MAX_OCCURRENCES,
        );
        assert!(dates.is_empty());
    }

    #[test]
    fn occurrences_single_when_start_equals_end() {
        let dates = occurrences_between(
            d("2024-01-01"),
            d("2024-01-01"),
            Frequency::Monthly,
            MAX_OCCURRENCES,
        );
        assert_eq!(dates, vec![d("2024-01-01")]);
    }

    #[test]
    fn occurrences_stop_at_the_cap() {
        let dates = occurrences_between(
            d("2024-01-01"),
            d("2030-01-01"),
            Frequency::Daily,
            MAX_OCCURRENCES,
        );
        assert_eq!(dates.len(), MAX_OCCURRENCES);
    }

    #[test]
    fn day_delta_signs() {
        assert_eq!(day_delta(d("2024-01-08"), d("2024-01-10")), 2);
        assert_eq!(day_delta(d("2024-01-10"), d("2024-01-08")), -2);
        assert_eq!(day_delta(d("2024-01-10"), d("2024-01-10")), 0);
    }

    #[test]
    fn normalize_to_noon_keeps_the_date() {
        let instant = normalize_to_noon(d("2024-06-15"));
        assert_eq!(instant.date_naive(), d("2024-06-15"));
        assert_eq!(instant.format("%H:%M:%S").to_string(), "12:00:00");
    }

    proptest! {
        #[test]
        fn day_delta_is_antisymmetric(a in 0i64..40_000, b in 0i64..40_000) {
            let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
            let da = epoch + Duration::days(a);
            let db = epoch + Duration::days(b);
            prop_assert_eq!(day_delta(da, db), -day_delta(db, da));
            prop_assert_eq!(day_delta(da, db), b - a);
        }

        #[test]
        fn occurrence_count_never_exceeds_the_cap(span in 0i64..5_000) {
            let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
            let dates = occurrences_between(
                start,
                start + Duration::days(span),
                Frequency::Daily,
                MAX_OCCURRENCES,
            );
            prop_assert!(dates.len() <= MAX_OCCURRENCES);
            prop_assert!(!dates.is_empty());
        }

        #[test]
        fn occurrences_strictly_increase(span in 0i64..400) {
            let start = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
            let dates = occurrences_between(
                start,
                start + Duration::days(span),
                Frequency::Monthly,
                MAX_OCCURRENCES,
            );
            for pair in dates.windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
        }
    }
}
