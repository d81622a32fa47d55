//! Uniform random dates and timestamps within closed ranges, plus the
//! fixed output formats the bulk importer expects.

use crate::rng::StageRng;
use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Uniform date in [start, end], inclusive on both ends.
pub fn date_between(rng: &mut StageRng, start: NaiveDate, end: NaiveDate) -> NaiveDate {
    let span_days = (end - start).num_days();
    debug_assert!(span_days >= 0, "end before start");
    start + Duration::days(rng.int_in(0, span_days as u64) as i64)
}

/// Uniform timestamp in [start, end], second granularity.
pub fn datetime_between(
    rng: &mut StageRng,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> NaiveDateTime {
    let span_seconds = (end - start).num_seconds();
    debug_assert!(span_seconds >= 0, "end before start");
    start + Duration::seconds(rng.int_in(0, span_seconds as u64) as i64)
}

/// Constant-argument constructor; panics only on an invalid calendar date.
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Midnight on the given calendar date.
pub fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
    ymd(year, month, day).and_hms_opt(0, 0, 0).expect("valid time")
}

pub fn fmt_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn fmt_datetime(datetime: NaiveDateTime) -> String {
    datetime.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{RngBank, StageSlot};

    #[test]
    fn dates_stay_inside_the_range() {
        let bank = RngBank::new(3);
        let mut rng = bank.for_stage(StageSlot::Customer);
        let start = ymd(1950, 1, 1);
        let end = ymd(2005, 12, 31);
        for _ in 0..1000 {
            let d = date_between(&mut rng, start, end);
            assert!(d >= start && d <= end, "{d}");
        }
    }

    #[test]
    fn datetimes_stay_inside_the_range() {
        let bank = RngBank::new(3);
        let mut rng = bank.for_stage(StageSlot::Transaction);
        let start = midnight(2023, 1, 1);
        let end = midnight(2025, 1, 1);
        for _ in 0..1000 {
            let dt = datetime_between(&mut rng, start, end);
            assert!(dt >= start && dt <= end, "{dt}");
        }
    }

    #[test]
    fn formats_match_the_importer_contract() {
        assert_eq!(fmt_date(ymd(2024, 3, 7)), "2024-03-07");
        assert_eq!(fmt_datetime(midnight(2024, 3, 7)), "2024-03-07 00:00:00");
    }

    #[test]
    fn degenerate_range_returns_the_endpoint() {
        let bank = RngBank::new(3);
        let mut rng = bank.for_stage(StageSlot::Device);
        let day = ymd(2024, 6, 1);
        assert_eq!(date_between(&mut rng, day, day), day);
    }
}
