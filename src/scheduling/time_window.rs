//! Time window calculation.
//!
//! Converts a calendar date plus two `HH:MM` clock strings into a concrete
//! start/finish instant pair. A finish clock-time numerically at or before
//! the start clock-time means the shift runs overnight and finishes on the
//! following calendar day.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{EngineError, EngineResult};

/// A computed start/finish instant pair for one shift.
///
/// Invariant: `finish` is strictly after `start`. Equal submitted clock
/// times produce a 24-hour window, never a zero-length one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    /// The instant the shift starts.
    pub start: NaiveDateTime,
    /// The instant the shift finishes; strictly after `start`.
    pub finish: NaiveDateTime,
}

/// Parses a 24-hour `HH:MM` clock string.
///
/// The input-validation collaborator rejects malformed strings before they
/// reach the engine, so a failure here indicates a caller bug; it is still
/// reported as a typed error rather than a panic.
pub fn parse_clock_time(value: &str) -> EngineResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| EngineError::InvalidTimeFormat {
        value: value.to_string(),
    })
}

/// Computes the start/finish instants for a shift.
///
/// Both clock times are anchored to midnight of `date`. If the finish
/// candidate is at or before the start candidate, the finish instant is
/// advanced by exactly one calendar day: a shift stated as `22:00`–`06:00`
/// starts on day D at 22:00 and finishes on day D+1 at 06:00.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use shift_engine::scheduling::shift_window;
///
/// let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// let window = shift_window(date, "22:00", "06:00").unwrap();
///
/// assert_eq!(window.start.to_string(), "2025-06-01 22:00:00");
/// assert_eq!(window.finish.to_string(), "2025-06-02 06:00:00");
/// ```
pub fn shift_window(date: NaiveDate, start_time: &str, finish_time: &str) -> EngineResult<TimeWindow> {
    let start = date.and_time(parse_clock_time(start_time)?);
    let mut finish = date.and_time(parse_clock_time(finish_time)?);

    if finish <= start {
        finish += Duration::days(1);
    }

    Ok(TimeWindow { start, finish })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_same_day_shift() {
        let window = shift_window(date(2025, 6, 1), "09:00", "17:00").unwrap();
        assert_eq!(window.start.to_string(), "2025-06-01 09:00:00");
        assert_eq!(window.finish.to_string(), "2025-06-01 17:00:00");
    }

    #[test]
    fn test_overnight_shift_rolls_finish_to_next_day() {
        let window = shift_window(date(2025, 6, 1), "22:00", "06:00").unwrap();
        assert_eq!(window.start.to_string(), "2025-06-01 22:00:00");
        assert_eq!(window.finish.to_string(), "2025-06-02 06:00:00");
    }

    #[test]
    fn test_equal_times_mean_24_hour_shift() {
        let window = shift_window(date(2025, 6, 1), "08:00", "08:00").unwrap();
        assert_eq!(window.finish - window.start, Duration::days(1));
    }

    #[test]
    fn test_one_minute_overnight_span() {
        let window = shift_window(date(2025, 6, 1), "23:59", "00:00").unwrap();
        assert_eq!(window.finish.to_string(), "2025-06-02 00:00:00");
        assert_eq!(window.finish - window.start, Duration::minutes(1));
    }

    #[test]
    fn test_rollover_across_month_boundary() {
        let window = shift_window(date(2025, 6, 30), "23:00", "07:00").unwrap();
        assert_eq!(window.finish.to_string(), "2025-07-01 07:00:00");
    }

    #[test]
    fn test_rollover_across_year_boundary() {
        let window = shift_window(date(2025, 12, 31), "22:00", "06:00").unwrap();
        assert_eq!(window.finish.to_string(), "2026-01-01 06:00:00");
    }

    #[test]
    fn test_malformed_time_is_rejected() {
        let err = shift_window(date(2025, 6, 1), "9am", "17:00").unwrap_err();
        assert!(matches!(err, EngineError::InvalidTimeFormat { ref value } if value == "9am"));
    }

    #[test]
    fn test_trailing_seconds_are_rejected() {
        let err = shift_window(date(2025, 6, 1), "09:00:00", "17:00").unwrap_err();
        assert!(matches!(err, EngineError::InvalidTimeFormat { .. }));
    }

    proptest! {
        // Whatever the submitted clock times, the computed window is
        // strictly positive and never exceeds 24 hours.
        #[test]
        fn window_is_positive_and_at_most_one_day(
            year in 2020i32..2035,
            ordinal in 1u32..366,
            start_h in 0u32..24,
            start_m in 0u32..60,
            finish_h in 0u32..24,
            finish_m in 0u32..60,
        ) {
            let date = NaiveDate::from_yo_opt(year, ordinal).unwrap();
            let start = format!("{start_h:02}:{start_m:02}");
            let finish = format!("{finish_h:02}:{finish_m:02}");

            let window = shift_window(date, &start, &finish).unwrap();

            prop_assert!(window.finish > window.start);
            prop_assert!(window.finish - window.start <= Duration::days(1));
        }
    }
}
