//! Buffered clock-in/clock-out window checks.
//!
//! Both checks compare the current instant against a shift's boundary
//! instants plus configurable buffers. They are pure: a check returns a
//! typed refusal describing which bound was violated and never mutates
//! anything.

use chrono::{Duration, NaiveDateTime};

use crate::error::{EngineError, EngineResult};

/// Default minutes a worker may clock in before the shift starts.
pub const DEFAULT_EARLY_CLOCK_IN_MINUTES: i64 = 10;

/// Default minutes before the shift's finish instant after which clock-out
/// is allowed.
pub const DEFAULT_MINIMUM_CLOCK_OUT_MINUTES: i64 = 120;

/// The configured clock-action buffers.
///
/// # Example
///
/// ```
/// use chrono::NaiveDateTime;
/// use shift_engine::scheduling::ClockPolicy;
///
/// let policy = ClockPolicy::default();
/// let start = NaiveDateTime::parse_from_str("2025-06-01 09:00", "%Y-%m-%d %H:%M").unwrap();
/// let finish = NaiveDateTime::parse_from_str("2025-06-01 17:00", "%Y-%m-%d %H:%M").unwrap();
///
/// // 08:55 is inside the 10-minute early window.
/// let now = NaiveDateTime::parse_from_str("2025-06-01 08:55", "%Y-%m-%d %H:%M").unwrap();
/// assert!(policy.check_clock_in(now, start, finish).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockPolicy {
    early_clock_in: Duration,
    minimum_clock_out: Duration,
}

impl Default for ClockPolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_EARLY_CLOCK_IN_MINUTES,
            DEFAULT_MINIMUM_CLOCK_OUT_MINUTES,
        )
    }
}

impl ClockPolicy {
    /// Creates a policy from buffer durations in minutes.
    pub fn new(early_clock_in_minutes: i64, minimum_clock_out_minutes: i64) -> Self {
        Self {
            early_clock_in: Duration::minutes(early_clock_in_minutes),
            minimum_clock_out: Duration::minutes(minimum_clock_out_minutes),
        }
    }

    /// Checks whether clock-in is currently permitted.
    ///
    /// Passes iff `now` is within `[start - early_buffer, finish]`, both
    /// bounds inclusive. Violating the lower bound yields
    /// [`EngineError::ClockInTooEarly`]; violating the upper bound yields
    /// [`EngineError::ClockInExpired`].
    pub fn check_clock_in(
        &self,
        now: NaiveDateTime,
        start: NaiveDateTime,
        finish: NaiveDateTime,
    ) -> EngineResult<()> {
        let opens_at = start - self.early_clock_in;
        if now < opens_at {
            return Err(EngineError::ClockInTooEarly {
                minutes_early: (opens_at - now).num_minutes(),
                opens_at,
            });
        }
        if now > finish {
            return Err(EngineError::ClockInExpired { finished_at: finish });
        }
        Ok(())
    }

    /// Checks whether clock-out is currently permitted.
    ///
    /// Passes iff `now` is at or after `finish - clock_out_buffer`. There
    /// is no upper bound: a worker may clock out arbitrarily late. A shift
    /// shorter than the buffer therefore cannot be clocked out until close
    /// to (or past) its finish instant; this mirrors the source system and
    /// is a policy choice, not a defect.
    pub fn check_clock_out(&self, now: NaiveDateTime, finish: NaiveDateTime) -> EngineResult<()> {
        let allowed_from = finish - self.minimum_clock_out;
        if now < allowed_from {
            return Err(EngineError::ClockOutTooSoon {
                buffer_minutes: self.minimum_clock_out.num_minutes(),
                allowed_from,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    const START: &str = "2025-06-01 09:00";
    const FINISH: &str = "2025-06-01 17:00";

    #[test]
    fn test_clock_in_at_window_open_is_allowed() {
        let policy = ClockPolicy::default();
        assert!(policy
            .check_clock_in(dt("2025-06-01 08:50"), dt(START), dt(FINISH))
            .is_ok());
    }

    #[test]
    fn test_clock_in_one_minute_before_window_is_too_early() {
        let policy = ClockPolicy::default();
        let err = policy
            .check_clock_in(dt("2025-06-01 08:49"), dt(START), dt(FINISH))
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::ClockInTooEarly {
                minutes_early: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_clock_in_at_finish_is_allowed() {
        let policy = ClockPolicy::default();
        assert!(policy
            .check_clock_in(dt(FINISH), dt(START), dt(FINISH))
            .is_ok());
    }

    #[test]
    fn test_clock_in_after_finish_is_expired() {
        let policy = ClockPolicy::default();
        let err = policy
            .check_clock_in(dt("2025-06-01 17:01"), dt(START), dt(FINISH))
            .unwrap_err();
        assert!(matches!(err, EngineError::ClockInExpired { finished_at } if finished_at == dt(FINISH)));
    }

    #[test]
    fn test_too_early_and_expired_messages_are_distinct() {
        let policy = ClockPolicy::default();
        let early = policy
            .check_clock_in(dt("2025-06-01 06:00"), dt(START), dt(FINISH))
            .unwrap_err();
        let expired = policy
            .check_clock_in(dt("2025-06-01 18:00"), dt(START), dt(FINISH))
            .unwrap_err();
        assert_ne!(early.to_string(), expired.to_string());
        assert_ne!(early.error_code(), expired.error_code());
    }

    #[test]
    fn test_clock_out_at_buffer_boundary_is_allowed() {
        let policy = ClockPolicy::default();
        assert!(policy
            .check_clock_out(dt("2025-06-01 15:00"), dt(FINISH))
            .is_ok());
    }

    #[test]
    fn test_clock_out_before_buffer_states_buffer_value() {
        let policy = ClockPolicy::default();
        let err = policy
            .check_clock_out(dt("2025-06-01 14:59"), dt(FINISH))
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::ClockOutTooSoon {
                buffer_minutes: 120,
                ..
            }
        ));
        assert!(err.to_string().contains("120 minutes"));
    }

    #[test]
    fn test_clock_out_allowed_long_after_finish() {
        // No upper bound on clock-out; preserved from the source system.
        let policy = ClockPolicy::default();
        assert!(policy
            .check_clock_out(dt("2025-06-03 09:00"), dt(FINISH))
            .is_ok());
    }

    #[test]
    fn test_custom_buffers_shift_both_bounds() {
        let policy = ClockPolicy::new(30, 60);
        assert!(policy
            .check_clock_in(dt("2025-06-01 08:30"), dt(START), dt(FINISH))
            .is_ok());
        assert!(policy
            .check_clock_out(dt("2025-06-01 16:00"), dt(FINISH))
            .is_ok());
        assert!(policy
            .check_clock_out(dt("2025-06-01 15:59"), dt(FINISH))
            .is_err());
    }

    #[test]
    fn test_shift_shorter_than_buffer_cannot_clock_out_early() {
        // A 1-hour shift with the default 2-hour buffer: clock-out only
        // becomes legal once `now` is within an hour of the start.
        let policy = ClockPolicy::default();
        let finish = dt("2025-06-01 10:00");
        assert!(policy.check_clock_out(dt("2025-06-01 09:30"), finish).is_ok());
        assert!(policy
            .check_clock_out(dt("2025-06-01 07:30"), finish)
            .is_err());
    }
}
