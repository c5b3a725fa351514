//! Shift entity and status state machine.
//!
//! A shift moves through a small closed lifecycle:
//!
//! ```text
//! Scheduled ──clock-in──▶ InProgress ──clock-out──▶ Completed
//!     │
//!     └──cancel──▶ Cancelled
//! ```
//!
//! Edits are only legal while `Scheduled`; `Completed` and `Cancelled` are
//! terminal. The entity methods below are the only way a shift changes
//! status, so every transition is checked in one place.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::scheduling::ClockPolicy;

/// Lifecycle status of a shift.
///
/// Wire names follow the external contract: `"Scheduled"`, `"In Progress"`,
/// `"Completed"`, `"Cancelled"`.
///
/// # Example
///
/// ```
/// use shift_engine::models::ShiftStatus;
///
/// assert_eq!(
///     serde_json::to_string(&ShiftStatus::InProgress).unwrap(),
///     "\"In Progress\""
/// );
/// assert_eq!(ShiftStatus::InProgress.to_string(), "In Progress");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ShiftStatus {
    /// Created and awaiting the assigned worker; the only editable status.
    Scheduled,
    /// The worker has clocked in.
    #[serde(rename = "In Progress")]
    InProgress,
    /// The worker has clocked out. Terminal.
    Completed,
    /// Cancelled by the scheduler before any clock-in. Terminal.
    Cancelled,
}

impl std::fmt::Display for ShiftStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftStatus::Scheduled => write!(f, "Scheduled"),
            ShiftStatus::InProgress => write!(f, "In Progress"),
            ShiftStatus::Completed => write!(f, "Completed"),
            ShiftStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// Descriptive tags for a shift.
///
/// Tags are not mutually exclusive: a single shift may be, say, both
/// `Weekend` and `Night`. The set on a shift is non-empty (enforced by the
/// input-validation collaborator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftType {
    /// Falls on a Saturday or Sunday.
    Weekend,
    /// Falls on a Monday through Friday.
    Weekday,
    /// Covers evening hours.
    Evening,
    /// Covers morning hours.
    Morning,
    /// Covers overnight hours.
    Night,
}

/// A scheduled work assignment for one worker at one location.
///
/// `start_time` and `finish_time` are absolute instants computed from the
/// calendar `date` plus the submitted clock strings (see
/// [`crate::scheduling::shift_window`]); `finish_time` is always strictly
/// after `start_time`, with overnight shifts finishing on the following
/// calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier, assigned at creation, immutable.
    pub id: Uuid,
    /// Short description of the work.
    pub title: String,
    /// The role the worker fills during the shift.
    pub role: String,
    /// Descriptive tags; non-empty, not mutually exclusive.
    pub type_of_shift: Vec<ShiftType>,
    /// The assigned worker (non-owning reference).
    pub worker: Uuid,
    /// Calendar date anchoring the shift.
    pub date: NaiveDate,
    /// Instant the shift starts.
    pub start_time: NaiveDateTime,
    /// Instant the shift finishes; strictly after `start_time`.
    pub finish_time: NaiveDateTime,
    /// Informational head-count for the day; not enforced against overlaps.
    pub num_of_shifts_per_day: u32,
    /// The location the shift takes place at (non-owning reference).
    pub location: Uuid,
    /// Current lifecycle status.
    pub status: ShiftStatus,
    /// Set by clock-in; non-null only from `InProgress` onwards.
    pub clock_in_time: Option<NaiveDateTime>,
    /// Set by clock-out; non-null only when `Completed`.
    pub clock_out_time: Option<NaiveDateTime>,
    /// System-maintained creation timestamp.
    pub created_at: NaiveDateTime,
    /// System-maintained last-modification timestamp.
    pub updated_at: NaiveDateTime,
}

impl Shift {
    /// Returns true if `worker` is the worker assigned to this shift.
    pub fn is_assigned_to(&self, worker: Uuid) -> bool {
        self.worker == worker
    }

    /// Checks that the shift may still be edited.
    ///
    /// Edits are permitted only while `Scheduled`; any other status yields
    /// an [`EngineError::InvalidStatus`] naming the current status.
    pub fn ensure_editable(&self) -> EngineResult<()> {
        match self.status {
            ShiftStatus::Scheduled => Ok(()),
            status => Err(EngineError::InvalidStatus { status }),
        }
    }

    /// Cancels the shift.
    ///
    /// Only a `Scheduled` shift can be cancelled. A shift that is already
    /// `Cancelled` or has been `Completed` yields its own distinct refusal;
    /// an `InProgress` shift yields the generic invalid-status refusal.
    pub fn cancel(&mut self, now: NaiveDateTime) -> EngineResult<()> {
        match self.status {
            ShiftStatus::Scheduled => {
                self.status = ShiftStatus::Cancelled;
                self.touch(now);
                Ok(())
            }
            ShiftStatus::Cancelled => Err(EngineError::AlreadyCancelled),
            ShiftStatus::Completed => Err(EngineError::CancelCompleted),
            status => Err(EngineError::InvalidStatus { status }),
        }
    }

    /// Clocks the assigned worker in, advancing `Scheduled` to `InProgress`.
    ///
    /// The status precondition is checked first, then the buffered time
    /// window; the shift is untouched unless both pass.
    pub fn clock_in(&mut self, policy: &ClockPolicy, now: NaiveDateTime) -> EngineResult<()> {
        if self.status != ShiftStatus::Scheduled {
            return Err(EngineError::InvalidStatus {
                status: self.status,
            });
        }
        policy.check_clock_in(now, self.start_time, self.finish_time)?;

        self.clock_in_time = Some(now);
        self.status = ShiftStatus::InProgress;
        self.touch(now);
        Ok(())
    }

    /// Clocks the assigned worker out, advancing `InProgress` to `Completed`.
    pub fn clock_out(&mut self, policy: &ClockPolicy, now: NaiveDateTime) -> EngineResult<()> {
        if self.status != ShiftStatus::InProgress {
            return Err(EngineError::InvalidStatus {
                status: self.status,
            });
        }
        policy.check_clock_out(now, self.finish_time)?;

        self.clock_out_time = Some(now);
        self.status = ShiftStatus::Completed;
        self.touch(now);
        Ok(())
    }

    /// Refreshes the last-modification timestamp.
    pub fn touch(&mut self, now: NaiveDateTime) {
        self.updated_at = now;
    }
}
