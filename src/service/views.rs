//! Response denormalization.
//!
//! A shift is rendered for external consumption by replacing its worker and
//! location references with embedded summaries and formatting its instants
//! back into bare `HH:MM` strings. Everything here is a pure read-side
//! projection; stored data is never touched.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Location, Shift, ShiftStatus, ShiftType, Worker};

/// Formats an instant as a bare `HH:MM` clock string.
fn clock_string(instant: NaiveDateTime) -> String {
    instant.format("%H:%M").to_string()
}

/// The worker fields embedded in a denormalized shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerSummary {
    /// Worker identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Role label.
    pub role: String,
}

impl From<Worker> for WorkerSummary {
    fn from(worker: Worker) -> Self {
        Self {
            id: worker.id,
            name: worker.name,
            email: worker.email,
            role: worker.role,
        }
    }
}

/// The location fields embedded in a denormalized shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSummary {
    /// Location identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Postal code.
    pub post_code: String,
    /// Distance from a reference point, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Electoral constituency label, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constituency: Option<String>,
    /// Administrative district label, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_district: Option<String>,
}

impl From<Location> for LocationSummary {
    fn from(location: Location) -> Self {
        Self {
            id: location.id,
            name: location.name,
            post_code: location.post_code,
            distance: location.distance,
            constituency: location.constituency,
            admin_district: location.admin_district,
        }
    }
}

/// A fully denormalized shift, as returned by create/update/cancel and the
/// query engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftView {
    /// Shift identifier.
    pub id: Uuid,
    /// Short description of the work.
    pub title: String,
    /// The role the worker fills.
    pub role: String,
    /// Descriptive tags.
    pub type_of_shift: Vec<ShiftType>,
    /// The assigned worker, embedded.
    pub user: WorkerSummary,
    /// The calendar date, returned unformatted.
    pub date: NaiveDate,
    /// Start clock time as `HH:MM`.
    pub start_time: String,
    /// Finish clock time as `HH:MM`.
    pub finish_time: String,
    /// Informational head-count for the day.
    pub num_of_shifts_per_day: u32,
    /// The location, embedded.
    pub location: LocationSummary,
    /// Current lifecycle status.
    pub status: ShiftStatus,
    /// Clock-in time as `HH:MM`, once the worker has clocked in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clock_in_time: Option<String>,
    /// Clock-out time as `HH:MM`, once the worker has clocked out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clock_out_time: Option<String>,
    /// Creation timestamp.
    pub created_at: NaiveDateTime,
    /// Last-modification timestamp.
    pub updated_at: NaiveDateTime,
}

impl ShiftView {
    /// Assembles the denormalized view of `shift` from its resolved
    /// worker and location records.
    pub fn assemble(shift: Shift, worker: Worker, location: Location) -> Self {
        Self {
            id: shift.id,
            title: shift.title,
            role: shift.role,
            type_of_shift: shift.type_of_shift,
            user: worker.into(),
            date: shift.date,
            start_time: clock_string(shift.start_time),
            finish_time: clock_string(shift.finish_time),
            num_of_shifts_per_day: shift.num_of_shifts_per_day,
            location: location.into(),
            status: shift.status,
            clock_in_time: shift.clock_in_time.map(clock_string),
            clock_out_time: shift.clock_out_time.map(clock_string),
            created_at: shift.created_at,
            updated_at: shift.updated_at,
        }
    }
}

/// Minimal projection returned by a successful clock-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockInView {
    /// Shift identifier.
    pub id: Uuid,
    /// The status after the transition (`In Progress`).
    pub status: ShiftStatus,
    /// The recorded clock-in time as `HH:MM`.
    pub clock_in_time: Option<String>,
}

impl ClockInView {
    /// Projects the post-transition shift.
    pub fn from_shift(shift: &Shift) -> Self {
        Self {
            id: shift.id,
            status: shift.status,
            clock_in_time: shift.clock_in_time.map(clock_string),
        }
    }
}

/// Minimal projection returned by a successful clock-out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockOutView {
    /// Shift identifier.
    pub id: Uuid,
    /// The status after the transition (`Completed`).
    pub status: ShiftStatus,
    /// The recorded clock-out time as `HH:MM`.
    pub clock_out_time: Option<String>,
}

impl ClockOutView {
    /// Projects the post-transition shift.
    pub fn from_shift(shift: &Shift) -> Self {
        Self {
            id: shift.id,
            status: shift.status,
            clock_out_time: shift.clock_out_time.map(clock_string),
        }
    }
}
