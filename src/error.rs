//! Error types for the Shift Scheduling Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every refusal the engine can produce. Each variant carries a stable
//! machine-readable code (see [`EngineError::error_code`]) alongside its
//! human-readable message, so batch reconciliation and the HTTP layer can
//! report failures without string matching.

use chrono::NaiveDateTime;
use thiserror::Error;
use uuid::Uuid;

use crate::models::ShiftStatus;
use crate::store::StoreError;

/// The main error type for the Shift Scheduling Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use shift_engine::error::EngineError;
///
/// let error = EngineError::AlreadyCancelled;
/// assert_eq!(error.to_string(), "Shift is already cancelled");
/// assert_eq!(error.error_code(), "SHIFT_ALREADY_CANCELLED");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The referenced shift does not exist.
    #[error("Shift not found: {id}")]
    ShiftNotFound {
        /// The shift identifier that did not resolve.
        id: Uuid,
    },

    /// The referenced worker does not exist.
    #[error("User not found: {id}")]
    WorkerNotFound {
        /// The worker identifier that did not resolve.
        id: Uuid,
    },

    /// The referenced location does not exist.
    #[error("Location not found: {id}")]
    LocationNotFound {
        /// The location identifier that did not resolve.
        id: Uuid,
    },

    /// The operation is not legal for the shift's current status.
    #[error("Shift cannot be modified while its status is {status}")]
    InvalidStatus {
        /// The status the shift currently carries.
        status: ShiftStatus,
    },

    /// Cancel was requested for a shift that is already cancelled.
    #[error("Shift is already cancelled")]
    AlreadyCancelled,

    /// Cancel was requested for a shift that has been completed.
    #[error("Cannot cancel a completed shift")]
    CancelCompleted,

    /// The acting worker is not the one assigned to the shift.
    #[error("Worker {worker_id} is not assigned to shift {shift_id}")]
    NotAssigned {
        /// The shift the action targeted.
        shift_id: Uuid,
        /// The worker who attempted the action.
        worker_id: Uuid,
    },

    /// Clock-in was attempted before the buffered window opens.
    #[error("Too early to clock in: the window opens at {opens_at} ({minutes_early} minutes from now)")]
    ClockInTooEarly {
        /// How many whole minutes remain until the window opens.
        minutes_early: i64,
        /// The instant the clock-in window opens.
        opens_at: NaiveDateTime,
    },

    /// Clock-in was attempted after the shift's finish instant.
    #[error("Shift time has expired: the shift finished at {finished_at}")]
    ClockInExpired {
        /// The instant the shift finished.
        finished_at: NaiveDateTime,
    },

    /// Clock-out was attempted before the buffered lower bound.
    #[error("Cannot clock out more than {buffer_minutes} minutes before the shift finishes (allowed from {allowed_from})")]
    ClockOutTooSoon {
        /// The configured minimum clock-out buffer in minutes.
        buffer_minutes: i64,
        /// The earliest instant clock-out is permitted.
        allowed_from: NaiveDateTime,
    },

    /// A clock time string did not match the 24-hour `HH:MM` shape.
    #[error("Invalid clock time '{value}': expected HH:MM")]
    InvalidTimeFormat {
        /// The rejected input.
        value: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The persistence layer failed in a way the engine does not interpret.
    #[error("Persistence failure: {0}")]
    Store(#[from] StoreError),
}

impl EngineError {
    /// Returns the stable machine-readable code for this error.
    ///
    /// Codes are part of the external contract: batch reconciliation embeds
    /// them in its `errors[]` entries and the HTTP layer returns them as the
    /// `code` field of error responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            EngineError::ShiftNotFound { .. } => "SHIFT_NOT_FOUND",
            EngineError::WorkerNotFound { .. } => "WORKER_NOT_FOUND",
            EngineError::LocationNotFound { .. } => "LOCATION_NOT_FOUND",
            EngineError::InvalidStatus { .. } => "INVALID_SHIFT_STATUS",
            EngineError::AlreadyCancelled => "SHIFT_ALREADY_CANCELLED",
            EngineError::CancelCompleted => "SHIFT_COMPLETED",
            EngineError::NotAssigned { .. } => "NOT_ASSIGNED",
            EngineError::ClockInTooEarly { .. } => "CLOCK_IN_TOO_EARLY",
            EngineError::ClockInExpired { .. } => "CLOCK_IN_EXPIRED",
            EngineError::ClockOutTooSoon { .. } => "CLOCK_OUT_TOO_SOON",
            EngineError::InvalidTimeFormat { .. } => "INVALID_TIME_FORMAT",
            EngineError::ConfigNotFound { .. } => "CONFIG_NOT_FOUND",
            EngineError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            EngineError::Store(_) => "STORE_ERROR",
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
