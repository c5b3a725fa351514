//! The document-store boundary.
//!
//! The engine treats persistence as a generic document store with indexed
//! lookup by identifier and by foreign-key reference. [`MemoryStore`] is
//! the bundled implementation; a deployment wanting durable or
//! version-checked storage swaps it at this seam; the command service is
//! the only consumer.

mod memory;

pub use memory::MemoryStore;

use thiserror::Error;
use uuid::Uuid;

use crate::models::{Shift, ShiftStatus};

/// A failure in the persistence layer.
///
/// The engine does not interpret these: they surface to callers as a
/// generic internal failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store failed.
    #[error("store backend failure: {message}")]
    Backend {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

/// A filter over the shift collection.
///
/// An unset field matches everything; set fields must all match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShiftFilter {
    /// Restrict to shifts assigned to this worker.
    pub worker: Option<Uuid>,
    /// Restrict to shifts in this status.
    pub status: Option<ShiftStatus>,
}

impl ShiftFilter {
    /// A filter matching every shift.
    pub fn all() -> Self {
        Self::default()
    }

    /// A filter matching shifts assigned to `worker`.
    pub fn for_worker(worker: Uuid) -> Self {
        Self {
            worker: Some(worker),
            status: None,
        }
    }

    /// Narrows the filter to shifts in `status`.
    pub fn with_status(mut self, status: ShiftStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns true if `shift` satisfies every set field.
    pub fn matches(&self, shift: &Shift) -> bool {
        self.worker.is_none_or(|worker| shift.worker == worker)
            && self.status.is_none_or(|status| shift.status == status)
    }
}
