//! The engine's service layer.
//!
//! [`ShiftService`] owns the write path (create/update/delete/cancel, the
//! clock actions and batch reconciliation) and the read path (the paginated
//! query engine). Location resolution and response denormalization live in
//! their own submodules.

mod commands;
mod locations;
mod queries;
mod views;

pub use commands::{
    BatchError, BatchErrorDetail, BatchOutcome, BatchShiftItem, ShiftDraft, ShiftPatch,
    ShiftService,
};
pub use locations::{LocationDraft, find_or_create};
pub use queries::{Pagination, ShiftPage, ShiftQueryOptions, SortKey, SortOrder};
pub use views::{ClockInView, ClockOutView, LocationSummary, ShiftView, WorkerSummary};
