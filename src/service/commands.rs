//! Shift command service.
//!
//! Implements the write path: create, update, delete, cancel, the clock
//! actions and batch reconciliation. Every command takes the current
//! instant as a parameter (the HTTP layer injects the process clock), so
//! the service itself stays deterministic and testable.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::config::{EngineConfig, PaginationConfig};
use crate::error::{EngineError, EngineResult};
use crate::models::{Shift, ShiftStatus, ShiftType};
use crate::scheduling::{ClockPolicy, shift_window};
use crate::store::MemoryStore;

use super::locations::{LocationDraft, find_or_create};
use super::views::{ClockInView, ClockOutView, ShiftView};

/// The payload for creating a shift (and the body of a batch item).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftDraft {
    /// Short description of the work.
    pub title: String,
    /// The role the worker fills.
    pub role: String,
    /// Descriptive tags; non-empty.
    pub type_of_shift: Vec<ShiftType>,
    /// The worker to assign.
    pub user: Uuid,
    /// Calendar date anchoring the shift.
    pub date: NaiveDate,
    /// Start clock time, `HH:MM`.
    pub start_time: String,
    /// Finish clock time, `HH:MM`; at or before `start_time` means the
    /// shift runs overnight.
    pub finish_time: String,
    /// Informational head-count for the day.
    #[serde(default = "default_num_of_shifts")]
    pub num_of_shifts_per_day: u32,
    /// The location the shift takes place at.
    pub location: LocationDraft,
}

fn default_num_of_shifts() -> u32 {
    1
}

/// An all-optional patch applied to a `Scheduled` shift.
///
/// Unset fields leave the stored value untouched; there is no implicit
/// defaulting on update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShiftPatch {
    /// New title, if supplied.
    pub title: Option<String>,
    /// New role, if supplied.
    pub role: Option<String>,
    /// New tag set, if supplied.
    pub type_of_shift: Option<Vec<ShiftType>>,
    /// New assigned worker, if supplied; re-validated against the store.
    pub user: Option<Uuid>,
    /// New calendar date, if supplied.
    pub date: Option<NaiveDate>,
    /// New start clock time, if supplied.
    pub start_time: Option<String>,
    /// New finish clock time, if supplied.
    pub finish_time: Option<String>,
    /// New head-count, if supplied.
    pub num_of_shifts_per_day: Option<u32>,
    /// New location payload, if supplied; resolved by name.
    pub location: Option<LocationDraft>,
}

impl ShiftPatch {
    /// Returns true if the patch touches any scheduling field, which
    /// forces the start/finish pair to be recomputed as a whole.
    pub fn touches_window(&self) -> bool {
        self.date.is_some() || self.start_time.is_some() || self.finish_time.is_some()
    }
}

impl From<ShiftDraft> for ShiftPatch {
    fn from(draft: ShiftDraft) -> Self {
        Self {
            title: Some(draft.title),
            role: Some(draft.role),
            type_of_shift: Some(draft.type_of_shift),
            user: Some(draft.user),
            date: Some(draft.date),
            start_time: Some(draft.start_time),
            finish_time: Some(draft.finish_time),
            num_of_shifts_per_day: Some(draft.num_of_shifts_per_day),
            location: Some(draft.location),
        }
    }
}

/// One entry of a batch reconciliation request: a full shift payload,
/// plus an `id` when the entry targets an existing shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchShiftItem {
    /// The shift to update; absent for creates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// The shift payload.
    #[serde(flatten)]
    pub shift: ShiftDraft,
}

/// The structured reason attached to a failed batch item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchErrorDetail {
    /// Human-readable message.
    pub message: String,
    /// Stable machine-readable code.
    pub error_code: String,
}

/// A failed batch item, echoing its original position and payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchError {
    /// Zero-based position of the item in the submitted list.
    pub index: usize,
    /// The offending payload, echoed back.
    pub shift: BatchShiftItem,
    /// Why the item failed.
    pub error: BatchErrorDetail,
}

/// The outcome of a batch reconciliation.
///
/// Successful creates, successful updates and failures each keep their
/// input order internally; order is not preserved across the three lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchOutcome {
    /// Successfully created shifts, in input order.
    pub created: Vec<ShiftView>,
    /// Successfully updated shifts, in input order.
    pub updated: Vec<ShiftView>,
    /// Failed items, in input order.
    pub errors: Vec<BatchError>,
}

/// The shift command service.
///
/// Request-scoped and stateless between invocations: each command loads
/// what it needs, applies the state machine and persists the result.
/// Concurrent edits against the same shift are resolved by the store's
/// status-gated write: the loser observes a state mismatch instead of
/// double-transitioning.
#[derive(Debug, Clone)]
pub struct ShiftService {
    pub(crate) store: Arc<MemoryStore>,
    pub(crate) policy: ClockPolicy,
    pub(crate) pagination: PaginationConfig,
}

impl ShiftService {
    /// Creates a service over `store`, configured by `config`.
    pub fn new(store: Arc<MemoryStore>, config: &EngineConfig) -> Self {
        Self {
            store,
            policy: config.clock_policy(),
            pagination: config.pagination.clone(),
        }
    }

    /// Creates a new shift.
    ///
    /// The assigned worker must exist; the location is resolved by name,
    /// created on first reference. The shift starts life `Scheduled` with
    /// both clock fields unset.
    pub async fn create(&self, draft: ShiftDraft, now: NaiveDateTime) -> EngineResult<ShiftView> {
        let worker = self
            .store
            .worker(draft.user)
            .await?
            .ok_or(EngineError::WorkerNotFound { id: draft.user })?;
        let location = find_or_create(&self.store, &draft.location).await?;
        let window = shift_window(draft.date, &draft.start_time, &draft.finish_time)?;

        let shift = Shift {
            id: Uuid::new_v4(),
            title: draft.title,
            role: draft.role,
            type_of_shift: draft.type_of_shift,
            worker: worker.id,
            date: draft.date,
            start_time: window.start,
            finish_time: window.finish,
            num_of_shifts_per_day: draft.num_of_shifts_per_day,
            location: location.id,
            status: ShiftStatus::Scheduled,
            clock_in_time: None,
            clock_out_time: None,
            created_at: now,
            updated_at: now,
        };
        self.store.insert_shift(shift.clone()).await?;
        debug!(shift_id = %shift.id, worker_id = %shift.worker, "shift created");

        Ok(ShiftView::assemble(shift, worker, location))
    }

    /// Applies `patch` to a `Scheduled` shift.
    ///
    /// Only supplied fields change. If any of date/start/finish is
    /// supplied, the window is recomputed with the stored values filling
    /// the gaps, so a partial time edit still yields a consistent pair.
    pub async fn update(
        &self,
        id: Uuid,
        patch: ShiftPatch,
        now: NaiveDateTime,
    ) -> EngineResult<ShiftView> {
        let mut shift = self.load_shift(id).await?;
        shift.ensure_editable()?;

        if let Some(user) = patch.user {
            if self.store.worker(user).await?.is_none() {
                return Err(EngineError::WorkerNotFound { id: user });
            }
            shift.worker = user;
        }
        if let Some(location) = &patch.location {
            shift.location = find_or_create(&self.store, location).await?.id;
        }
        if patch.touches_window() {
            let date = patch.date.unwrap_or(shift.date);
            let start = patch
                .start_time
                .clone()
                .unwrap_or_else(|| shift.start_time.format("%H:%M").to_string());
            let finish = patch
                .finish_time
                .clone()
                .unwrap_or_else(|| shift.finish_time.format("%H:%M").to_string());
            let window = shift_window(date, &start, &finish)?;
            shift.date = date;
            shift.start_time = window.start;
            shift.finish_time = window.finish;
        }
        if let Some(title) = patch.title {
            shift.title = title;
        }
        if let Some(role) = patch.role {
            shift.role = role;
        }
        if let Some(tags) = patch.type_of_shift {
            shift.type_of_shift = tags;
        }
        if let Some(count) = patch.num_of_shifts_per_day {
            shift.num_of_shifts_per_day = count;
        }
        shift.touch(now);

        if !self
            .store
            .replace_shift_if_status(shift.clone(), ShiftStatus::Scheduled)
            .await?
        {
            return Err(self.status_conflict(id).await);
        }
        self.view(shift).await
    }

    /// Permanently removes a shift, whatever its status.
    pub async fn delete(&self, id: Uuid) -> EngineResult<()> {
        if !self.store.remove_shift(id).await? {
            return Err(EngineError::ShiftNotFound { id });
        }
        debug!(shift_id = %id, "shift deleted");
        Ok(())
    }

    /// Cancels a `Scheduled` shift.
    pub async fn cancel(&self, id: Uuid, now: NaiveDateTime) -> EngineResult<ShiftView> {
        let mut shift = self.load_shift(id).await?;
        shift.cancel(now)?;

        if !self
            .store
            .replace_shift_if_status(shift.clone(), ShiftStatus::Scheduled)
            .await?
        {
            return Err(self.status_conflict(id).await);
        }
        self.view(shift).await
    }

    /// Clocks the assigned worker in.
    pub async fn clock_in(
        &self,
        id: Uuid,
        worker_id: Uuid,
        now: NaiveDateTime,
    ) -> EngineResult<ClockInView> {
        let mut shift = self.load_shift(id).await?;
        if !shift.is_assigned_to(worker_id) {
            return Err(EngineError::NotAssigned {
                shift_id: id,
                worker_id,
            });
        }
        shift.clock_in(&self.policy, now)?;

        if !self
            .store
            .replace_shift_if_status(shift.clone(), ShiftStatus::Scheduled)
            .await?
        {
            return Err(self.status_conflict(id).await);
        }
        Ok(ClockInView::from_shift(&shift))
    }

    /// Clocks the assigned worker out.
    pub async fn clock_out(
        &self,
        id: Uuid,
        worker_id: Uuid,
        now: NaiveDateTime,
    ) -> EngineResult<ClockOutView> {
        let mut shift = self.load_shift(id).await?;
        if !shift.is_assigned_to(worker_id) {
            return Err(EngineError::NotAssigned {
                shift_id: id,
                worker_id,
            });
        }
        shift.clock_out(&self.policy, now)?;

        if !self
            .store
            .replace_shift_if_status(shift.clone(), ShiftStatus::InProgress)
            .await?
        {
            return Err(self.status_conflict(id).await);
        }
        Ok(ClockOutView::from_shift(&shift))
    }

    /// Reconciles a mixed list of creates (no `id`) and updates (`id`
    /// present).
    ///
    /// Items are processed independently, strictly in input order. A
    /// failure is captured as an `errors[]` entry and processing
    /// continues; this is the engine's only place where failures are
    /// absorbed rather than propagated. No retries, no all-or-nothing
    /// semantics.
    pub async fn reconcile(
        &self,
        items: Vec<BatchShiftItem>,
        now: NaiveDateTime,
    ) -> EngineResult<BatchOutcome> {
        let mut outcome = BatchOutcome::default();

        for (index, item) in items.into_iter().enumerate() {
            match item.id {
                Some(id) => {
                    match self.update(id, ShiftPatch::from(item.shift.clone()), now).await {
                        Ok(view) => outcome.updated.push(view),
                        Err(error) => outcome.errors.push(Self::batch_error(index, item, error)),
                    }
                }
                None => match self.create(item.shift.clone(), now).await {
                    Ok(view) => outcome.created.push(view),
                    Err(error) => outcome.errors.push(Self::batch_error(index, item, error)),
                },
            }
        }

        debug!(
            created = outcome.created.len(),
            updated = outcome.updated.len(),
            failed = outcome.errors.len(),
            "batch reconciled"
        );
        Ok(outcome)
    }

    fn batch_error(index: usize, item: BatchShiftItem, error: EngineError) -> BatchError {
        BatchError {
            index,
            shift: item,
            error: BatchErrorDetail {
                message: error.to_string(),
                error_code: error.error_code().to_string(),
            },
        }
    }

    pub(crate) async fn load_shift(&self, id: Uuid) -> EngineResult<Shift> {
        self.store
            .shift(id)
            .await?
            .ok_or(EngineError::ShiftNotFound { id })
    }

    /// Builds the refusal for a status-gated write that lost a race: the
    /// record either vanished or moved on to another status.
    async fn status_conflict(&self, id: Uuid) -> EngineError {
        match self.store.shift(id).await {
            Ok(Some(current)) => EngineError::InvalidStatus {
                status: current.status,
            },
            Ok(None) => EngineError::ShiftNotFound { id },
            Err(error) => error.into(),
        }
    }

    /// Denormalizes a shift by resolving its references.
    pub(crate) async fn view(&self, shift: Shift) -> EngineResult<ShiftView> {
        let worker = self
            .store
            .worker(shift.worker)
            .await?
            .ok_or(EngineError::WorkerNotFound { id: shift.worker })?;
        let location = self
            .store
            .location(shift.location)
            .await?
            .ok_or(EngineError::LocationNotFound { id: shift.location })?;
        Ok(ShiftView::assemble(shift, worker, location))
    }
}
