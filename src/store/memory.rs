//! In-memory document store.

use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Location, Shift, ShiftStatus, Worker};

use super::{ShiftFilter, StoreResult};

/// An in-memory document store over `RwLock`'d maps.
///
/// Each method takes and releases a lock on one collection, so every call
/// is atomic per record; [`MemoryStore::replace_shift_if_status`] extends
/// that to a status-gated read-modify-write, which is what keeps racing
/// clock actions from double-transitioning a shift. Cross-call atomicity
/// is not provided; last write wins, as documented for the engine.
#[derive(Debug, Default)]
pub struct MemoryStore {
    shifts: RwLock<HashMap<Uuid, Shift>>,
    workers: RwLock<HashMap<Uuid, Worker>>,
    locations: RwLock<HashMap<Uuid, Location>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new shift record.
    pub async fn insert_shift(&self, shift: Shift) -> StoreResult<()> {
        self.shifts.write().await.insert(shift.id, shift);
        Ok(())
    }

    /// Looks up a shift by id.
    pub async fn shift(&self, id: Uuid) -> StoreResult<Option<Shift>> {
        Ok(self.shifts.read().await.get(&id).cloned())
    }

    /// Replaces a shift record only if the stored copy still carries
    /// `expected` as its status.
    ///
    /// Returns `true` when the write was applied, `false` when the record
    /// is missing or its status changed underneath the caller.
    pub async fn replace_shift_if_status(
        &self,
        shift: Shift,
        expected: ShiftStatus,
    ) -> StoreResult<bool> {
        let mut shifts = self.shifts.write().await;
        match shifts.get(&shift.id) {
            Some(current) if current.status == expected => {
                shifts.insert(shift.id, shift);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Removes a shift record. Returns `true` if one existed.
    pub async fn remove_shift(&self, id: Uuid) -> StoreResult<bool> {
        Ok(self.shifts.write().await.remove(&id).is_some())
    }

    /// Returns every shift satisfying `filter`, in unspecified order.
    pub async fn shifts_matching(&self, filter: &ShiftFilter) -> StoreResult<Vec<Shift>> {
        Ok(self
            .shifts
            .read()
            .await
            .values()
            .filter(|shift| filter.matches(shift))
            .cloned()
            .collect())
    }

    /// Inserts a worker record (seeding surface for tests and embedders;
    /// workers are otherwise owned by the authentication collaborator).
    pub async fn insert_worker(&self, worker: Worker) -> StoreResult<()> {
        self.workers.write().await.insert(worker.id, worker);
        Ok(())
    }

    /// Looks up a worker by id.
    pub async fn worker(&self, id: Uuid) -> StoreResult<Option<Worker>> {
        Ok(self.workers.read().await.get(&id).cloned())
    }

    /// Inserts a location record.
    pub async fn insert_location(&self, location: Location) -> StoreResult<()> {
        self.locations.write().await.insert(location.id, location);
        Ok(())
    }

    /// Looks up a location by id.
    pub async fn location(&self, id: Uuid) -> StoreResult<Option<Location>> {
        Ok(self.locations.read().await.get(&id).cloned())
    }

    /// Looks up a location by its name (the engine's dedup key).
    ///
    /// The name index is a linear scan here; a real document store would
    /// back this with a unique index on `name`.
    pub async fn location_by_name(&self, name: &str) -> StoreResult<Option<Location>> {
        Ok(self
            .locations
            .read()
            .await
            .values()
            .find(|location| location.name == name)
            .cloned())
    }

    /// Returns the number of location records.
    pub async fn location_count(&self) -> StoreResult<usize> {
        Ok(self.locations.read().await.len())
    }
}
