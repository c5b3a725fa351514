//! Location resolution.
//!
//! Shift payloads carry a full location description, but locations are
//! deduplicated by name: the first reference creates the record and every
//! later reference reuses it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{Coordinates, Location};
use crate::store::MemoryStore;

/// A location payload submitted with a shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDraft {
    /// Display name; the deduplication key.
    pub name: String,
    /// Street address.
    pub address: String,
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
    /// Geographic coordinates. The alias covers the historical spelling
    /// used by existing clients.
    #[serde(alias = "cordinates")]
    pub coordinates: Coordinates,
    /// Whether the record has been verified against an external gazetteer.
    #[serde(default)]
    pub verified: bool,
}

/// Finds the location named in `draft`, creating it on first reference.
///
/// When a location with that name already exists, the stored record is
/// returned as-is and the draft's details are ignored, even when they
/// differ. The lookup and the insert are two separate store calls, so two
/// racing creates can produce duplicate same-named records; a store-level
/// unique index on `name` is the documented remedy for deployments that
/// need the stronger guarantee.
pub async fn find_or_create(store: &MemoryStore, draft: &LocationDraft) -> EngineResult<Location> {
    if let Some(existing) = store.location_by_name(&draft.name).await? {
        return Ok(existing);
    }

    let location = Location {
        id: Uuid::new_v4(),
        name: draft.name.clone(),
        address: draft.address.clone(),
        post_code: draft.post_code.clone(),
        distance: draft.distance,
        constituency: draft.constituency.clone(),
        admin_district: draft.admin_district.clone(),
        coordinates: draft.coordinates,
        verified: draft.verified,
    };
    store.insert_location(location.clone()).await?;
    Ok(location)
}
