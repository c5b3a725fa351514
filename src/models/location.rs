//! Location model.
//!
//! Locations are deduplicated by name: the first shift referencing a name
//! creates the record, later shifts reuse it. The engine never deletes a
//! location.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Geographic coordinates of a location.
///
/// Longitude is expected in `[-180, 180]` and latitude in `[-90, 90]`;
/// range enforcement belongs to the input-validation collaborator, not
/// this engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Latitude in decimal degrees.
    pub latitude: f64,
}

/// A place where shifts take place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Unique identifier for the location.
    pub id: Uuid,
    /// Display name; the natural deduplication key within the engine.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Postal code.
    pub post_code: String,
    /// Distance from a reference point, if known.
    pub distance: Option<f64>,
    /// Electoral constituency label, if known.
    pub constituency: Option<String>,
    /// Administrative district label, if known.
    pub admin_district: Option<String>,
    /// Geographic coordinates.
    pub coordinates: Coordinates,
    /// Whether the record has been verified against an external gazetteer.
    pub verified: bool,
}
