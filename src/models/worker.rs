//! Worker reference model.
//!
//! Workers are owned by the authentication collaborator; the engine only
//! reads the fields it needs for existence checks and response
//! denormalization.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A worker a shift can be assigned to.
///
/// The engine never creates or mutates workers; it resolves the reference
/// at write time and embeds these fields into denormalized shift views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    /// Unique identifier for the worker.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// The worker's role label (e.g. "Support Worker").
    pub role: String,
}
