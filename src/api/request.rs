//! Request types for the shift API.
//!
//! The shift payloads themselves ([`crate::service::ShiftDraft`],
//! [`crate::service::ShiftPatch`], [`crate::service::BatchShiftItem`]) are
//! the engine's documented input contract and deserialize directly in the
//! handlers; this module holds the remaining route-level bodies and pins
//! the wire shapes with tests.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of the clock-in and clock-out endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockActionRequest {
    /// The worker performing the clock action.
    pub user: Uuid,
}
