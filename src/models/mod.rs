//! Core data models for the Shift Scheduling Engine.
//!
//! This module contains the domain entities the engine operates on: the
//! shift itself (with its status state machine), and the worker and
//! location records it references.

mod location;
mod shift;
mod worker;

pub use location::{Coordinates, Location};
pub use shift::{Shift, ShiftStatus, ShiftType};
pub use worker::Worker;
