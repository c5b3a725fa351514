//! HTTP API for the Shift Scheduling Engine.
//!
//! This module provides the axum router, request/response types and
//! shared application state for the engine's HTTP surface.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ClockActionRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
