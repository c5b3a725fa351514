//! Application state for the shift API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::service::ShiftService;

/// Shared application state.
///
/// Wraps the shift service so every handler works against the same store
/// and configuration.
#[derive(Clone)]
pub struct AppState {
    service: Arc<ShiftService>,
}

impl AppState {
    /// Creates a new application state around the given service.
    pub fn new(service: ShiftService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Returns a reference to the shift service.
    pub fn service(&self) -> &ShiftService {
        &self.service
    }
}
