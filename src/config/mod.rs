//! Engine configuration.
//!
//! The engine's tunables (clock-action buffers and pagination defaults)
//! are loaded from a YAML file, with built-in defaults used when a section
//! or the whole file is absent.

mod loader;
mod types;

pub use types::{ClockConfig, EngineConfig, PaginationConfig};
