//! Configuration types.
//!
//! Strongly-typed structures deserialized from the engine's YAML
//! configuration file. Every field has a built-in default so a partial
//! file (or none at all) still yields a working configuration.

use serde::Deserialize;

use crate::scheduling::{
    ClockPolicy, DEFAULT_EARLY_CLOCK_IN_MINUTES, DEFAULT_MINIMUM_CLOCK_OUT_MINUTES,
};

/// The complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Clock-action buffer settings.
    #[serde(default)]
    pub clock: ClockConfig,
    /// Pagination settings for the query engine.
    #[serde(default)]
    pub pagination: PaginationConfig,
}

impl EngineConfig {
    /// Builds the [`ClockPolicy`] described by this configuration.
    pub fn clock_policy(&self) -> ClockPolicy {
        ClockPolicy::new(
            self.clock.early_clock_in_minutes,
            self.clock.minimum_clock_out_minutes,
        )
    }
}

/// Clock-action buffer settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClockConfig {
    /// Minutes a worker may clock in before the shift starts.
    #[serde(default = "default_early_clock_in")]
    pub early_clock_in_minutes: i64,
    /// Minutes before the finish instant after which clock-out is allowed.
    #[serde(default = "default_minimum_clock_out")]
    pub minimum_clock_out_minutes: i64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            early_clock_in_minutes: default_early_clock_in(),
            minimum_clock_out_minutes: default_minimum_clock_out(),
        }
    }
}

/// Pagination settings for the query engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaginationConfig {
    /// Page size used when a query does not specify one.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
    /// Largest page size a query may request.
    #[serde(default = "default_max_limit")]
    pub max_limit: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_early_clock_in() -> i64 {
    DEFAULT_EARLY_CLOCK_IN_MINUTES
}

fn default_minimum_clock_out() -> i64 {
    DEFAULT_MINIMUM_CLOCK_OUT_MINUTES
}

fn default_limit() -> u32 {
    10
}

fn default_max_limit() -> u32 {
    1000
}
