//! Configuration for codac tooling.
//!
//! Layers, lowest precedence first: built-in defaults, the global file
//! (`<config dir>/codac/config.toml`), the workspace file (`codac.toml`),
//! then `CODAC_*` environment variables with `__` as the nesting separator.

mod facade;
mod sources;

pub use facade::ConfigLoader;

use crate::attendance::AttendanceRules;
use crate::logging::LoggingConfig;
use crate::types::DEFAULT_EDITABLE_WINDOW_DAYS;
use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodacConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub attendance: AttendanceConfig,
}

/// Attendance section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceConfig {
    /// Trailing edit window in days, today included
    #[serde(default = "default_editable_window_days")]
    pub editable_window_days: u32,
}

fn default_editable_window_days() -> u32 {
    DEFAULT_EDITABLE_WINDOW_DAYS
}

impl Default for AttendanceConfig {
    fn default() -> Self {
        Self {
            editable_window_days: default_editable_window_days(),
        }
    }
}

impl AttendanceConfig {
    pub fn rules(&self) -> AttendanceRules {
        AttendanceRules::new(self.editable_window_days)
    }
}
