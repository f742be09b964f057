//! Configuration
//!
//! Layered configuration for the capacity constants and logging, loaded with
//! the `config` crate. Compiled-in defaults come first; an optional
//! `dirsweep.toml` or an explicit file may override them.

pub mod facade;
pub mod merge;
pub mod sources;

pub use facade::ConfigLoader;

use crate::error::SweepError;
use crate::logging::LoggingConfig;
use crate::query::DiskBudget;
use serde::{Deserialize, Serialize};

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "dirsweep.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    #[serde(default)]
    pub disk: DiskBudget,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SweepConfig {
    /// Reject capacities the deletion query cannot work with.
    pub fn validate(&self) -> Result<(), SweepError> {
        let disk = &self.disk;
        if disk.total_disk_space == 0 {
            return Err(SweepError::Config(
                "disk.total_disk_space must be positive".to_string(),
            ));
        }
        if disk.required_free_space == 0 {
            return Err(SweepError::Config(
                "disk.required_free_space must be positive".to_string(),
            ));
        }
        if disk.required_free_space > disk.total_disk_space {
            return Err(SweepError::Config(format!(
                "disk.required_free_space ({}) exceeds disk.total_disk_space ({})",
                disk.required_free_space, disk.total_disk_space
            )));
        }
        Ok(())
    }
}
