//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::SweepConfig;
use crate::error::SweepError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load defaults overlaid with `dirsweep.toml` from `dir`, if present.
    pub fn load(dir: &Path) -> Result<SweepConfig, SweepError> {
        let config = MergeService::load(dir)?;
        config.validate()?;
        Ok(config)
    }

    /// Load defaults overlaid with a specific file, which must exist.
    pub fn load_from_file(path: &Path) -> Result<SweepConfig, SweepError> {
        let config = MergeService::load_from_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Create default configuration.
    pub fn default() -> SweepConfig {
        SweepConfig::default()
    }
}
