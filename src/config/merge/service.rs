//! MergeService: orchestrates sources, applies merge policy, deserializes to SweepConfig.

use crate::config::sources::{explicit_file, workspace_file};
use crate::config::SweepConfig;
use config::ConfigError;
use std::path::Path;

use super::merge_policy;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Precedence: defaults (lowest) -> `dirsweep.toml` in `dir` (highest).
    pub fn load(dir: &Path) -> Result<SweepConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = workspace_file::add_to_builder(builder, dir)?;

        let config = builder.build()?;
        let config: SweepConfig = config.try_deserialize()?;
        Ok(config)
    }

    /// Precedence: defaults (lowest) -> the given file (highest).
    pub fn load_from_file(path: &Path) -> Result<SweepConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = explicit_file::add_to_builder(builder, path)?;

        let config = builder.build()?;
        let config: SweepConfig = config.try_deserialize()?;
        Ok(config)
    }
}
