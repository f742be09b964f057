//! Defaults layer: the lowest-precedence source of every merge.

use crate::query::{DEFAULT_REQUIRED_FREE_SPACE, DEFAULT_TOTAL_DISK_SPACE};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Start a builder seeded with the compiled-in capacity constants.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("disk.total_disk_space", DEFAULT_TOTAL_DISK_SPACE as i64)?
        .set_default("disk.required_free_space", DEFAULT_REQUIRED_FREE_SPACE as i64)
}
