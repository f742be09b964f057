//! Optional `dirsweep.toml` next to the transcript being analyzed.

use crate::config::CONFIG_FILE_NAME;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};
use std::path::Path;

/// Add `<dir>/dirsweep.toml` to the builder; a missing file is not an error.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    dir: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    Ok(builder.add_source(File::from(path.as_path()).required(false)))
}
