//! Configuration sources layered on top of the defaults.

pub mod explicit_file;
pub mod workspace_file;
