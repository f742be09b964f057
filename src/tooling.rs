//! Tooling & Integration Layer
//!
//! Command-line entry points wrapping the analysis pipeline.

pub mod cli;

pub use cli::{Cli, CliContext};
