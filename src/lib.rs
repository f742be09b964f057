//! Dirsweep: Directory Sizes from Shell Transcripts
//!
//! Rebuilds a directory hierarchy from a recorded `cd`/`ls` session, computes
//! the recursive size of every directory, and finds the smallest directory
//! whose deletion frees enough space for an update.

pub mod analysis;
pub mod config;
pub mod error;
pub mod logging;
pub mod query;
pub mod sizes;
pub mod tooling;
pub mod transcript;
pub mod tree;
pub mod types;

pub use analysis::{smallest_deletion_size, Analysis, DeletionReport};
pub use error::{NavigationError, ParseError, QueryError, SweepError};
pub use query::{DeletionPlan, DiskBudget};
pub use transcript::{parse_line, parse_transcript, CdTarget, ParsedLine};
pub use tree::{DirectoryTree, TreeBuilder};
pub use types::{DirId, Size};
