//! Error types for transcript parsing, tree replay and the deletion query.

use crate::types::Size;
use thiserror::Error;

/// A single transcript line did not match any recognized shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unrecognized line: {0:?}")]
    UnrecognizedLine(String),

    #[error("cd command has no path argument: {0:?}")]
    MissingCdArgument(String),

    #[error("dir entry has no name: {0:?}")]
    MissingDirName(String),

    #[error("file entry size is not a valid size: {0:?}")]
    MissingFileSize(String),

    #[error("file entry has no name: {0:?}")]
    MissingFileName(String),
}

/// A `cd` could not be resolved against the tree built so far.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("cannot navigate up from the root directory")]
    NoParent,

    #[error("no directory named {name:?} under {cwd}")]
    NoSuchChild { name: String, cwd: String },
}

/// Size aggregation or the deletion query could not produce an answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("no directory frees at least {need_to_free} (total used: {used})")]
    NoCandidate { need_to_free: Size, used: Size },

    #[error("total size of {path} does not fit in a 64-bit count")]
    SizeOverflow { path: String },
}

/// Crate-level error carrying the context needed to locate the failure.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },

    #[error("line {line}: {source}")]
    Navigation {
        line: usize,
        #[source]
        source: NavigationError,
    },

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<config::ConfigError> for SweepError {
    fn from(err: config::ConfigError) -> Self {
        SweepError::Config(err.to_string())
    }
}
