//! Transcript Lines
//!
//! Structured form of a recorded shell session: `cd` and `ls` commands plus
//! the directory listing lines printed by `ls`. Each line is interpreted on its
//! own; navigation semantics live in [`crate::tree::TreeBuilder`].

mod parser;

pub use parser::parse_line;

use crate::error::{ParseError, SweepError};
use crate::types::Size;
use std::fmt;
use std::str::FromStr;

/// Target of a `cd` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CdTarget {
    Root,
    Up,
    Child(String),
}

/// One parsed transcript line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Cd(CdTarget),
    Ls,
    File { size: Size, name: String },
    Dir { name: String },
}

impl FromStr for ParsedLine {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_line(s)
    }
}

impl fmt::Display for ParsedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsedLine::Cd(CdTarget::Root) => write!(f, "$ cd /"),
            ParsedLine::Cd(CdTarget::Up) => write!(f, "$ cd .."),
            ParsedLine::Cd(CdTarget::Child(name)) => write!(f, "$ cd {}", name),
            ParsedLine::Ls => write!(f, "$ ls"),
            ParsedLine::File { size, name } => write!(f, "{} {}", size, name),
            ParsedLine::Dir { name } => write!(f, "dir {}", name),
        }
    }
}

/// Parse a whole transcript.
///
/// Splits on line boundaries (`\n` or `\r\n`); a single trailing newline does
/// not produce an extra empty line. The first failing line aborts the parse and
/// is reported with its 1-based line number.
pub fn parse_transcript(text: &str) -> Result<Vec<ParsedLine>, SweepError> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| {
            parse_line(line).map_err(|source| SweepError::Parse {
                line: idx + 1,
                source,
            })
        })
        .collect()
}
