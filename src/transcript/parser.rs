//! Line recognizer for transcript text.

use super::{CdTarget, ParsedLine};
use crate::error::ParseError;
use crate::types::Size;

const LS_COMMAND: &str = "$ ls";
const CD_MARKER: &str = "$ cd";
const CD_PREFIX: &str = "$ cd ";
const DIR_MARKER: &str = "dir";
const DIR_PREFIX: &str = "dir ";

/// Parse one transcript line.
///
/// Shapes are tried in a fixed priority order: `$ ls`, `$ cd ...`,
/// `dir ...`, then `<digits> <name>`. Anything else is rejected.
pub fn parse_line(line: &str) -> Result<ParsedLine, ParseError> {
    if line == LS_COMMAND {
        return Ok(ParsedLine::Ls);
    }
    if line.starts_with(CD_MARKER) {
        return parse_cd(line);
    }
    if line.starts_with(DIR_MARKER) {
        return parse_dir(line);
    }
    if let Some((digits, rest)) = split_file_entry(line) {
        return parse_file(line, digits, rest);
    }
    Err(ParseError::UnrecognizedLine(line.to_string()))
}

fn parse_cd(line: &str) -> Result<ParsedLine, ParseError> {
    let token = line
        .strip_prefix(CD_PREFIX)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ParseError::MissingCdArgument(line.to_string()))?;

    let target = match token {
        "/" => CdTarget::Root,
        ".." => CdTarget::Up,
        name => CdTarget::Child(name.to_string()),
    };
    Ok(ParsedLine::Cd(target))
}

fn parse_dir(line: &str) -> Result<ParsedLine, ParseError> {
    let name = line
        .strip_prefix(DIR_PREFIX)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ParseError::MissingDirName(line.to_string()))?;
    Ok(ParsedLine::Dir {
        name: name.to_string(),
    })
}

/// Matches `<digits><space><rest>`; `rest` may still be empty.
fn split_file_entry(line: &str) -> Option<(&str, &str)> {
    let (head, rest) = line.split_once(' ')?;
    if !head.is_empty() && head.bytes().all(|b| b.is_ascii_digit()) {
        Some((head, rest))
    } else {
        None
    }
}

fn parse_file(line: &str, digits: &str, rest: &str) -> Result<ParsedLine, ParseError> {
    let size: Size = digits
        .parse()
        .map_err(|_| ParseError::MissingFileSize(line.to_string()))?;
    if rest.is_empty() {
        return Err(ParseError::MissingFileName(line.to_string()));
    }
    Ok(ParsedLine::File {
        size,
        name: rest.to_string(),
    })
}
