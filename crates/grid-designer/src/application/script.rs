//! Newline-delimited JSON command scripts.
//!
//! One [`Command`] per line.  Blank lines and lines whose first non-space
//! character is `#` are skipped, so scripts can be commented:
//!
//! ```text
//! # two boxes, then swap them
//! {"type": "create_module", "col": 3}
//! {"type": "create_module", "col": 3}
//! {"type": "reorder", "viewport": "desktop", "id": 2, "target": 0}
//! ```

use std::io::BufRead;

use thiserror::Error;

use super::commands::Command;

/// Error type for script reading and parsing.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// The script source could not be read.
    #[error("failed to read script: {0}")]
    Io(#[from] std::io::Error),

    /// A line is not a valid command.  `line` is 1-based.
    #[error("line {line}: invalid command: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Parses one script line.
///
/// Returns `Ok(None)` for blank and comment lines.
///
/// # Errors
///
/// Returns [`ScriptError::Parse`] tagged with `line_number` if the line is
/// not a valid command.
pub fn parse_line(line_number: usize, line: &str) -> Result<Option<Command>, ScriptError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    serde_json::from_str(trimmed)
        .map(Some)
        .map_err(|source| ScriptError::Parse {
            line: line_number,
            source,
        })
}

/// Reads and parses a whole script.
///
/// Parsing stops at the first bad line; no command from a broken script is
/// returned.
///
/// # Errors
///
/// Returns [`ScriptError::Io`] if reading fails and [`ScriptError::Parse`]
/// for the first malformed line.
pub fn parse_script<R: BufRead>(reader: R) -> Result<Vec<Command>, ScriptError> {
    let mut commands = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        if let Some(command) = parse_line(index + 1, &line?)? {
            commands.push(command);
        }
    }
    Ok(commands)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
