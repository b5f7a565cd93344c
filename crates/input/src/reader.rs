//! Reading command files from disk.

use std::fs;
use std::io;
use std::path::Path;

/// Read a command file, returning its trimmed, non-empty lines in order.
pub fn read_commands(path: impl AsRef<Path>) -> io::Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
