//! Reading synset and hypernym files from disk

use std::path::Path;

use crate::error::{Error, Result};

/// Read every line of a file
///
/// Missing paths and non-files are reported before anything is read.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(Error::NotAFile(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let lines: Vec<String> = content.lines().map(str::to_string).collect();
    tracing::debug!("Read {} lines from {:?}", lines.len(), path);
    Ok(lines)
}
