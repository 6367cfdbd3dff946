use std::fs::OpenOptions;
use std::io::Write;

use serde::{Deserialize, Serialize};

use super::error::{FsError, FsResult};
use super::materialize::materialize;
use super::path::directory_path;
use super::probe::{ProbePolicy, exists};

/// Which write primitive an update uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Create the file, truncating any previous content.
    Write,
    /// Create the file if absent, otherwise append to it.
    Append,
}

impl WriteMode {
    /// The open flags backing this mode.
    pub fn open_options(self) -> OpenOptions {
        let mut options = OpenOptions::new();
        match self {
            WriteMode::Write => options.write(true).create(true).truncate(true),
            WriteMode::Append => options.append(true).create(true),
        };
        options
    }
}

/// Writes `content` to `file` with `mode`, creating the parent directories first
/// when they are missing.
///
/// The directory repair runs at most once. If the parent is still missing after
/// it, the call fails with [`FsError::DirectoryCreation`] and nothing is written.
pub fn write(file: &str, content: &[u8], mode: WriteMode, policy: ProbePolicy) -> FsResult<()> {
    let directory = directory_path(file);

    if can_write_to(&directory, policy)? {
        return update(file, content, mode);
    }

    materialize(&directory, policy)?;

    if can_write_to(&directory, policy)? {
        update(file, content, mode)
    } else {
        Err(FsError::DirectoryCreation { path: directory })
    }
}

fn can_write_to(directory: &str, policy: ProbePolicy) -> FsResult<bool> {
    if directory.is_empty() {
        return Ok(true);
    }
    exists(directory, policy)
}

fn update(file: &str, content: &[u8], mode: WriteMode) -> FsResult<()> {
    let mut handle = mode
        .open_options()
        .open(file)
        .map_err(|e| FsError::io(file, e))?;
    handle.write_all(content).map_err(|e| FsError::io(file, e))
}

#[cfg(test)]
#[path = "test_writer.rs"]
mod tests;
