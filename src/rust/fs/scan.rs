use std::fs;
use std::vec::IntoIter;

use super::error::{FsError, FsResult};
use super::path::join;
use super::probe::{ProbePolicy, is_directory};

/// A directory whose entries are still being visited.
struct Frame {
    dir: String,
    entries: IntoIter<String>,
}

impl Frame {
    fn open(dir: String) -> FsResult<Self> {
        let entries = list_entries(&dir)?;
        Ok(Self {
            dir,
            entries: entries.into_iter(),
        })
    }
}

/// Lists every non-directory file below `root`, subdirectories flattened in place.
///
/// Order follows the directory enumeration order, with each subdirectory expanded
/// fully before its next sibling. Symlinked directories are followed and there is
/// no cycle detection.
pub fn scan(root: &str, policy: ProbePolicy) -> FsResult<Vec<String>> {
    let mut files = Vec::new();
    let mut stack = vec![Frame::open(root.to_string())?];

    while let Some(frame) = stack.last_mut() {
        let Some(name) = frame.entries.next() else {
            stack.pop();
            continue;
        };

        let full = join(&frame.dir, &name);
        if is_directory(&full, policy)? {
            stack.push(Frame::open(full)?);
        } else {
            files.push(full);
        }
    }

    Ok(files)
}

fn list_entries(dir: &str) -> FsResult<Vec<String>> {
    let reader = fs::read_dir(dir).map_err(|e| FsError::io(dir, e))?;

    let mut names = Vec::new();
    for entry in reader {
        let entry = entry.map_err(|e| FsError::io(dir, e))?;
        let name = entry
            .file_name()
            .into_string()
            .map_err(|_| FsError::NonUtf8Name {
                dir: dir.to_string(),
            })?;
        names.push(name);
    }

    Ok(names)
}

#[cfg(test)]
#[path = "test_scan.rs"]
mod tests;
