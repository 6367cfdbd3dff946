use std::fs;
use std::io::ErrorKind;

use super::error::{FsError, FsResult};
use super::probe::{ProbePolicy, exists};

/// Creates every missing directory along `path`, from the first segment down.
///
/// Each level is created with a single-level `create_dir`; its parent is known to
/// exist because the previous iteration made sure of it. An empty `path` is the
/// current directory and succeeds without touching the disk.
pub fn materialize(path: &str, policy: ProbePolicy) -> FsResult<()> {
    if path.is_empty() {
        return Ok(());
    }

    let mut partial = String::with_capacity(path.len());
    for (index, segment) in path.split('/').enumerate() {
        if index > 0 {
            partial.push('/');
        }
        partial.push_str(segment);

        // Leading "/" of an absolute path, or a doubled separator.
        if segment.is_empty() {
            continue;
        }

        if !exists(&partial, policy)? {
            create_single(&partial)?;
        }
    }

    if !exists(path, policy)? {
        return Err(FsError::DirectoryCreation {
            path: path.to_string(),
        });
    }

    Ok(())
}

fn create_single(path: &str) -> FsResult<()> {
    match fs::create_dir(path) {
        Ok(()) => Ok(()),
        // Another writer got there first.
        Err(err) if err.kind() == ErrorKind::AlreadyExists => Ok(()),
        Err(err) => Err(FsError::io(path, err)),
    }
}

#[cfg(test)]
#[path = "test_materialize.rs"]
mod tests;
