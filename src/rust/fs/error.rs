use std::io;

use thiserror::Error;

/// Failures surfaced by the filesystem layer.
///
/// A missing path is never an error: probes report it as `Ok(false)`.
#[derive(Debug, Error)]
pub enum FsError {
    /// A directory path could not be brought into existence.
    #[error("Error building file path: {path}")]
    DirectoryCreation { path: String },

    /// Any other failure from a stat, read, create or write call.
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A directory entry whose name is not valid UTF-8.
    #[error("Entry in '{dir}' has a non UTF-8 name")]
    NonUtf8Name { dir: String },
}

impl FsError {
    pub(crate) fn io(path: impl Into<String>, source: io::Error) -> Self {
        FsError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type FsResult<T> = Result<T, FsError>;
