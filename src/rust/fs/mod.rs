//! Filesystem layer used by the build pipeline.
//!
//! Paths are plain strings with `/` separators. They are handed to the OS as-is:
//! no normalization of `.`, `..` or repeated separators takes place.

pub mod error;
pub mod materialize;
pub mod path;
pub mod probe;
pub mod scan;
pub mod writer;

pub use error::{FsError, FsResult};
pub use path::{directory_path, extension, has_extension, lower_path};
pub use probe::ProbePolicy;
pub use writer::WriteMode;

/// Entry point bundling every filesystem operation under one probe policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystem {
    policy: ProbePolicy,
}

impl FileSystem {
    pub fn new(policy: ProbePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ProbePolicy {
        self.policy
    }

    pub fn exists(&self, path: &str) -> FsResult<bool> {
        probe::exists(path, self.policy)
    }

    pub fn is_directory(&self, path: &str) -> FsResult<bool> {
        probe::is_directory(path, self.policy)
    }

    pub fn materialize(&self, path: &str) -> FsResult<()> {
        materialize::materialize(path, self.policy)
    }

    pub fn write(&self, file: &str, content: impl AsRef<[u8]>, mode: WriteMode) -> FsResult<()> {
        writer::write(file, content.as_ref(), mode, self.policy)
    }

    /// Truncating write, see [`WriteMode::Write`].
    pub fn write_file(&self, file: &str, content: impl AsRef<[u8]>) -> FsResult<()> {
        self.write(file, content, WriteMode::Write)
    }

    pub fn append(&self, file: &str, content: impl AsRef<[u8]>) -> FsResult<()> {
        self.write(file, content, WriteMode::Append)
    }

    pub fn scan(&self, root: &str) -> FsResult<Vec<String>> {
        scan::scan(root, self.policy)
    }
}

#[cfg(test)]
#[path = "test_fs.rs"]
mod tests;
