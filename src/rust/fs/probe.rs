//! Existence and type checks, one `stat` per question.
//!
//! Nothing is cached: every call hits the filesystem, so the answer can be stale
//! by the time the caller acts on it.

use std::fs;
use std::io::ErrorKind;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{FsError, FsResult};

/// How stat failures other than "not found" are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbePolicy {
    /// Surface the failure as [`FsError::Io`].
    #[default]
    Strict,
    /// Report the path as existing. This hides permission and I/O errors behind
    /// `true` and only exists for callers that depend on the legacy behaviour.
    Lenient,
}

impl FromStr for ProbePolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "strict" => Ok(ProbePolicy::Strict),
            "lenient" => Ok(ProbePolicy::Lenient),
            other => Err(format!(
                "unknown probe policy '{}' (expected 'strict' or 'lenient')",
                other
            )),
        }
    }
}

/// Whether `path` exists. Not-found is `Ok(false)`.
pub fn exists(path: &str, policy: ProbePolicy) -> FsResult<bool> {
    match fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
        Err(err) => match policy {
            ProbePolicy::Strict => Err(FsError::io(path, err)),
            ProbePolicy::Lenient => Ok(true),
        },
    }
}

/// Whether `path` exists and is a directory (symlinks are followed).
///
/// Performs two stats. A path removed between them reads as `Ok(false)`.
pub fn is_directory(path: &str, policy: ProbePolicy) -> FsResult<bool> {
    if !exists(path, policy)? {
        return Ok(false);
    }

    match fs::metadata(path) {
        Ok(meta) => Ok(meta.is_dir()),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
        Err(err) => Err(FsError::io(path, err)),
    }
}

#[cfg(test)]
#[path = "test_probe.rs"]
mod tests;
