#![cfg(feature = "cli")]

use anyhow::{Context, Result};
use time::OffsetDateTime;
use time::macros::format_description;

use crate::fs::{FileSystem, WriteMode};

const TIMESTAMP_FORMAT: &[time::format_description::FormatItem<'static>] =
    format_description!("[hour padding:zero]:[minute padding:zero]:[second padding:zero]");

/// Appends timestamped lines to the build log, creating its directory on demand.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogWriter {
    fs: FileSystem,
}

impl LogWriter {
    pub fn new(fs: FileSystem) -> Self {
        Self { fs }
    }

    pub fn append(&self, log_path: &str, message: &str) -> Result<()> {
        let timestamp = OffsetDateTime::now_utc();
        let formatted = timestamp
            .format(TIMESTAMP_FORMAT)
            .unwrap_or_else(|_| "00:00:00".to_string());

        self.fs
            .write(
                log_path,
                format!("[{}] {}\n", formatted, message),
                WriteMode::Append,
            )
            .with_context(|| format!("unable to write log record: {}", log_path))
    }
}
