#![cfg(feature = "cli")]

use anyhow::{Context, Result};

use crate::fs::path::{join, lower_path};
use crate::fs::{FileSystem, WriteMode};
use crate::platform::config::OutputLayout;

/// Where compiled output for each source file ends up.
#[derive(Debug, Clone)]
pub struct OutputTarget {
    layout: OutputLayout,
    output: String,
    depth: usize,
}

impl OutputTarget {
    /// `depth` is the number of leading source segments dropped in mirror layout.
    pub fn new(layout: OutputLayout, output: impl Into<String>, depth: usize) -> Self {
        Self {
            layout,
            output: output.into(),
            depth,
        }
    }

    /// Destination path for `source_file`.
    pub fn path_for(&self, source_file: &str) -> String {
        match self.layout {
            OutputLayout::Bundle => self.output.clone(),
            OutputLayout::Mirror => join(&self.output, &lower_path(source_file, self.depth)),
        }
    }

    /// Writes compiled `content` for the `index`-th source file of a build.
    ///
    /// In bundle layout the first file truncates the bundle and later ones append,
    /// so every build starts from an empty bundle.
    pub fn emit(
        &self,
        fs: &FileSystem,
        source_file: &str,
        index: usize,
        content: &str,
    ) -> Result<String> {
        let target = self.path_for(source_file);
        let mode = match self.layout {
            OutputLayout::Bundle if index > 0 => WriteMode::Append,
            _ => WriteMode::Write,
        };

        fs.write(&target, content, mode)
            .with_context(|| format!("failed to write output for {}", source_file))?;

        Ok(target)
    }
}
