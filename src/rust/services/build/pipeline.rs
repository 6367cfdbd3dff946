#![cfg(feature = "cli")]

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use crate::fs::{FileSystem, has_extension};
use crate::platform::config::OutputLayout;
use crate::tools::logger::Logger;

use super::outputs::{LogWriter, OutputTarget};

/// What the placeholder compiler emits for every source file.
pub const PLACEHOLDER_OUTPUT: &str = "Hey : - )\n";

#[derive(Debug, Clone)]
pub struct BuildRequest {
    /// Project name, recorded in the build log.
    pub project: String,
    /// Source file or directory.
    pub source: String,
    /// Bundle file, or output directory in mirror layout.
    pub output: String,
    pub extension: String,
    pub layout: OutputLayout,
    /// Mirror depth. `None` strips the whole source path.
    pub depth: Option<usize>,
    pub log_path: Option<String>,
}

#[derive(Debug, Clone)]
pub struct BuildArtifacts {
    pub compiled: Vec<String>,
    pub outputs: Vec<String>,
    pub skipped: usize,
    pub total_duration: Duration,
}

#[derive(Clone)]
pub struct Compiler {
    logger: Arc<Logger>,
    fs: FileSystem,
    log_writer: LogWriter,
}

impl Compiler {
    pub fn new(logger: Arc<Logger>, fs: FileSystem) -> Self {
        Self {
            logger,
            fs,
            log_writer: LogWriter::new(fs),
        }
    }

    pub fn build(&self, request: &BuildRequest) -> Result<BuildArtifacts> {
        let build_start = Instant::now();
        self.logger
            .action(format!("Building from {}", request.source));

        let sources = self.collect_sources(&request.source)?;
        let depth = request
            .depth
            .unwrap_or_else(|| request.source.split('/').count());
        let target = OutputTarget::new(request.layout, request.output.clone(), depth);

        let mut compiled = Vec::new();
        let mut outputs = Vec::new();
        let mut skipped = 0;

        for file in &sources {
            if !has_extension(file, &request.extension) {
                self.logger.debug(format!("Skipping {}", file));
                skipped += 1;
                continue;
            }

            self.logger.info(format!("Compiling: {}", file));
            let content = compile_placeholder(file);
            let written = target.emit(&self.fs, file, compiled.len(), &content)?;

            compiled.push(file.clone());
            if !outputs.contains(&written) {
                outputs.push(written);
            }
        }

        if compiled.is_empty() {
            self.logger.warn(format!(
                "No .{} files found in {}",
                request.extension, request.source
            ));
        }

        if let Some(log_path) = &request.log_path {
            self.log_writer.append(
                log_path,
                &format!(
                    "{}: built {} file(s) from '{}' into {} output(s); skipped {}",
                    request.project,
                    compiled.len(),
                    request.source,
                    outputs.len(),
                    skipped
                ),
            )?;
        }

        let total_duration = build_start.elapsed();
        self.logger.watch(format!(
            "Build finished in {:.1} ms",
            total_duration.as_secs_f64() * 1000.0
        ));

        Ok(BuildArtifacts {
            compiled,
            outputs,
            skipped,
            total_duration,
        })
    }

    /// Every file under `source`, or `source` itself when it is a file.
    fn collect_sources(&self, source: &str) -> Result<Vec<String>> {
        if !self.fs.exists(source)? {
            anyhow::bail!("Source path not found: {}", source);
        }

        if self.fs.is_directory(source)? {
            let files = self
                .fs
                .scan(source)
                .with_context(|| format!("failed to scan source directory: {}", source))?;
            self.logger
                .debug(format!("Found {} file(s) under {}", files.len(), source));
            Ok(files)
        } else {
            Ok(vec![source.to_string()])
        }
    }
}

// Code generation is not implemented; every source maps to the same output.
fn compile_placeholder(_file: &str) -> String {
    PLACEHOLDER_OUTPUT.to_string()
}

#[cfg(test)]
#[path = "test_pipeline.rs"]
mod tests;
