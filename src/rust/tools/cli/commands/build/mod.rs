#![cfg(feature = "cli")]

use anyhow::Result;
use clap::Args;

use crate::fs::{FileSystem, ProbePolicy};
use crate::platform::config::{AppConfig, OutputLayout};
use crate::services::build::{BuildRequest, Compiler};
use crate::tools::cli::messages::SOURCE_UNDEFINED;
use crate::tools::cli::state::CliContext;
use crate::tools::logger::LogLevel;

use super::{PROJECT_ROOT, probe_policy};

#[derive(Debug, Clone, Args)]
pub struct BuildCommand {
    /// Source file or directory to compile (defaults to `paths.source`)
    pub source: Option<String>,

    /// Bundle file, or output directory with --mirror (defaults to `paths.output`)
    pub destination: Option<String>,

    /// Extension of the files to compile
    #[arg(short, long)]
    pub extension: Option<String>,

    /// Write one output per source file instead of a single bundle
    #[arg(long, default_value_t = false)]
    pub mirror: bool,

    /// Leading source path segments dropped when mirroring
    #[arg(long)]
    pub depth: Option<usize>,

    /// How unreadable paths are treated: strict or lenient (defaults to `fs.probe`)
    #[arg(long, value_name = "POLICY")]
    pub probe: Option<ProbePolicy>,

    /// Skip appending to the build log
    #[arg(long, default_value_t = false)]
    pub no_log: bool,
}

impl BuildCommand {
    pub fn execute(&self, ctx: &CliContext) -> Result<()> {
        let logger = ctx.logger();
        let config = AppConfig::load(PROJECT_ROOT)?;
        let request = self.request(&config)?;

        let policy = probe_policy(self.probe, &config, &logger);

        // Failures are reported once, by `main`.
        let compiler = Compiler::new(logger.clone(), FileSystem::new(policy));
        let artifacts = compiler.build(&request)?;

        logger.log_with_details(
            LogLevel::Success,
            format!(
                "Compiled {} file(s) into {} output(s)",
                artifacts.compiled.len(),
                artifacts.outputs.len()
            ),
            &artifacts.outputs,
        );

        Ok(())
    }

    fn request(&self, config: &AppConfig) -> Result<BuildRequest> {
        let Some(source) = self.source.clone().or_else(|| config.paths.source.clone()) else {
            anyhow::bail!(SOURCE_UNDEFINED);
        };

        let layout = if self.mirror {
            OutputLayout::Mirror
        } else {
            config.build.layout
        };

        Ok(BuildRequest {
            project: config.project.name.clone(),
            source,
            output: self
                .destination
                .clone()
                .unwrap_or_else(|| config.paths.output.clone()),
            extension: self
                .extension
                .clone()
                .unwrap_or_else(|| config.build.extension.clone()),
            layout,
            depth: self.depth.or(config.build.depth),
            log_path: (!self.no_log).then(|| config.build_log_path()),
        })
    }
}

#[cfg(test)]
#[path = "test_build.rs"]
mod tests;
