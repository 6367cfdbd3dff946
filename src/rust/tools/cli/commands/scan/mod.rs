#![cfg(feature = "cli")]

use anyhow::{Context, Result};
use clap::Args;

use crate::fs::{FileSystem, ProbePolicy, has_extension};
use crate::platform::config::AppConfig;
use crate::tools::cli::state::CliContext;

use super::{PROJECT_ROOT, probe_policy};

#[derive(Debug, Clone, Args)]
pub struct ScanCommand {
    /// Directory to list
    pub directory: String,

    /// Only list files with this extension
    #[arg(short, long)]
    pub extension: Option<String>,

    /// How unreadable paths are treated: strict or lenient (defaults to `fs.probe`)
    #[arg(long, value_name = "POLICY")]
    pub probe: Option<ProbePolicy>,
}

impl ScanCommand {
    pub fn execute(&self, ctx: &CliContext) -> Result<()> {
        let logger = ctx.logger();
        let config = AppConfig::load(PROJECT_ROOT)?;
        let policy = probe_policy(self.probe, &config, &logger);

        let files = FileSystem::new(policy)
            .scan(&self.directory)
            .with_context(|| format!("failed to scan {}", self.directory))?;

        let mut listed = 0;
        for file in files
            .iter()
            .filter(|f| self.extension.as_deref().is_none_or(|ext| has_extension(f, ext)))
        {
            println!("{}", file);
            listed += 1;
        }

        logger.debug(format!("{} file(s) under {}", listed, self.directory));

        Ok(())
    }
}
