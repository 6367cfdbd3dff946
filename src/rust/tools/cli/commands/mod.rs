#![cfg(feature = "cli")]

pub mod build;
pub mod scan;

use crate::fs::ProbePolicy;
use crate::platform::config::AppConfig;
use crate::tools::logger::Logger;

/// Commands look for the project config in the working directory.
pub const PROJECT_ROOT: &str = ".";

/// `--probe` wins over `fs.probe` from the config.
pub fn probe_policy(flag: Option<ProbePolicy>, config: &AppConfig, logger: &Logger) -> ProbePolicy {
    let policy = flag.unwrap_or(config.fs.probe);
    if policy == ProbePolicy::Lenient {
        logger.warn("Lenient probing: unreadable paths are reported as existing");
    }
    policy
}

#[cfg(test)]
#[path = "test_commands.rs"]
mod tests;
