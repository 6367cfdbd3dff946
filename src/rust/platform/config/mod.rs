#![cfg(feature = "cli")]

use std::fs;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::fs::path::join;
use crate::fs::{FileSystem, ProbePolicy};

pub const TOML_CONFIG: &str = "access.toml";
pub const JSON_CONFIG: &str = "access.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub project: ProjectSection,
    pub paths: PathsSection,
    pub build: BuildSection,
    pub fs: FsSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectSection {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsSection {
    pub source: Option<String>,
    pub output: String,
    pub logs: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSection {
    pub extension: String,
    pub layout: OutputLayout,
    /// Leading source segments dropped when mirroring. Defaults to the depth of the
    /// source path itself.
    pub depth: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FsSection {
    pub probe: ProbePolicy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputLayout {
    /// Every compiled file goes into one output file.
    #[default]
    Bundle,
    /// Each compiled file is written under the output directory, keeping its
    /// position relative to the source root.
    Mirror,
}

impl Default for ProjectSection {
    fn default() -> Self {
        Self {
            name: "Access Project".to_string(),
        }
    }
}

impl Default for PathsSection {
    fn default() -> Self {
        Self {
            source: None,
            output: "build/bundle.js".to_string(),
            logs: "build/logs".to_string(),
        }
    }
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            extension: "js".to_string(),
            layout: OutputLayout::Bundle,
            depth: None,
        }
    }
}

impl AppConfig {
    /// Loads the project config found in `root`, or defaults when there is none.
    ///
    /// `access.toml` takes priority over `access.json` when both are present.
    pub fn load(root: &str) -> Result<Self> {
        let fs = FileSystem::new(ProbePolicy::Strict);

        let toml_path = join(root, TOML_CONFIG);
        if fs.exists(&toml_path)? {
            return load_toml(&toml_path);
        }

        let json_path = join(root, JSON_CONFIG);
        if fs.exists(&json_path)? {
            return load_json(&json_path);
        }

        Ok(AppConfig::default())
    }

    pub fn build_log_path(&self) -> String {
        join(&self.paths.logs, "build.log")
    }
}

fn load_json(path: &str) -> Result<AppConfig> {
    let file =
        fs::read_to_string(path).with_context(|| format!("failed to read config: {}", path))?;
    let config =
        serde_json::from_str(&file).with_context(|| format!("invalid JSON config: {}", path))?;
    Ok(config)
}

fn load_toml(path: &str) -> Result<AppConfig> {
    let file =
        fs::read_to_string(path).with_context(|| format!("failed to read config: {}", path))?;
    let config =
        toml::from_str(&file).with_context(|| format!("invalid TOML config: {}", path))?;
    Ok(config)
}

#[cfg(test)]
#[path = "test_config.rs"]
mod tests;
