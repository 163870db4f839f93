//! Configuration loading for markcheck.
//! Reads markcheck.toml from `--config`, the MARKCHECK_CONFIG env var, or the current directory.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use markcheck_common::EngineConfig;

pub const CONFIG_ENV_VAR: &str = "MARKCHECK_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "markcheck.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when RUST_LOG is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String { "markcheck=info,warn".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_log_filter() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

mod tests;

/// Where the config came from. An explicitly named file must exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Default(PathBuf),
}

impl ConfigSource {
    /// `--config` wins over the env var, which wins over `./markcheck.toml`.
    pub fn resolve(flag: Option<&Path>, env_value: Option<String>) -> Self {
        match (flag, env_value.filter(|v| !v.trim().is_empty())) {
            (Some(path), _) => ConfigSource::Explicit(path.to_path_buf()),
            (None, Some(env)) => ConfigSource::Explicit(PathBuf::from(env)),
            (None, None) => ConfigSource::Default(PathBuf::from(DEFAULT_CONFIG_FILE)),
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content).context("Invalid markcheck config")?;
        Ok(config)
    }

    /// Load configuration for this process, honouring `--config` and MARKCHECK_CONFIG.
    pub fn load(flag: Option<&Path>) -> anyhow::Result<Self> {
        let source = ConfigSource::resolve(flag, std::env::var(CONFIG_ENV_VAR).ok());
        Self::load_from(&source)
    }

    pub fn load_from(source: &ConfigSource) -> anyhow::Result<Self> {
        let path = match source {
            ConfigSource::Explicit(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file not found: {}", path.display());
                }
                path
            }
            ConfigSource::Default(path) => {
                if !path.exists() {
                    return Ok(Config::default());
                }
                path
            }
        };

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("In {}", path.display()))
    }
}
