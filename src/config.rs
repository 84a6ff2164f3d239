use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "semana.toml";

/// Top-level Semana configuration.
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SemanaConfig {
    /// Calculator settings.
    #[serde(default)]
    pub calculator: CalculatorToml,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CalculatorToml {
    #[serde(default)]
    pub strict_days: bool,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_lang")]
    pub lang: String,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            lang: default_lang(),
        }
    }
}

fn default_lang() -> String {
    "pt-br".to_string()
}

/// Loads the configuration.
///
/// An explicit path must exist. Without one, `semana.toml` in the working
/// directory is used if present, otherwise built-in defaults apply.
pub fn load(explicit: Option<&Path>) -> Result<SemanaConfig> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let p = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !p.is_file() {
                debug!("no config file found, using defaults");
                return Ok(SemanaConfig::default());
            }
            p
        }
    };
    let toml_str = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: SemanaConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;
    debug!(path = %path.display(), ?config, "config loaded");
    Ok(config)
}
