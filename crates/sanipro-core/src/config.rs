use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use sanipro_util::errors::SaniproError;

use crate::delimiter::{DEFAULT_INPUT_DELIMITER, DEFAULT_OUTPUT_DELIMITER};

/// Global user configuration loaded from `~/.sanipro/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub interactive: InteractiveConfig,

    #[serde(default)]
    pub mask: MaskConfig,
}

/// Settings from `[input]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_input_delimiter")]
    pub delimiter: String,
    /// Parser version, `v1` or `v2`.
    #[serde(default)]
    pub parser: Option<String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            delimiter: default_input_delimiter(),
            parser: None,
        }
    }
}

fn default_input_delimiter() -> String {
    DEFAULT_INPUT_DELIMITER.to_string()
}

/// Settings from `[output]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_delimiter")]
    pub delimiter: String,
    #[serde(default = "default_roundup")]
    pub roundup: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            delimiter: default_output_delimiter(),
            roundup: default_roundup(),
        }
    }
}

fn default_output_delimiter() -> String {
    DEFAULT_OUTPUT_DELIMITER.to_string()
}

fn default_roundup() -> u32 {
    2
}

/// Settings from `[interactive]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractiveConfig {
    #[serde(default = "default_ps1")]
    pub ps1: String,
    #[serde(default = "default_history", rename = "history-size")]
    pub history_size: usize,
}

impl Default for InteractiveConfig {
    fn default() -> Self {
        Self {
            ps1: default_ps1(),
            history_size: default_history(),
        }
    }
}

fn default_ps1() -> String {
    ">>> ".to_string()
}

fn default_history() -> usize {
    1000
}

/// Settings from `[mask]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaskConfig {
    #[serde(default = "default_replace_to", rename = "replace-to")]
    pub replace_to: String,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            replace_to: default_replace_to(),
        }
    }
}

fn default_replace_to() -> String {
    "%%%".to_string()
}

impl GlobalConfig {
    /// Load the global configuration from `~/.sanipro/config.toml`, or return defaults if the file doesn't exist.
    pub fn load() -> miette::Result<Self> {
        let path = Self::default_path();
        if path.is_file() {
            Self::from_path(&path)
        } else {
            tracing::debug!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load the configuration from an explicit path. A missing file is an error.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SaniproError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        let config = Self::parse(&content)?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            SaniproError::Config {
                message: format!("Failed to parse config: {e}"),
            }
            .into()
        })
    }

    /// Returns the default path to the global config file.
    pub fn default_path() -> PathBuf {
        sanipro_util::fs::data_dir().join("config.toml")
    }
}
