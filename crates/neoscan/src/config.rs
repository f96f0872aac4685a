//! Configuration management for neoscan.
//!
//! Settings are resolved in three layers: command-line flags override the
//! optional `neoscan.yaml` file, which overrides the built-in defaults.
//!
//! ```yaml
//! neos-path: data/neos.csv
//! approaches-path: data/cad.json
//! default-limit: 25
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "neoscan.yaml";

/// Default location of the NEO CSV file
pub const DEFAULT_NEOS_PATH: &str = "data/neos.csv";

/// Default location of the close-approach JSON file
pub const DEFAULT_APPROACHES_PATH: &str = "data/cad.json";

/// Configuration file structure for neoscan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct NeoscanConfig {
    /// Path to the NEO CSV file
    #[serde(default = "default_neos_path")]
    pub neos_path: PathBuf,

    /// Path to the close-approach JSON file
    #[serde(default = "default_approaches_path")]
    pub approaches_path: PathBuf,

    /// Limit applied to query results when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_limit: Option<usize>,
}

fn default_neos_path() -> PathBuf {
    PathBuf::from(DEFAULT_NEOS_PATH)
}

fn default_approaches_path() -> PathBuf {
    PathBuf::from(DEFAULT_APPROACHES_PATH)
}

impl Default for NeoscanConfig {
    fn default() -> Self {
        Self {
            neos_path: default_neos_path(),
            approaches_path: default_approaches_path(),
            default_limit: None,
        }
    }
}

/// Values given on the command line, each overriding the file when present.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// `--neofile`
    pub neos_path: Option<PathBuf>,
    /// `--cadfile`
    pub approaches_path: Option<PathBuf>,
}

impl NeoscanConfig {
    /// Load configuration from a YAML file
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        Self::from_yaml(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit `config_path` must exist. Without one, `neoscan.yaml` in
    /// `working_dir` is used if present, otherwise the defaults.
    pub async fn resolve(
        working_dir: &Path,
        config_path: Option<&Path>,
        overrides: ConfigOverrides,
    ) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => Self::load(path).await?,
            None => {
                let candidate = working_dir.join(CONFIG_FILE_NAME);
                if fs::try_exists(&candidate).await? {
                    tracing::debug!(path = %candidate.display(), "Using configuration file");
                    Self::load(&candidate).await?
                } else {
                    Self::default()
                }
            }
        };

        if let Some(path) = overrides.neos_path {
            config.neos_path = path;
        }
        if let Some(path) = overrides.approaches_path {
            config.approaches_path = path;
        }

        Ok(config)
    }
}
