use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::DEFAULT_PREID;
use crate::error::{ChronicleError, Result};

/// Complete configuration for git-chronicle.
///
/// Covers release defaults (pre-release identifier, no-tag base version) and
/// changelog presentation options. All fields have defaults so a missing or
/// partial file works.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub release: ReleaseConfig,

    #[serde(default)]
    pub changelog: ChangelogConfig,
}

fn default_preid() -> String {
    DEFAULT_PREID.to_string()
}

fn default_base_version() -> String {
    "v0.0.0".to_string()
}

fn default_unreleased_label() -> String {
    "Unreleased".to_string()
}

/// Configuration for version bumping and tagging.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    /// Pre-release identifier used by the pre* bump policies
    #[serde(default = "default_preid")]
    pub preid: String,

    /// Version assumed current when the repository has no version tags yet;
    /// bumps start from here
    #[serde(default = "default_base_version")]
    pub base_version: String,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            preid: default_preid(),
            base_version: default_base_version(),
        }
    }
}

/// Configuration for changelog generation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChangelogConfig {
    /// Header label for entries without a version
    #[serde(default = "default_unreleased_label")]
    pub unreleased_label: String,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        ChangelogConfig {
            unreleased_label: default_unreleased_label(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            release: ReleaseConfig::default(),
            changelog: ChangelogConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Lookup order:
/// 1. Custom path provided as parameter
/// 2. `chronicle.toml` in current directory
/// 3. `.chronicle.toml` in user config directory
/// 4. Default configuration if no file found
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./chronicle.toml").exists() {
        fs::read_to_string("./chronicle.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".chronicle.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    toml::from_str(&config_str).map_err(|e| ChronicleError::config(e.to_string()))
}
