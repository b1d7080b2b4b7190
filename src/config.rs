use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::{BranchMatcher, DEFAULT_RELEASE_PATTERN};
use crate::error::{Result, StampError};

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "versionstamp.toml";

/// File name looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".versionstamp.toml";

/// Represents the complete configuration for version-stamp.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub release: ReleaseConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

fn default_branch_pattern() -> String {
    DEFAULT_RELEASE_PATTERN.to_string()
}

/// Release branch classification settings.
///
/// `branch_pattern` is always matched against the whole branch name.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    #[serde(default = "default_branch_pattern")]
    pub branch_pattern: String,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            branch_pattern: default_branch_pattern(),
        }
    }
}

impl ReleaseConfig {
    pub fn matcher(&self) -> Result<BranchMatcher> {
        BranchMatcher::new(&self.branch_pattern)
    }
}

fn default_true() -> bool {
    true
}

/// Configuration for behavior customization.
///
/// Controls how the file is written back without affecting what is written.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BehaviorConfig {
    #[serde(default = "default_true")]
    pub atomic_write: bool,

    #[serde(default)]
    pub lock: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            atomic_write: true,
            lock: false,
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `versionstamp.toml` in current directory
/// 3. `.versionstamp.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err(StampError::Config)` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    if let Some(path) = config_path {
        return read_config(Path::new(path));
    }

    let local = Path::new(LOCAL_CONFIG_FILE);
    if local.exists() {
        return read_config(local);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let user = config_dir.join(USER_CONFIG_FILE);
        if user.exists() {
            return read_config(&user);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let config_str = fs::read_to_string(path).map_err(|e| {
        StampError::config(format!("Cannot read {}: {}", path.display(), e))
    })?;
    parse_config(&config_str)
        .map_err(|e| StampError::config(format!("{}: {}", path.display(), e)))
}

/// Parse configuration text and validate the release pattern
pub fn parse_config(text: &str) -> std::result::Result<Config, String> {
    let config: Config = toml::from_str(text).map_err(|e| e.to_string())?;
    config.release.matcher().map_err(|e| e.to_string())?;
    Ok(config)
}
