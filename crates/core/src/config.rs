//! Process configuration
//!
//! Everything the login controller and the stores need to know about their
//! environment, loaded once from a TOML file and passed in at construction.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Default cookie name carried by clients
pub const DEFAULT_COOKIE_NAME: &str = "gologin";

/// Default cookie path
pub const DEFAULT_COOKIE_PATH: &str = "/";

/// Length of generated session tokens
pub const DEFAULT_TOKEN_LENGTH: usize = 5;

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the users and sessions files
    pub data_dir: PathBuf,
    /// Users file name, relative to `data_dir`
    pub users_file: String,
    /// Sessions file name, relative to `data_dir`
    pub sessions_file: String,
    pub cookie_name: String,
    pub cookie_path: String,
    /// Number of characters in a session token
    pub token_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            users_file: "users.json".to_string(),
            sessions_file: "logins.json".to_string(),
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            cookie_path: DEFAULT_COOKIE_PATH.to_string(),
            token_length: DEFAULT_TOKEN_LENGTH,
        }
    }
}

impl Config {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate config from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Config rooted at a given data directory, everything else default
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cookie_name.trim().is_empty() {
            return Err(ConfigError::Invalid("cookie_name must not be empty".into()));
        }
        if self.users_file.trim().is_empty() || self.sessions_file.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "users_file and sessions_file must not be empty".into(),
            ));
        }
        if self.users_file == self.sessions_file {
            return Err(ConfigError::Invalid(format!(
                "users_file and sessions_file are both '{}'",
                self.users_file
            )));
        }
        if self.token_length == 0 {
            return Err(ConfigError::Invalid("token_length must be at least 1".into()));
        }
        Ok(())
    }
}

/// Platform data directory, or the working directory when there is none
fn default_data_dir() -> PathBuf {
    ProjectDirs::from("dev", "onyx", "gologin")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
