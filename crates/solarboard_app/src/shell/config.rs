//! RON configuration for the dashboard shell.
//!
//! A missing file means defaults. Command-line flags are applied on top by
//! [`AppConfig::apply_overrides`].

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use board_logging::board_info;
use serde::{Deserialize, Serialize};
use solarboard_core::Role;
use solarboard_data::ApiSettings;
use thiserror::Error;

use super::logging::LogDestination;

pub const DEFAULT_CONFIG_FILENAME: &str = "solarboard.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error("unknown role {0:?}")]
    UnknownRole(String),
    #[error("unknown log level {0:?}")]
    UnknownLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_response_bytes: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        let defaults = ApiSettings::default();
        Self {
            base_url: defaults.base_url,
            connect_timeout_secs: defaults.connect_timeout.as_secs(),
            request_timeout_secs: defaults.request_timeout.as_secs(),
            max_response_bytes: defaults.max_bytes,
        }
    }
}

impl ApiConfig {
    pub fn settings(&self) -> ApiSettings {
        ApiSettings {
            base_url: self.base_url.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_bytes: self.max_response_bytes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    /// Serve data from a JSON snapshot instead of the API.
    pub snapshot: Option<PathBuf>,
    pub role: String,
    pub log_destination: LogDestination,
    pub log_level: String,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            snapshot: None,
            role: "viewer".to_string(),
            log_destination: LogDestination::File,
            log_level: "info".to_string(),
            log_file: PathBuf::from("./solarboard.log"),
        }
    }
}

/// Values given on the command line; `None` keeps the file value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_url: Option<String>,
    pub snapshot: Option<PathBuf>,
    pub role: Option<String>,
    pub log_level: Option<String>,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let config = ron::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        board_info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn apply_overrides(&mut self, overrides: Overrides) {
        if let Some(url) = overrides.api_url {
            self.api.base_url = url;
        }
        if let Some(snapshot) = overrides.snapshot {
            self.snapshot = Some(snapshot);
        }
        if let Some(role) = overrides.role {
            self.role = role;
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
    }

    pub fn role(&self) -> Result<Role, ConfigError> {
        Role::parse(&self.role).ok_or_else(|| ConfigError::UnknownRole(self.role.clone()))
    }

    pub fn log_level(&self) -> Result<log::LevelFilter, ConfigError> {
        board_logging::parse_level(&self.log_level)
            .ok_or_else(|| ConfigError::UnknownLogLevel(self.log_level.clone()))
    }
}
