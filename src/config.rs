//! Configuration for the sign-up backend.
//!
//! Loaded with figment from defaults, an optional TOML file, and environment
//! variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name, looked up in the working directory.
const CONFIG_FILE_NAME: &str = "signup.toml";

/// Default CSV file name, matching the original page's output location.
const CSV_FILE_NAME: &str = "user_data.csv";

/// Application configuration.
///
/// Loaded from (in order of precedence, highest first):
/// 1. Environment variables prefixed with `SIGNUP_` (`__` separates the
///    section from the key, e.g. `SIGNUP_SERVER__BIND_ADDR`)
/// 2. `signup.toml` in the working directory
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Storage configuration.
    pub storage: StorageConfig,
}

/// Server-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: String,
}

/// Storage-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path of the CSV file sign-ups are appended to.
    pub csv_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(CSV_FILE_NAME),
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if loading, parsing, or validation fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config file path.
    ///
    /// # Errors
    ///
    /// Returns an error if loading, parsing, or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("SIGNUP_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.server.bind_addr.parse::<SocketAddr>().is_err() {
            return Err(Error::ConfigValidation {
                message: format!(
                    "bind_addr '{}' is not a socket address",
                    self.server.bind_addr
                ),
            });
        }

        if self.storage.csv_path.as_os_str().is_empty() {
            return Err(Error::ConfigValidation {
                message: "csv_path must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
