//! Configuration types and management for rollcall.
//!
//! The configuration is a small YAML document with two sections: platform
//! credentials for the gateway client and the filesystem paths the census
//! reads from and writes to.

pub mod validation;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::errors::{Result, RollcallError};

pub use validation::{
    validate_http_url, validate_non_empty, validate_positive_u64, validate_positive_usize,
};

/// Default location of the configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "rollcall.yml";

/// Environment variable overriding `platform.api_id`.
pub const API_ID_ENV: &str = "ROLLCALL_API_ID";

/// Environment variable overriding `platform.api_hash`.
pub const API_HASH_ENV: &str = "ROLLCALL_API_HASH";

/// Main configuration for a census run
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RollcallConfig {
    /// Gateway credentials and transport settings
    #[serde(default)]
    pub platform: PlatformConfig,

    /// Name lists and output locations
    #[serde(default)]
    pub paths: PathsConfig,
}

impl RollcallConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            RollcallError::io(format!("Failed to read config file: {}", path.display()), e)
        })?;

        serde_yaml::from_str(&content).map_err(Into::into)
    }

    /// Save configuration to a YAML file
    pub fn to_yaml_file(&self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        let content = serde_yaml::to_string(self)?;
        std::fs::write(&path, content).map_err(|e| {
            RollcallError::io(
                format!("Failed to write config file: {}", path.display()),
                e,
            )
        })
    }

    /// Override credentials from `ROLLCALL_API_ID` / `ROLLCALL_API_HASH` when set.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(api_id) = std::env::var(API_ID_ENV) {
            debug!("api_id taken from {}", API_ID_ENV);
            self.platform.api_id = api_id;
        }
        if let Ok(api_hash) = std::env::var(API_HASH_ENV) {
            debug!("api_hash taken from {}", API_HASH_ENV);
            self.platform.api_hash = api_hash;
        }
        self
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        self.platform.validate()?;
        self.paths.validate()?;
        Ok(())
    }
}

/// Gateway credentials and transport settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlatformConfig {
    /// Application identifier issued by the platform
    #[serde(default)]
    pub api_id: String,

    /// Application secret issued by the platform
    #[serde(default)]
    pub api_hash: String,

    /// Base URL of the platform gateway
    #[serde(default = "PlatformConfig::default_endpoint")]
    pub endpoint: String,

    /// Participants requested per page
    #[serde(default = "PlatformConfig::default_page_size")]
    pub page_size: usize,

    /// Per-request timeout
    #[serde(default = "PlatformConfig::default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            api_id: String::new(),
            api_hash: String::new(),
            endpoint: Self::default_endpoint(),
            page_size: Self::default_page_size(),
            timeout_seconds: Self::default_timeout_seconds(),
        }
    }
}

impl PlatformConfig {
    fn default_endpoint() -> String {
        "http://127.0.0.1:8081/api/".to_string()
    }

    const fn default_page_size() -> usize {
        200
    }

    const fn default_timeout_seconds() -> u64 {
        30
    }

    /// Validate credentials and transport settings
    pub fn validate(&self) -> Result<()> {
        validate_non_empty(&self.api_id, "platform.api_id")?;
        validate_non_empty(&self.api_hash, "platform.api_hash")?;
        validate_http_url(&self.endpoint, "platform.endpoint")?;
        validate_positive_usize(self.page_size, "platform.page_size")?;
        validate_positive_u64(self.timeout_seconds, "platform.timeout_seconds")?;
        Ok(())
    }
}

/// Name lists and output locations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PathsConfig {
    /// Male first names, one per line
    #[serde(default = "PathsConfig::default_male_names")]
    pub male_names: PathBuf,

    /// Female first names, one per line
    #[serde(default = "PathsConfig::default_female_names")]
    pub female_names: PathBuf,

    /// Directory holding one `<channel>_users` folder per census
    #[serde(default = "PathsConfig::default_output_root")]
    pub output_root: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            male_names: Self::default_male_names(),
            female_names: Self::default_female_names(),
            output_root: Self::default_output_root(),
        }
    }
}

impl PathsConfig {
    fn default_male_names() -> PathBuf {
        PathBuf::from("genderDB/names_male.txt")
    }

    fn default_female_names() -> PathBuf {
        PathBuf::from("genderDB/names_female.txt")
    }

    fn default_output_root() -> PathBuf {
        PathBuf::from("chatUsers")
    }

    /// Validate path settings
    pub fn validate(&self) -> Result<()> {
        if self.output_root.as_os_str().is_empty() {
            return Err(RollcallError::validation_field(
                "paths.output_root must not be empty",
                "paths.output_root",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
