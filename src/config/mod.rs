//! Configuration management for the EBS client
//!
//! Handles loading, validating, and persisting the API URL and the
//! broadcaster credentials, and exposes them to [`EbsClient`] through the
//! [`ApiConfig`] trait.
//!
//! [`EbsClient`]: crate::client::EbsClient

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

pub mod auth;
pub mod defaults;

pub use auth::AuthConfig;
pub use defaults::*;

/// Read-only view of the settings a client needs for one request
///
/// Implementations are queried on every call, so changes made by the owner
/// between calls are picked up without rebuilding the client.
pub trait ApiConfig {
    /// Base URL that request paths are appended to
    fn api_url(&self) -> String;

    /// Credentials to attach, or `None` when they are not valid
    fn credentials(&self) -> Option<AuthConfig>;
}

/// Main client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// EBS server URL
    #[serde(default = "defaults::default_api_url")]
    pub api_url: String,

    /// Enable verbose logging
    #[serde(default)]
    pub verbose: bool,

    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,
}

impl Config {
    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| Error::ConfigRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        toml::from_str(&contents).map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    /// Load from `path`, falling back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::DirError {
                path: parent.to_path_buf(),
                reason: e.to_string(),
            })?;
        }

        let contents =
            toml::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))?;

        fs::write(path, contents).map_err(|e| Error::ConfigWrite {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        // Config holds the OAuth token
        #[cfg(unix)]
        {
            use std::fs::Permissions;
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, Permissions::from_mode(0o600)).map_err(|e| {
                Error::ConfigWrite {
                    path: path.to_path_buf(),
                    reason: format!("Failed to set permissions: {e}"),
                }
            })?;
        }

        Ok(())
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_home = std::env::var("XDG_CONFIG_HOME")
            .ok()
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")));

        config_home
            .ok_or_else(|| {
                Error::Internal(
                    "Could not determine config directory: XDG_CONFIG_HOME not set and no home directory found"
                        .to_string(),
                )
            })
            .map(|path| path.join("str-ebs").join("config.toml"))
    }

    /// Apply `STR_EBS_*` environment overrides
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup; empty values are ignored
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

        if let Some(url) = non_empty(ENV_API_URL) {
            self.api_url = url;
        }
        if let Some(token) = non_empty(ENV_TOKEN) {
            self.auth.oauth_token = token;
        }
        if let Some(user) = non_empty(ENV_USER) {
            self.auth.user = user;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_url.is_empty() {
            return Err(Error::InvalidConfig("api_url cannot be empty".to_string()));
        }

        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(Error::InvalidConfig(format!(
                "api_url must start with http:// or https://, got '{}'",
                self.api_url
            )));
        }

        Ok(())
    }

    /// Check if requests will carry auth headers
    #[must_use]
    pub fn are_credentials_valid(&self) -> bool {
        self.auth.are_credentials_valid()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            verbose: false,
            auth: AuthConfig::default(),
        }
    }
}

impl ApiConfig for Config {
    fn api_url(&self) -> String {
        self.api_url.trim_end_matches('/').to_string()
    }

    fn credentials(&self) -> Option<AuthConfig> {
        self.are_credentials_valid().then(|| self.auth.clone())
    }
}

/// Shared config that its owner may update while clients hold it
impl ApiConfig for RwLock<Config> {
    fn api_url(&self) -> String {
        self.read().unwrap_or_else(PoisonError::into_inner).api_url()
    }

    fn credentials(&self) -> Option<AuthConfig> {
        self.read().unwrap_or_else(PoisonError::into_inner).credentials()
    }
}
