//! # Client Configuration
//!
//! Where the quote backend lives and how to talk to it.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     ACERLER_API_URL=https://bims.example.com                           │
//! │     ACERLER_API_TOKEN=eyJhbGciOi...                                    │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/quote-desk/quote-desk.toml (Linux)                       │
//! │     ~/Library/Application Support/com.acerler.quote-desk/... (macOS)   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     http://localhost:8001, prefix /api, 30 s timeout                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [api]
//! base_url = "https://bims.example.com"
//! prefix = "/api"
//! timeout_secs = 30
//!
//! [auth]
//! token = "eyJhbGciOi..."
//!
//! [logging]
//! level = "info"
//! ```
//!
//! The token is read from the file or environment but never written back by
//! [`ClientConfig::save`] and never shown by `Debug`.

use secrecy::Secret;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{ClientError, ClientResult};

// =============================================================================
// API Settings
// =============================================================================

/// Backend location and request behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Scheme, host and port of the backend (no path).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path prefix in front of every endpoint.
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Per-request timeout (seconds).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8001".to_string()
}

fn default_prefix() -> String {
    "/api".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            base_url: default_base_url(),
            prefix: default_prefix(),
            timeout_secs: default_timeout(),
        }
    }
}

// =============================================================================
// Auth Settings
// =============================================================================

/// Session credentials for the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthSettings {
    /// Bearer token from the login endpoint.
    #[serde(default, skip_serializing)]
    pub token: Option<Secret<String>>,
}

// =============================================================================
// Logging Settings
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogSettings {
    /// Default filter directive when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            level: default_log_level(),
        }
    }
}

// =============================================================================
// Main Client Configuration
// =============================================================================

/// Complete client configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub auth: AuthSettings,

    #[serde(default)]
    pub logging: LogSettings,
}

impl ClientConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (quote-desk.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ClientResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading client config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML document; missing sections fall back to defaults.
    pub fn from_toml(contents: &str) -> ClientResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Saves configuration (without the token) to file and returns the path
    /// written.
    pub fn save(&self, config_path: Option<PathBuf>) -> ClientResult<PathBuf> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| ClientError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ClientError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| ClientError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Client config saved");
        Ok(path)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ClientResult<()> {
        let url = Url::parse(&self.api.base_url)?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ClientError::InvalidUrl(format!(
                "Backend URL must start with http:// or https://, got: {}",
                self.api.base_url
            )));
        }

        if self.api.timeout_secs == 0 {
            return Err(ClientError::InvalidConfig(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        if !self.api.prefix.is_empty() && !self.api.prefix.starts_with('/') {
            return Err(ClientError::InvalidConfig(format!(
                "prefix must start with '/', got: {}",
                self.api.prefix
            )));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("ACERLER_API_URL") {
            debug!(url = %url, "Overriding backend URL from environment");
            self.api.base_url = url;
        }

        if let Ok(prefix) = std::env::var("ACERLER_API_PREFIX") {
            self.api.prefix = prefix;
        }

        if let Ok(token) = std::env::var("ACERLER_API_TOKEN") {
            debug!("Using API token from environment");
            self.auth.token = Some(Secret::new(token));
        }

        if let Ok(timeout) = std::env::var("ACERLER_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(secs) => self.api.timeout_secs = secs,
                Err(_) => warn!(value = %timeout, "Ignoring non-numeric ACERLER_TIMEOUT_SECS"),
            }
        }

        if let Ok(level) = std::env::var("ACERLER_LOG") {
            self.logging.level = level;
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "acerler", "quote-desk")
            .map(|dirs| dirs.config_dir().join("quote-desk.toml"))
    }

    /// Base URL joined with the prefix, always ending in `/` so that
    /// relative endpoint paths append instead of replacing the last segment.
    pub fn endpoint_root(&self) -> ClientResult<Url> {
        let mut root = format!(
            "{}{}",
            self.api.base_url.trim_end_matches('/'),
            self.api.prefix.trim_end_matches('/')
        );
        root.push('/');
        Ok(Url::parse(&root)?)
    }
}
