//! # Client Error Types
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Transport     │  │     Backend             │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  Connection     │  │  Unauthorized           │ │
//! │  │  InvalidUrl     │  │  Timeout        │  │  NotFound               │ │
//! │  │  ConfigLoad/Save│  │                 │  │  Rejected { detail }    │ │
//! │  └─────────────────┘  └─────────────────┘  │  Decode                 │ │
//! │                                            └─────────────────────────┘ │
//! │  ┌─────────────────┐                                                    │
//! │  │  Local          │  Invalid(CoreError): the quote never left memory  │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use acerler_core::CoreError;
use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    // =========================================================================
    // Transport Errors
    // =========================================================================
    #[error("Could not reach the quote service: {0}")]
    ConnectionFailed(String),

    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    // =========================================================================
    // Backend Errors
    // =========================================================================
    #[error("Session expired or token rejected")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    /// Non-success status; `detail` is the backend's message when it sent one.
    #[error("Request failed ({status}): {detail}")]
    Rejected { status: u16, detail: String },

    #[error("Unexpected response from the quote service: {0}")]
    Decode(String),

    // =========================================================================
    // Local Errors
    // =========================================================================
    /// Quote failed local validation; nothing was sent.
    #[error("{0}")]
    Invalid(#[from] CoreError),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::InvalidUrl(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for ClientError {
    fn from(err: toml::de::Error) -> Self {
        ClientError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for ClientError {
    fn from(err: toml::ser::Error) -> Self {
        ClientError::ConfigSaveFailed(err.to_string())
    }
}

impl From<acerler_core::ValidationError> for ClientError {
    fn from(err: acerler_core::ValidationError) -> Self {
        ClientError::Invalid(err.into())
    }
}

// =============================================================================
// Error Categorization
// =============================================================================

impl ClientError {
    /// Maps a transport error, using the configured timeout for the message.
    pub fn from_reqwest(err: reqwest::Error, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            ClientError::Timeout(timeout_secs)
        } else if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::ConnectionFailed(err.to_string())
        }
    }

    /// True when the same request may succeed if the user tries again.
    ///
    /// Nothing retries automatically; this only decides what the user is told.
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::ConnectionFailed(_) | ClientError::Timeout(_) => true,
            ClientError::Rejected { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// True when the request never left the process.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            ClientError::Invalid(_)
                | ClientError::InvalidConfig(_)
                | ClientError::InvalidUrl(_)
                | ClientError::ConfigLoadFailed(_)
                | ClientError::ConfigSaveFailed(_)
        )
    }
}
