//! # App Error Type
//!
//! Unified error type for quote-desk commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Command Function                                                       │
//! │  Result<T, AppError>                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Bad arguments?      ─── Usage ───────────────────────────┐            │
//! │  Rule violation?     ─── CoreError   ──┐                  │            │
//! │  Backend / network?  ─── ClientError ──┴──► AppError ─────┴──► stderr  │
//! │  Draft file?         ─── io / serde_json                     + exit 1  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use acerler_client::ClientError;
use acerler_core::CoreError;
use serde::Serialize;

/// Error printed when a command fails.
///
/// With `--json` this is what a script receives:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Not found: Teklif bulunamadı"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct AppError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unknown command or missing argument
    Usage,

    /// Quote or input failed local rules
    ValidationError,

    NotFound,

    /// Token missing, expired or rejected
    Unauthorized,

    /// Backend unreachable or too slow
    Network,

    /// Backend refused the request or answered with something unexpected
    Backend,

    /// Configuration or draft file problem
    Config,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Usage, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Config, message)
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        AppError::new(ErrorCode::ValidationError, err.to_string())
    }
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        let code = match &err {
            ClientError::Invalid(_) => ErrorCode::ValidationError,
            ClientError::NotFound(_) => ErrorCode::NotFound,
            ClientError::Unauthorized => ErrorCode::Unauthorized,
            ClientError::ConnectionFailed(_) | ClientError::Timeout(_) => ErrorCode::Network,
            ClientError::Rejected { .. } | ClientError::Decode(_) => ErrorCode::Backend,
            ClientError::InvalidConfig(_)
            | ClientError::InvalidUrl(_)
            | ClientError::ConfigLoadFailed(_)
            | ClientError::ConfigSaveFailed(_) => ErrorCode::Config,
        };
        AppError::new(code, acerler_client::Notification::from_error(&err).message)
    }
}

impl From<acerler_core::ValidationError> for AppError {
    fn from(err: acerler_core::ValidationError) -> Self {
        AppError::new(ErrorCode::ValidationError, err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::config(format!("Cannot read draft: {err}"))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::config(format!("Draft is not valid quote JSON: {err}"))
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}
