//! # Error Types
//!
//! Domain-specific error types for acerler-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  acerler-core errors (this file)                                       │
//! │  ├── CoreError        - Quote editing rule violations                  │
//! │  └── ValidationError  - Field-level input failures                     │
//! │                                                                         │
//! │  acerler-client errors (separate crate)                                │
//! │  └── ClientError      - Config, HTTP and decoding failures             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ClientError → Notification        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Quote editing and submission rule violations.
///
/// None of these are fatal: the editor is left exactly as it was and the
/// message is shown to the user.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Tried to remove the only remaining line item.
    ///
    /// ## User Workflow
    /// ```text
    /// Quote has 1 line
    ///      │
    ///      ▼
    /// remove_item(0)
    ///      │
    ///      ▼
    /// LastLineItem ──► UI shows: "A quote needs at least one line item"
    /// ```
    #[error("A quote needs at least one line item")]
    LastLineItem,

    /// Line index does not exist. `index` is 0-based; the message counts from 1.
    #[error("Line item {} does not exist (quote has {len} items)", .index + 1)]
    LineItemNotFound { index: usize, len: usize },

    /// No customer has been chosen for the quote.
    #[error("Select a customer before saving the quote")]
    CustomerNotSelected,

    /// Every line item has an empty description.
    #[error("Enter at least one line item")]
    NoDescribedLineItem,

    /// A line item carries a value outside its allowed domain. `index` is
    /// 0-based; the message counts from 1, as the form numbers its rows.
    #[error("Line item {}: {source}", .index + 1)]
    InvalidLineItem {
        index: usize,
        #[source]
        source: ValidationError,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Invalid format (e.g., invalid id, invalid date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
