//! # Validation Module
//!
//! Submission rules for quotes and customer records.
//!
//! ## When Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Editing (every keystroke)          Submit                              │
//! │  ─────────────────────────          ──────                              │
//! │  • input coerced, never rejected    • validate_quote_for_submit         │
//! │  • totals recomputed                  ├── customer selected?            │
//! │                                       ├── any line described?           │
//! │                                       └── every line in range?          │
//! │                                     • only then: HTTP request           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use acerler_core::validation::validate_rate_percent;
//!
//! assert!(validate_rate_percent("discount rate", 15.0).is_ok());
//! assert!(validate_rate_percent("discount rate", 120.0).is_err());
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::line_item::LineItem;
use crate::quote::Quote;
use crate::types::CustomerDraft;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Rejects negative amounts (quantity, unit price).
pub fn validate_non_negative(field: &str, value: f64) -> ValidationResult<()> {
    if value < 0.0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Percentages must sit in 0–100.
pub fn validate_rate_percent(field: &str, value: f64) -> ValidationResult<()> {
    if !(0.0..=100.0).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0.0,
            max: 100.0,
        });
    }
    Ok(())
}

/// Validates a search query and returns it trimmed.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > 100 {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: 100,
        });
    }

    Ok(query.to_string())
}

/// Validates a backend record id before it is put into a URL path.
///
/// ## Rules
/// - Must not be empty
/// - Letters, digits, `-` and `_` only
///
/// ## Example
/// ```rust
/// use acerler_core::validation::validate_record_id;
///
/// assert!(validate_record_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_record_id("").is_err());
/// assert!(validate_record_id("../admin").is_err());
/// ```
pub fn validate_record_id(id: &str) -> ValidationResult<()> {
    let id = id.trim();
    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    // Backend ids are UUIDs; anything else must at least be path-safe.
    if uuid::Uuid::parse_str(id).is_ok() {
        return Ok(());
    }

    if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return Err(ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Line and Quote Validators
// =============================================================================

/// Checks one line's numeric domain.
///
/// VAT is not range-checked: 0, 1, 10 and 20 are the rates in use, but rates
/// change by decree. Descriptions have no length cap and the number of lines
/// is unbounded.
pub fn validate_line_item(item: &LineItem) -> ValidationResult<()> {
    validate_non_negative("quantity", item.quantity)?;
    validate_non_negative("unit price", item.unit_price)?;
    validate_rate_percent("discount rate", item.discount_rate_percent)?;
    Ok(())
}

/// Everything that must hold before a quote may be sent to the backend.
///
/// ## Order
/// 1. Customer selected
/// 2. At least one described line
/// 3. Each line within its numeric domain
pub fn validate_quote_for_submit(quote: &Quote) -> CoreResult<()> {
    if !quote.customer.is_selected() {
        return Err(CoreError::CustomerNotSelected);
    }

    if !quote.has_described_item() {
        return Err(CoreError::NoDescribedLineItem);
    }

    for (index, item) in quote.items.iter().enumerate() {
        validate_line_item(item).map_err(|source| CoreError::InvalidLineItem { index, source })?;
    }

    Ok(())
}

/// Rules for adding or updating a customer.
///
/// Company name is required. Email may be empty, but when present it must
/// look like `name@domain`.
pub fn validate_customer_draft(draft: &CustomerDraft) -> ValidationResult<()> {
    if draft.company_name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "company name".to_string(),
        });
    }

    let email = draft.email.trim();
    if !email.is_empty() {
        let well_formed = match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
            }
            None => false,
        };
        if !well_formed {
            return Err(ValidationError::InvalidFormat {
                field: "email".to_string(),
                reason: "expected name@domain".to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
