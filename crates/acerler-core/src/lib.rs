//! # acerler-core: Pure Quote Logic
//!
//! This crate holds the sales-quote (teklif) logic of the Acerler business
//! suite as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Acerler Quote Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              quote-desk / web form (front ends)                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ acerler-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ line_item │  │   quote   │  │  editor   │  │ validation│  │   │
//! │  │   │ per-line  │  │ aggregate │  │ add/remove│  │  submit   │  │   │
//! │  │   │   math    │  │  totals   │  │ recompute │  │   rules   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               acerler-client (HTTP to the backend)              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Units, currencies, statuses, customers
//! - [`money`] - Kuruş-based `Money` for rounded aggregates
//! - [`input`] - Coercion of typed numeric input
//! - [`line_item`] - Line items and per-line amounts
//! - [`quote`] - The quote document and its aggregate totals
//! - [`editor`] - The editing session (line item store + recompute)
//! - [`validation`] - Submission rules
//! - [`search`] - Customer picker and quote list filters
//! - [`overview`] - Dashboard counts and totals
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use acerler_core::editor::QuoteEditor;
//! use acerler_core::line_item::LineItemUpdate;
//!
//! let mut editor = QuoteEditor::new();
//! editor.update_item(0, LineItemUpdate::Quantity(2.0)).unwrap();
//! editor.update_item(0, LineItemUpdate::UnitPrice(100.0)).unwrap();
//! editor.update_item(0, LineItemUpdate::DiscountRate(10.0)).unwrap();
//!
//! // 200 gross, 20 discount, 36 VAT (20% default)
//! assert_eq!(editor.totals().grand_total.kurus(), 21_600);
//! ```

pub mod editor;
pub mod error;
pub mod input;
pub mod line_item;
pub mod money;
pub mod overview;
pub mod quote;
pub mod search;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use editor::{EditorMode, QuoteEditor};
pub use error::{CoreError, CoreResult, ValidationError};
pub use line_item::{LineAmounts, LineItem, LineItemUpdate, NumericField};
pub use money::Money;
pub use overview::{QuoteOverview, StatusCounts};
pub use quote::{Quote, QuoteTotals};
pub use search::QuoteSummary;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Quantity of a freshly added line.
pub const DEFAULT_QUANTITY: f64 = 1.0;

/// VAT rate of a freshly added line (KDV %20).
pub const DEFAULT_VAT_RATE_PERCENT: f64 = 20.0;

