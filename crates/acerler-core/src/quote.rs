//! # Quote
//!
//! The quote document and the aggregate half of the totals calculator.
//!
//! ## Aggregate Computation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Σ gross    ──round2──► subtotal        ─┐                             │
//! │  Σ discount ──round2──► total_discount  ─┼─► grand_total =             │
//! │  Σ vat      ──round2──► total_vat       ─┘   subtotal                  │
//! │                                              - total_discount           │
//! │                                              + total_vat                │
//! │                                                                         │
//! │  Each aggregate is rounded on its own; the grand total is built from    │
//! │  the ROUNDED aggregates, never from rounded line totals.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::line_item::{LineAmounts, LineItem};
use crate::money::Money;
use crate::types::{Currency, CustomerSnapshot, QuoteStatus};

// =============================================================================
// Totals
// =============================================================================

/// Rounded quote aggregates.
///
/// ## Invariant
/// `grand_total == subtotal - total_discount + total_vat`, exactly, because
/// all four are integer kuruş. Aggregates past the i64 range clamp at its
/// bounds rather than overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuoteTotals {
    pub subtotal: Money,
    pub total_discount: Money,
    pub total_vat: Money,
    pub grand_total: Money,
}

impl QuoteTotals {
    /// Sums every line and rounds each aggregate to two decimals.
    ///
    /// ## Example
    /// ```rust
    /// use acerler_core::line_item::LineItem;
    /// use acerler_core::quote::QuoteTotals;
    /// use acerler_core::types::Unit;
    ///
    /// let items = vec![
    ///     LineItem::priced("Bims", 2.0, Unit::Piece, 100.0, 20.0, 10.0),
    ///     LineItem::priced("Nakliye", 1.0, Unit::Day, 50.0, 1.0, 0.0),
    /// ];
    /// let totals = QuoteTotals::compute(&items);
    /// assert_eq!(totals.subtotal.kurus(), 25_000);
    /// assert_eq!(totals.total_discount.kurus(), 2_000);
    /// assert_eq!(totals.total_vat.kurus(), 3_650);
    /// assert_eq!(totals.grand_total.kurus(), 26_650);
    /// ```
    pub fn compute(items: &[LineItem]) -> Self {
        let sums = items
            .iter()
            .map(LineItem::amounts)
            .fold(LineAmounts::default(), |acc, line| LineAmounts {
                gross: acc.gross + line.gross,
                discount: acc.discount + line.discount,
                net_of_discount: acc.net_of_discount + line.net_of_discount,
                vat: acc.vat + line.vat,
                total: acc.total + line.total,
            });

        let subtotal = Money::round_from_major(sums.gross);
        let total_discount = Money::round_from_major(sums.discount);
        let total_vat = Money::round_from_major(sums.vat);

        QuoteTotals {
            subtotal,
            total_discount,
            total_vat,
            grand_total: subtotal - total_discount + total_vat,
        }
    }
}

// =============================================================================
// Quote
// =============================================================================

/// A sales quote (teklif).
///
/// `items` and `totals` are only kept consistent by
/// [`QuoteEditor`](crate::editor::QuoteEditor); a `Quote` built by hand should
/// go through the editor before it is submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Quote {
    /// Server-assigned id; `None` until the quote has been created.
    pub id: Option<String>,

    /// Human-readable number (e.g. `TKL-2024-0042`), assigned on create.
    pub quote_number: Option<String>,

    pub customer: CustomerSnapshot,

    #[ts(as = "String")]
    pub quote_date: NaiveDate,

    #[ts(as = "Option<String>")]
    pub valid_until: Option<NaiveDate>,

    /// Konu.
    pub subject: String,

    /// Display order only.
    pub items: Vec<LineItem>,

    pub totals: QuoteTotals,

    pub currency: Currency,

    pub payment_terms: String,

    pub delivery_time: String,

    pub notes: String,

    pub status: QuoteStatus,
}

impl Quote {
    /// An empty draft dated today with one blank line.
    pub fn new() -> Self {
        Quote::dated(Utc::now().date_naive())
    }

    /// An empty draft with an explicit quote date.
    pub fn dated(quote_date: NaiveDate) -> Self {
        Quote {
            id: None,
            quote_number: None,
            customer: CustomerSnapshot::default(),
            quote_date,
            valid_until: None,
            subject: String::new(),
            items: vec![LineItem::new()],
            totals: QuoteTotals::default(),
            currency: Currency::default(),
            payment_terms: String::new(),
            delivery_time: String::new(),
            notes: String::new(),
            status: QuoteStatus::default(),
        }
    }

    /// True when at least one line names a product or service.
    pub fn has_described_item(&self) -> bool {
        self.items.iter().any(LineItem::has_description)
    }
}

impl Default for Quote {
    fn default() -> Self {
        Quote::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
