//! # Line Items
//!
//! One row of a quote and the per-line half of the totals calculator.
//!
//! ## Per-Line Computation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  quantity × unit_price ─────────────────────► gross                     │
//! │                                                 │                       │
//! │  gross × discount_rate / 100 ───────────────► discount                  │
//! │                                                 │                       │
//! │  gross - discount ──────────────────────────► net_of_discount           │
//! │                                                 │                       │
//! │  net_of_discount × vat_rate / 100 ──────────► vat                       │
//! │                                                 │                       │
//! │  net_of_discount + vat ─────────────────────► line_total                │
//! │                                                                         │
//! │  No rounding here. Only the quote aggregates are rounded.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::input::{parse_number, sanitize};
use crate::types::Unit;
use crate::{DEFAULT_QUANTITY, DEFAULT_VAT_RATE_PERCENT};

// =============================================================================
// Line Amounts
// =============================================================================

/// The unrounded amounts one line contributes to the quote.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineAmounts {
    pub gross: f64,
    pub discount: f64,
    pub net_of_discount: f64,
    pub vat: f64,
    pub total: f64,
}

impl LineAmounts {
    /// Runs the per-line computation.
    ///
    /// ## Example
    /// ```rust
    /// use acerler_core::line_item::LineAmounts;
    ///
    /// let amounts = LineAmounts::compute(2.0, 100.0, 20.0, 10.0);
    /// assert_eq!(amounts.gross, 200.0);
    /// assert_eq!(amounts.discount, 20.0);
    /// assert_eq!(amounts.vat, 36.0);
    /// assert_eq!(amounts.total, 216.0);
    /// ```
    pub fn compute(
        quantity: f64,
        unit_price: f64,
        vat_rate_percent: f64,
        discount_rate_percent: f64,
    ) -> Self {
        let gross = quantity * unit_price;
        let discount = gross * (discount_rate_percent / 100.0);
        let net_of_discount = gross - discount;
        let vat = net_of_discount * (vat_rate_percent / 100.0);

        LineAmounts {
            gross,
            discount,
            net_of_discount,
            vat,
            total: net_of_discount + vat,
        }
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One row of a quote.
///
/// ## Invariants
/// - Numeric fields are always finite (setters coerce NaN/∞ to 0)
/// - `line_total` is derived; it only changes through [`LineItem::recompute`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Product or service name (ürün/hizmet).
    pub description: String,

    /// Free-text note, not used in calculation.
    pub detail: String,

    pub quantity: f64,

    pub unit: Unit,

    pub unit_price: f64,

    pub vat_rate_percent: f64,

    pub discount_rate_percent: f64,

    line_total: f64,
}

impl Default for LineItem {
    fn default() -> Self {
        LineItem::new()
    }
}

impl LineItem {
    /// A fresh row as the form adds it: quantity 1, price 0, VAT 20%, no discount.
    pub fn new() -> Self {
        LineItem {
            description: String::new(),
            detail: String::new(),
            quantity: DEFAULT_QUANTITY,
            unit: Unit::default(),
            unit_price: 0.0,
            vat_rate_percent: DEFAULT_VAT_RATE_PERCENT,
            discount_rate_percent: 0.0,
            line_total: 0.0,
        }
    }

    /// Builds a priced row and computes its total.
    ///
    /// ## Example
    /// ```rust
    /// use acerler_core::line_item::LineItem;
    /// use acerler_core::types::Unit;
    ///
    /// let item = LineItem::priced("Bims blok 20'lik", 2.0, Unit::Piece, 100.0, 20.0, 10.0);
    /// assert_eq!(item.line_total(), 216.0);
    /// ```
    pub fn priced(
        description: impl Into<String>,
        quantity: f64,
        unit: Unit,
        unit_price: f64,
        vat_rate_percent: f64,
        discount_rate_percent: f64,
    ) -> Self {
        let mut item = LineItem {
            description: description.into(),
            detail: String::new(),
            quantity: sanitize(quantity),
            unit,
            unit_price: sanitize(unit_price),
            vat_rate_percent: sanitize(vat_rate_percent),
            discount_rate_percent: sanitize(discount_rate_percent),
            line_total: 0.0,
        };
        item.recompute();
        item
    }

    /// The derived line total (net of discount, VAT included).
    #[inline]
    pub fn line_total(&self) -> f64 {
        self.line_total
    }

    /// Per-line amounts from the current numeric fields.
    pub fn amounts(&self) -> LineAmounts {
        LineAmounts::compute(
            self.quantity,
            self.unit_price,
            self.vat_rate_percent,
            self.discount_rate_percent,
        )
    }

    /// Refreshes `line_total` from the numeric fields.
    pub fn recompute(&mut self) {
        self.line_total = self.amounts().total;
    }

    /// True when the row names a product or service.
    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }

    /// Applies one field change. Does not recompute; the editor does that
    /// once the mutation is complete.
    pub(crate) fn apply(&mut self, update: LineItemUpdate) {
        match update {
            LineItemUpdate::Description(text) => self.description = text,
            LineItemUpdate::Detail(text) => self.detail = text,
            LineItemUpdate::Quantity(value) => self.quantity = sanitize(value),
            LineItemUpdate::Unit(unit) => self.unit = unit,
            LineItemUpdate::UnitPrice(value) => self.unit_price = sanitize(value),
            LineItemUpdate::VatRate(value) => self.vat_rate_percent = sanitize(value),
            LineItemUpdate::DiscountRate(value) => {
                self.discount_rate_percent = sanitize(value)
            }
        }
    }
}

// =============================================================================
// Field Updates
// =============================================================================

/// Numeric fields that accept raw typed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum NumericField {
    Quantity,
    UnitPrice,
    VatRate,
    DiscountRate,
}

/// A single field change on a line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum LineItemUpdate {
    Description(String),
    Detail(String),
    Quantity(f64),
    Unit(Unit),
    UnitPrice(f64),
    VatRate(f64),
    DiscountRate(f64),
}

impl LineItemUpdate {
    /// Builds an update from typed text; non-numeric text becomes `0`.
    ///
    /// ## Example
    /// ```rust
    /// use acerler_core::line_item::{LineItemUpdate, NumericField};
    ///
    /// assert_eq!(
    ///     LineItemUpdate::from_input(NumericField::UnitPrice, ""),
    ///     LineItemUpdate::UnitPrice(0.0)
    /// );
    /// ```
    pub fn from_input(field: NumericField, raw: &str) -> Self {
        let value = parse_number(raw);
        match field {
            NumericField::Quantity => LineItemUpdate::Quantity(value),
            NumericField::UnitPrice => LineItemUpdate::UnitPrice(value),
            NumericField::VatRate => LineItemUpdate::VatRate(value),
            NumericField::DiscountRate => LineItemUpdate::DiscountRate(value),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
