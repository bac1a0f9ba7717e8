//! # Quote Editor
//!
//! The in-memory editing session behind the quote form.
//!
//! ## Editor Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Quote Editor Operations                              │
//! │                                                                         │
//! │  Form Action              Editor Method            State Change         │
//! │  ───────────              ─────────────            ────────────         │
//! │                                                                         │
//! │  Click "Kalem Ekle" ─────► add_item() ───────────► items.push(blank)   │
//! │                                                                         │
//! │  Type in a field ────────► update_item_input() ──► items[i].field = v  │
//! │                                                                         │
//! │  Click trash icon ───────► remove_item() ────────► items.remove(i)     │
//! │                                                    (never the last)    │
//! │                                                                         │
//! │  Pick customer ──────────► select_customer() ────► customer snapshot   │
//! │                                                                         │
//! │  Every item mutation ends with recompute() ──────► totals refreshed    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! One editor per open form. It is not shared: callers hold it by value and
//! pass `&mut` to whatever mutates it, so there is nothing to lock.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::line_item::{LineItem, LineItemUpdate, NumericField};
use crate::quote::{Quote, QuoteTotals};
use crate::types::{Currency, Customer, CustomerSnapshot, QuoteStatus};
use crate::validation::validate_quote_for_submit;

/// Whether submitting creates a new quote or overwrites an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum EditorMode {
    Create,
    Edit { id: String },
}

/// Editing session for one quote.
///
/// ## Invariants
/// - `quote.items` is never empty
/// - `quote.totals` always matches `quote.items` after any public method returns
#[derive(Debug, Clone)]
pub struct QuoteEditor {
    quote: Quote,
    mode: EditorMode,
}

impl Default for QuoteEditor {
    fn default() -> Self {
        QuoteEditor::new()
    }
}

impl QuoteEditor {
    /// Starts a new quote dated today, with one blank line.
    pub fn new() -> Self {
        QuoteEditor::from_draft(Quote::new())
    }

    /// Starts a new quote from a prepared draft (create mode).
    ///
    /// A draft with no lines gets one blank line.
    pub fn from_draft(mut quote: Quote) -> Self {
        quote.id = None;
        quote.quote_number = None;
        let mut editor = QuoteEditor {
            quote,
            mode: EditorMode::Create,
        };
        editor.ensure_one_item();
        editor.recompute();
        editor
    }

    /// Opens a quote loaded from the backend (edit mode).
    ///
    /// Stored totals are not trusted; they are recomputed from the lines.
    pub fn open(id: impl Into<String>, mut quote: Quote) -> Self {
        let id = id.into();
        quote.id = Some(id.clone());
        let mut editor = QuoteEditor {
            quote,
            mode: EditorMode::Edit { id },
        };
        editor.ensure_one_item();
        editor.recompute();
        editor
    }

    // =========================================================================
    // Read Access
    // =========================================================================

    pub fn quote(&self) -> &Quote {
        &self.quote
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn items(&self) -> &[LineItem] {
        &self.quote.items
    }

    pub fn item(&self, index: usize) -> CoreResult<&LineItem> {
        let len = self.quote.items.len();
        self.quote
            .items
            .get(index)
            .ok_or(CoreError::LineItemNotFound { index, len })
    }

    pub fn totals(&self) -> QuoteTotals {
        self.quote.totals
    }

    /// Id of the quote being edited, if it exists on the server.
    pub fn quote_id(&self) -> Option<&str> {
        match &self.mode {
            EditorMode::Create => None,
            EditorMode::Edit { id } => Some(id),
        }
    }

    pub fn is_new(&self) -> bool {
        self.mode == EditorMode::Create
    }

    // =========================================================================
    // Line Items
    // =========================================================================

    /// Appends a blank line and returns its index.
    ///
    /// Existing lines are untouched, so their totals cannot change.
    pub fn add_item(&mut self) -> usize {
        self.quote.items.push(LineItem::new());
        self.recompute();
        self.quote.items.len() - 1
    }

    /// Removes a line and returns it.
    ///
    /// Removing the only remaining line is refused and leaves the quote as it
    /// was.
    pub fn remove_item(&mut self, index: usize) -> CoreResult<LineItem> {
        let len = self.quote.items.len();
        if index >= len {
            return Err(CoreError::LineItemNotFound { index, len });
        }
        if len == 1 {
            return Err(CoreError::LastLineItem);
        }

        let removed = self.quote.items.remove(index);
        self.recompute();
        Ok(removed)
    }

    /// Applies one field change to a line.
    pub fn update_item(&mut self, index: usize, update: LineItemUpdate) -> CoreResult<()> {
        let len = self.quote.items.len();
        let item = self
            .quote
            .items
            .get_mut(index)
            .ok_or(CoreError::LineItemNotFound { index, len })?;

        item.apply(update);
        self.recompute();
        Ok(())
    }

    /// Applies raw typed text to a numeric field. Text that is not a number
    /// is stored as `0`.
    ///
    /// ## Example
    /// ```rust
    /// use acerler_core::editor::QuoteEditor;
    /// use acerler_core::line_item::NumericField;
    ///
    /// let mut editor = QuoteEditor::new();
    /// editor.update_item_input(0, NumericField::UnitPrice, "").unwrap();
    /// assert_eq!(editor.items()[0].unit_price, 0.0);
    /// assert_eq!(editor.items()[0].line_total(), 0.0);
    /// ```
    pub fn update_item_input(
        &mut self,
        index: usize,
        field: NumericField,
        raw: &str,
    ) -> CoreResult<()> {
        self.update_item(index, LineItemUpdate::from_input(field, raw))
    }

    // =========================================================================
    // Header Fields
    // =========================================================================

    /// Copies the customer's printable fields onto the quote.
    pub fn select_customer(&mut self, customer: &Customer) {
        self.quote.customer = CustomerSnapshot::from_customer(customer);
    }

    pub fn clear_customer(&mut self) {
        self.quote.customer = CustomerSnapshot::default();
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.quote.subject = subject.into();
    }

    pub fn set_quote_date(&mut self, date: NaiveDate) {
        self.quote.quote_date = date;
    }

    pub fn set_valid_until(&mut self, date: Option<NaiveDate>) {
        self.quote.valid_until = date;
    }

    pub fn set_payment_terms(&mut self, terms: impl Into<String>) {
        self.quote.payment_terms = terms.into();
    }

    pub fn set_delivery_time(&mut self, delivery: impl Into<String>) {
        self.quote.delivery_time = delivery.into();
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.quote.notes = notes.into();
    }

    pub fn set_currency(&mut self, currency: Currency) {
        self.quote.currency = currency;
    }

    pub fn set_status(&mut self, status: QuoteStatus) {
        self.quote.status = status;
    }

    // =========================================================================
    // Totals and Submission
    // =========================================================================

    /// Recomputes every line total and the quote aggregates.
    pub fn recompute(&mut self) {
        for item in &mut self.quote.items {
            item.recompute();
        }
        self.quote.totals = QuoteTotals::compute(&self.quote.items);

        debug!(
            items = self.quote.items.len(),
            grand_total = %self.quote.totals.grand_total,
            "Quote totals recomputed"
        );
    }

    /// Runs the submission rules without sending anything.
    pub fn validate_for_submit(&self) -> CoreResult<()> {
        validate_quote_for_submit(&self.quote)
    }

    /// Records the server's id and number after a successful create, so the
    /// next submit updates instead of creating a duplicate.
    pub fn mark_created(&mut self, id: impl Into<String>, quote_number: Option<String>) {
        let id = id.into();
        self.quote.id = Some(id.clone());
        self.quote.quote_number = quote_number;
        self.mode = EditorMode::Edit { id };
    }

    /// Consumes the editor and returns the quote.
    pub fn into_quote(self) -> Quote {
        self.quote
    }

    fn ensure_one_item(&mut self) {
        if self.quote.items.is_empty() {
            self.quote.items.push(LineItem::new());
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
