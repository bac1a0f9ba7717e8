//! # Quote Overview
//!
//! Dashboard figures for the quote module.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  total_quotes      awaiting reply       accepted        customers       │
//! │       42           sent + pending          11               17          │
//! │                                                                         │
//! │  This month: 6 quotes, 184 300.00      Accepted value: 912 450.00       │
//! │                                                                         │
//! │  By status: taslak 9 · gonderildi 12 · beklemede 5 · kabul_edildi 11    │
//! │             reddedildi 4 · iptal 1                                      │
//! │                                                                         │
//! │  Recent quotes: [QuoteSummary]                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The backend computes every figure.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::search::QuoteSummary;
use crate::types::QuoteStatus;

/// Number of quotes in each status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StatusCounts {
    pub draft: u64,
    pub sent: u64,
    pub pending: u64,
    pub accepted: u64,
    pub rejected: u64,
    pub cancelled: u64,
}

impl StatusCounts {
    pub fn get(&self, status: QuoteStatus) -> u64 {
        match status {
            QuoteStatus::Draft => self.draft,
            QuoteStatus::Sent => self.sent,
            QuoteStatus::Pending => self.pending,
            QuoteStatus::Accepted => self.accepted,
            QuoteStatus::Rejected => self.rejected,
            QuoteStatus::Cancelled => self.cancelled,
        }
    }

    /// Quotes the customer has not answered yet (sent or pending).
    pub fn awaiting_reply(&self) -> u64 {
        self.sent.saturating_add(self.pending)
    }
}

/// Summary shown on the quote dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuoteOverview {
    pub total_quotes: u64,
    pub by_status: StatusCounts,
    pub customer_count: u64,
    pub quotes_this_month: u64,
    pub total_this_month: Money,
    pub accepted_total: Money,
    /// Newest first, as the backend orders them.
    pub recent: Vec<QuoteSummary>,
}
