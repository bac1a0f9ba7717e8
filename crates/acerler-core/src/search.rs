//! Client-side filters for the customer picker and the quote list.
//!
//! Matching is a case-insensitive substring test; an empty query matches
//! everything.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Customer, QuoteStatus};

/// One row of the quote list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuoteSummary {
    pub id: String,
    pub quote_number: Option<String>,
    pub customer_name: String,
    pub subject: String,
    #[ts(as = "Option<String>")]
    pub quote_date: Option<NaiveDate>,
    pub grand_total: Money,
    pub status: QuoteStatus,
}

fn matches(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Customers whose company name contains `query`.
///
/// ## Example
/// ```rust
/// use acerler_core::search::filter_customers;
/// use acerler_core::types::Customer;
///
/// let customers = vec![Customer {
///     id: "1".into(),
///     company_name: "Kapadokya Yapı".into(),
///     contact_person: None,
///     address: None,
///     tax_id: None,
///     tax_office: None,
///     phone: None,
///     email: None,
///     notes: None,
/// }];
/// assert_eq!(filter_customers(&customers, "yapı").len(), 1);
/// assert!(filter_customers(&customers, "beton").is_empty());
/// ```
pub fn filter_customers<'a>(customers: &'a [Customer], query: &str) -> Vec<&'a Customer> {
    let needle = query.trim().to_lowercase();
    customers
        .iter()
        .filter(|c| matches(&c.company_name, &needle))
        .collect()
}

/// Quotes whose number, customer name or subject contains `query`, optionally
/// narrowed to one status.
pub fn filter_quotes<'a>(
    quotes: &'a [QuoteSummary],
    query: &str,
    status: Option<QuoteStatus>,
) -> Vec<&'a QuoteSummary> {
    let needle = query.trim().to_lowercase();
    quotes
        .iter()
        .filter(|q| status.map_or(true, |s| q.status == s))
        .filter(|q| {
            q.quote_number
                .as_deref()
                .is_some_and(|n| matches(n, &needle))
                || matches(&q.customer_name, &needle)
                || matches(&q.subject, &needle)
        })
        .collect()
}
