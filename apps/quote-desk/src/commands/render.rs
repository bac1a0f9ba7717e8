//! Plain-text tables for terminal output.

use std::fmt::Write;

use acerler_core::overview::QuoteOverview;
use acerler_core::quote::Quote;
use acerler_core::search::QuoteSummary;
use acerler_core::types::{Customer, QuoteStatus};

const DESCRIPTION_WIDTH: usize = 28;

fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut clipped: String = text.chars().take(width.saturating_sub(1)).collect();
        clipped.push('…');
        clipped
    }
}

/// Header, line table and totals of one quote.
pub fn quote(quote: &Quote) -> String {
    let mut out = String::new();

    let number = quote.quote_number.as_deref().unwrap_or("(new)");
    let customer = if quote.customer.is_selected() {
        quote.customer.name.as_str()
    } else {
        "(no customer)"
    };
    let _ = writeln!(out, "Quote {number}  {customer}  {}", quote.quote_date);
    if !quote.subject.is_empty() {
        let _ = writeln!(out, "Subject: {}", quote.subject);
    }
    if quote.status.is_closed() {
        let _ = writeln!(out, "Status: {} (closed)", quote.status);
    } else {
        let _ = writeln!(out, "Status: {}", quote.status);
    }
    out.push('\n');

    let _ = writeln!(
        out,
        "{:>3}  {:<w$}  {:>9} {:<5} {:>11} {:>6} {:>6} {:>12}",
        "#",
        "Description",
        "Qty",
        "Unit",
        "Unit price",
        "Disc%",
        "VAT%",
        "Total",
        w = DESCRIPTION_WIDTH
    );
    for (i, item) in quote.items.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}  {:<w$}  {:>9.2} {:<5} {:>11.2} {:>6.2} {:>6.2} {:>12.2}",
            i + 1,
            clip(&item.description, DESCRIPTION_WIDTH),
            item.quantity,
            item.unit.code(),
            item.unit_price,
            item.discount_rate_percent,
            item.vat_rate_percent,
            item.line_total(),
            w = DESCRIPTION_WIDTH
        );
    }
    out.push('\n');

    let currency = quote.currency;
    let totals = &quote.totals;
    let _ = writeln!(out, "{:<16}{:>14} {currency}", "Subtotal", totals.subtotal.to_string());
    let _ = writeln!(out, "{:<16}{:>14} {currency}", "Total discount", totals.total_discount.to_string());
    let _ = writeln!(out, "{:<16}{:>14} {currency}", "Total VAT", totals.total_vat.to_string());
    let _ = write!(out, "{:<16}{:>14} {currency}", "Grand total", totals.grand_total.to_string());

    out
}

pub fn customers(customers: &[&Customer]) -> String {
    if customers.is_empty() {
        return "No customers found".to_string();
    }
    let mut out = String::new();
    for customer in customers {
        let _ = writeln!(
            out,
            "{:<38}  {:<30}  {}",
            customer.id,
            clip(&customer.company_name, 30),
            customer.tax_id.as_deref().unwrap_or("-")
        );
    }
    out.trim_end().to_string()
}

pub fn quote_list(quotes: &[&QuoteSummary]) -> String {
    if quotes.is_empty() {
        return "No quotes found".to_string();
    }
    let mut out = String::new();
    for quote in quotes {
        let date = quote
            .quote_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{:<16}  {:<24}  {:<10}  {:>14}  {}",
            quote.quote_number.as_deref().unwrap_or(&quote.id),
            clip(&quote.customer_name, 24),
            date,
            quote.grand_total.to_string(),
            quote.status
        );
    }
    out.trim_end().to_string()
}

/// Dashboard counts, totals and the most recent quotes.
pub fn overview(overview: &QuoteOverview) -> String {
    let mut out = String::new();
    let counts = &overview.by_status;

    let _ = writeln!(out, "{:<18}{:>8}", "Quotes", overview.total_quotes);
    let _ = writeln!(out, "{:<18}{:>8}", "Awaiting reply", counts.awaiting_reply());
    let _ = writeln!(out, "{:<18}{:>8}", "Accepted", counts.accepted);
    let _ = writeln!(out, "{:<18}{:>8}", "Customers", overview.customer_count);
    out.push('\n');

    let _ = writeln!(
        out,
        "This month: {} quotes, {}",
        overview.quotes_this_month, overview.total_this_month
    );
    let _ = writeln!(out, "Accepted value: {}", overview.accepted_total);
    out.push('\n');

    let by_status: Vec<String> = QuoteStatus::ALL
        .iter()
        .map(|status| format!("{} {}", status.code(), counts.get(*status)))
        .collect();
    let _ = writeln!(out, "By status: {}", by_status.join(" · "));
    out.push('\n');

    let recent: Vec<&QuoteSummary> = overview.recent.iter().collect();
    let _ = writeln!(out, "Recent quotes:");
    out.push_str(&quote_list(&recent));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use acerler_core::line_item::LineItemUpdate;
    use acerler_core::overview::StatusCounts;
    use acerler_core::QuoteEditor;

    #[test]
    fn test_quote_shows_totals() {
        let mut editor = QuoteEditor::new();
        editor
            .update_item(0, LineItemUpdate::Description("Bims blok".into()))
            .unwrap();
        editor.update_item(0, LineItemUpdate::Quantity(2.0)).unwrap();
        editor.update_item(0, LineItemUpdate::UnitPrice(100.0)).unwrap();
        editor.update_item(0, LineItemUpdate::DiscountRate(10.0)).unwrap();

        let text = quote(editor.quote());
        assert!(text.contains("Quote (new)  (no customer)"));
        assert!(!text.contains("(closed)"));
        assert!(text.contains("Bims blok"));
        assert!(text.contains("216.00"));
        assert!(text.lines().last().unwrap().starts_with("Grand total"));
        assert!(text.ends_with("216.00 TRY"));
    }

    #[test]
    fn test_clip_long_description() {
        assert_eq!(clip("kısa", 10), "kısa");
        assert_eq!(clip("çok uzun açıklama", 6), "çok u…");
    }

    #[test]
    fn test_overview_lists_status_counts() {
        let data = QuoteOverview {
            total_quotes: 4,
            by_status: StatusCounts {
                sent: 2,
                pending: 1,
                cancelled: 1,
                ..StatusCounts::default()
            },
            ..QuoteOverview::default()
        };

        let text = overview(&data);
        assert!(text
            .lines()
            .any(|line| line.starts_with("Awaiting reply") && line.ends_with(" 3")));
        assert!(text.contains("gonderildi 2 · beklemede 1"));
        assert!(text.contains("iptal 1"));
        assert!(text.ends_with("No quotes found"));
    }

    #[test]
    fn test_empty_lists() {
        assert_eq!(customers(&[]), "No customers found");
        assert_eq!(quote_list(&[]), "No quotes found");
    }
}
