//! Backend listings and quote lifecycle commands.

use acerler_client::{Notification, QuoteApi};
use acerler_core::search::{filter_customers, filter_quotes};
use acerler_core::types::QuoteStatus;
use acerler_core::validation::validate_search_query;
use acerler_core::QuoteEditor;
use serde_json::json;

use super::render;
use super::Report;
use crate::error::AppError;

pub async fn customers(api: &dyn QuoteApi, query: &str) -> Result<Report, AppError> {
    let query = validate_search_query(query)?;
    let all = api.list_customers().await?;
    let found = filter_customers(&all, &query);

    Ok(Report {
        text: render::customers(&found),
        json: json!(found),
    })
}

/// Status filtering happens on the server; the text query is applied locally.
pub async fn list(
    api: &dyn QuoteApi,
    status: Option<QuoteStatus>,
    query: &str,
) -> Result<Report, AppError> {
    let query = validate_search_query(query)?;
    let all = api.list_quotes(status).await?;
    let found = filter_quotes(&all, &query, status);

    Ok(Report {
        text: render::quote_list(&found),
        json: json!(found),
    })
}

pub async fn show(api: &dyn QuoteApi, id: &str) -> Result<Report, AppError> {
    let quote = QuoteEditor::open(id, api.get_quote(id).await?).into_quote();

    Ok(Report {
        text: render::quote(&quote),
        json: json!(quote),
    })
}

pub async fn change_status(
    api: &dyn QuoteApi,
    id: &str,
    status: QuoteStatus,
) -> Result<Report, AppError> {
    api.set_status(id, status).await?;
    let notification = Notification::success(format!("Status updated: {status}"));

    Ok(Report {
        text: notification.message.clone(),
        json: json!({ "notification": notification, "id": id, "status": status }),
    })
}

pub async fn delete(api: &dyn QuoteApi, id: &str) -> Result<Report, AppError> {
    api.delete_quote(id).await?;
    let notification = Notification::success("Quote deleted");

    Ok(Report {
        text: notification.message.clone(),
        json: json!({ "notification": notification, "id": id }),
    })
}

pub async fn overview(api: &dyn QuoteApi) -> Result<Report, AppError> {
    let overview = api.quote_overview().await?;

    Ok(Report {
        text: render::overview(&overview),
        json: json!(overview),
    })
}
