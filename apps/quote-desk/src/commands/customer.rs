//! Customer records: add, update and delete.
//!
//! Customer files use the backend's field names:
//! ```json
//! { "firma_adi": "Kapadokya Yapı", "yetkili_kisi": "Ayşe Kaya", "telefon": "0384 341 00 00" }
//! ```
//! Missing fields are sent empty.

use std::path::Path;

use acerler_client::wire::CustomerPayload;
use acerler_client::{Notification, QuoteApi};
use acerler_core::types::CustomerDraft;
use acerler_core::validation::validate_customer_draft;
use serde_json::json;
use tracing::info;

use super::Report;
use crate::error::AppError;

/// Parses and checks a customer file's contents.
pub fn draft_from_json(contents: &str) -> Result<CustomerDraft, AppError> {
    let payload: CustomerPayload = serde_json::from_str(contents)
        .map_err(|e| AppError::config(format!("Customer file is not valid customer JSON: {e}")))?;
    let draft = CustomerDraft::from(payload);
    validate_customer_draft(&draft)?;
    Ok(draft)
}

fn load_customer(path: &Path) -> Result<CustomerDraft, AppError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| AppError::config(format!("Cannot read customer file: {e}")))?;
    let draft = draft_from_json(&contents)?;
    info!(path = %path.display(), company = %draft.company_name, "Customer file loaded");
    Ok(draft)
}

pub async fn add(api: &dyn QuoteApi, path: &Path) -> Result<Report, AppError> {
    let draft = load_customer(path)?;
    let id = api.create_customer(&draft).await?;
    let notification = Notification::success("Customer added");

    Ok(Report {
        text: match &id {
            Some(id) => format!("{} ({id})", notification.message),
            None => notification.message.clone(),
        },
        json: json!({ "notification": notification, "id": id }),
    })
}

pub async fn update(api: &dyn QuoteApi, id: &str, path: &Path) -> Result<Report, AppError> {
    let draft = load_customer(path)?;
    api.update_customer(id, &draft).await?;
    let notification = Notification::success("Customer updated");

    Ok(Report {
        text: notification.message.clone(),
        json: json!({ "notification": notification, "id": id }),
    })
}

pub async fn delete(api: &dyn QuoteApi, id: &str) -> Result<Report, AppError> {
    api.delete_customer(id).await?;
    let notification = Notification::success("Customer deleted");

    Ok(Report {
        text: notification.message.clone(),
        json: json!({ "notification": notification, "id": id }),
    })
}
