//! Draft quote files: offline totals and submission.

use std::path::Path;

use acerler_client::wire::QuoteDocument;
use acerler_client::{submit, Notification, QuoteApi, SubmitOutcome};
use acerler_core::QuoteEditor;
use serde_json::json;
use tracing::info;

use super::render;
use super::Report;
use crate::error::AppError;

/// Builds an editor from quote JSON. A document with an `id` opens in edit
/// mode; anything else is a new quote.
pub fn editor_from_json(contents: &str) -> Result<QuoteEditor, AppError> {
    let document: QuoteDocument = serde_json::from_str(contents)?;
    let quote = document.into_quote()?;
    Ok(match quote.id.clone() {
        Some(id) => QuoteEditor::open(id, quote),
        None => QuoteEditor::from_draft(quote),
    })
}

/// Reads a draft file into an editor.
pub fn load_draft(path: &Path) -> Result<QuoteEditor, AppError> {
    let contents = std::fs::read_to_string(path)?;
    let editor = editor_from_json(&contents)?;
    info!(path = %path.display(), items = editor.items().len(), "Draft loaded");
    Ok(editor)
}

pub fn totals(path: &Path) -> Result<Report, AppError> {
    let editor = load_draft(path)?;
    let submit_action = if editor.is_new() { "create" } else { "update" };
    Ok(Report {
        text: render::quote(editor.quote()),
        json: json!({
            "items": editor.items(),
            "totals": editor.totals(),
            "submittable": editor.validate_for_submit().is_ok(),
            "submit_action": submit_action,
            "id": editor.quote_id(),
        }),
    })
}

pub async fn submit_draft(path: &Path, api: &dyn QuoteApi) -> Result<Report, AppError> {
    let mut editor = load_draft(path)?;
    let result = submit(&mut editor, api).await;
    let notification = Notification::from_submit(&result);
    let outcome = result?;

    let (id, quote_number) = match &outcome {
        SubmitOutcome::Created { id, quote_number } => (id.clone(), quote_number.clone()),
        SubmitOutcome::Updated { id } => (id.clone(), editor.quote().quote_number.clone()),
    };

    Ok(Report {
        text: format!(
            "{}\nGrand total: {} {}",
            notification.message,
            editor.totals().grand_total,
            editor.quote().currency
        ),
        json: json!({
            "notification": notification,
            "id": id,
            "quote_number": quote_number,
            "totals": editor.totals(),
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use acerler_core::EditorMode;

    const DRAFT: &str = r#"{
        "musteri_id": "c-1",
        "musteri_adi": "Acar Beton",
        "teklif_tarihi": "2024-03-01",
        "kalemler": [
            { "urun_hizmet": "Bims blok", "miktar": 2, "birim": "adet",
              "birim_fiyat": 100, "kdv_orani": 20, "iskonto_orani": 10 },
            { "urun_hizmet": "Nakliye", "miktar": 1, "birim": "saat",
              "birim_fiyat": 50, "kdv_orani": 1, "iskonto_orani": 0 }
        ]
    }"#;

    #[test]
    fn test_new_draft_is_create_mode() {
        let editor = editor_from_json(DRAFT).unwrap();
        assert!(editor.is_new());
        assert_eq!(editor.totals().grand_total.kurus(), 26_650);
        assert!(editor.validate_for_submit().is_ok());
    }

    #[test]
    fn test_draft_with_id_is_edit_mode() {
        let editor = editor_from_json(r#"{ "id": "q-5", "musteri_adi": "Acar" }"#).unwrap();
        assert_eq!(editor.mode(), &EditorMode::Edit { id: "q-5".into() });
        // Empty line list still yields one blank line.
        assert_eq!(editor.items().len(), 1);
    }

    #[test]
    fn test_totals_report_names_submit_action() {
        let path = std::env::temp_dir().join(format!("quote-desk-draft-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "id": "q-5", "musteri_adi": "Acar" }"#).unwrap();

        let report = totals(&path).unwrap();
        assert_eq!(report.json["submit_action"], "update");
        assert_eq!(report.json["id"], "q-5");
        assert_eq!(report.json["submittable"], false);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = editor_from_json("{ not json").unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::Config);
    }
}
