//! # Submit Workflow
//!
//! Saves the quote in an editor through a [`QuoteApi`].
//!
//! ## Flow
//! ```text
//! submit(&mut editor, api)
//!      │
//!      ▼
//! validate_for_submit ──✗──► ClientError::Invalid   (no request sent)
//!      │ ✓
//!      ▼
//! EditorMode::Create ──► POST teklifler ──► mark_created(id, teklif_no)
//! EditorMode::Edit   ──► PUT  teklifler/{id}
//!      │
//!      ▼
//! SubmitOutcome ──► Notification::success / Notification::error
//! ```
//!
//! On any failure the editor is left exactly as it was, so the user can fix
//! the problem and submit again.

use acerler_core::editor::{EditorMode, QuoteEditor};
use serde::Serialize;
use tracing::{info, warn};

use crate::api::QuoteApi;
use crate::error::{ClientError, ClientResult};

/// What a successful submit did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created {
        id: String,
        quote_number: Option<String>,
    },
    Updated {
        id: String,
    },
}

/// Validates locally, then creates or updates the quote on the backend.
pub async fn submit(editor: &mut QuoteEditor, api: &dyn QuoteApi) -> ClientResult<SubmitOutcome> {
    if let Err(err) = editor.validate_for_submit() {
        warn!(error = %err, "Quote failed local validation, not submitted");
        return Err(err.into());
    }

    match editor.mode().clone() {
        EditorMode::Create => {
            let created = api.create_quote(editor.quote()).await.map_err(log_failure)?;
            info!(
                id = %created.id,
                quote_number = created.teklif_no.as_deref().unwrap_or("-"),
                grand_total = %editor.totals().grand_total,
                "Quote created"
            );
            editor.mark_created(created.id.clone(), created.teklif_no.clone());
            Ok(SubmitOutcome::Created {
                id: created.id,
                quote_number: created.teklif_no,
            })
        }
        EditorMode::Edit { id } => {
            api.update_quote(&id, editor.quote())
                .await
                .map_err(log_failure)?;
            info!(
                id = %id,
                quote_number = editor.quote().quote_number.as_deref().unwrap_or("-"),
                grand_total = %editor.totals().grand_total,
                "Quote updated"
            );
            Ok(SubmitOutcome::Updated { id })
        }
    }
}

fn log_failure(err: ClientError) -> ClientError {
    warn!(error = %err, reached_backend = !err.is_local(), "Quote submit failed");
    err
}

// =============================================================================
// Notifications
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
}

/// Message shown to the user after an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Notification {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notification {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    /// Notification for the result of [`submit`].
    pub fn from_submit(result: &ClientResult<SubmitOutcome>) -> Self {
        match result {
            Ok(SubmitOutcome::Created {
                quote_number: Some(number),
                ..
            }) => Notification::success(format!("Quote created: {number}")),
            Ok(SubmitOutcome::Created { .. }) => Notification::success("Quote created"),
            Ok(SubmitOutcome::Updated { .. }) => Notification::success("Quote updated"),
            Err(err) => Notification::from_error(err),
        }
    }

    /// Notification for a failed action.
    pub fn from_error(err: &ClientError) -> Self {
        let message = match err {
            ClientError::Rejected { detail, .. } if !detail.is_empty() => detail.clone(),
            ClientError::Rejected { .. } => "Operation failed".to_string(),
            other if other.is_retryable() => format!("{other}. Please try again."),
            other => other.to_string(),
        };
        Notification::error(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use acerler_core::CoreError;

    #[test]
    fn test_created_notification_names_number() {
        let result = Ok(SubmitOutcome::Created {
            id: "q-1".into(),
            quote_number: Some("TKL-2024-0042".into()),
        });
        let note = Notification::from_submit(&result);
        assert_eq!(note.level, NotificationLevel::Success);
        assert_eq!(note.message, "Quote created: TKL-2024-0042");
    }

    #[test]
    fn test_updated_notification() {
        let note = Notification::from_submit(&Ok(SubmitOutcome::Updated { id: "q-1".into() }));
        assert_eq!(note.message, "Quote updated");
        assert_eq!(note.level, NotificationLevel::Success);
    }

    #[test]
    fn test_error_notifications() {
        let note = Notification::from_error(&ClientError::Rejected {
            status: 400,
            detail: "Müşteri bulunamadı".into(),
        });
        assert_eq!(note.level, NotificationLevel::Error);
        assert_eq!(note.message, "Müşteri bulunamadı");

        let note = Notification::from_error(&ClientError::Rejected {
            status: 500,
            detail: String::new(),
        });
        assert_eq!(note.message, "Operation failed");

        let note = Notification::from_error(&ClientError::Invalid(CoreError::CustomerNotSelected));
        assert_eq!(note.message, "Select a customer before saving the quote");

        let note = Notification::from_error(&ClientError::Timeout(30));
        assert_eq!(note.message, "Request timed out after 30 seconds. Please try again.");
    }

    #[test]
    fn test_notification_serializes_lowercase_level() {
        let value = serde_json::to_value(Notification::error("x")).unwrap();
        assert_eq!(value["level"], "error");
    }
}
