//! Writes the effective configuration to a file.

use std::path::Path;

use acerler_client::{ClientConfig, Notification};
use serde_json::json;

use super::Report;
use crate::error::AppError;

/// Saves `config` (defaults, file and environment merged) to `path` or the
/// platform config location. The token is never written.
pub fn init(config: &ClientConfig, path: Option<&Path>) -> Result<Report, AppError> {
    let written = config.save(path.map(Path::to_path_buf))?;
    let notification = Notification::success(format!("Config written to {}", written.display()));

    Ok(Report {
        text: notification.message.clone(),
        json: json!({
            "notification": notification,
            "path": written,
            "base_url": config.api.base_url,
            "prefix": config.api.prefix,
        }),
    })
}
