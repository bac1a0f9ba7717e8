//! # Commands Module
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (dispatch, Report)
//! ├── draft.rs    ◄─── Draft files: totals, submit
//! ├── quotes.rs   ◄─── Backend listings, overview, quote lifecycle
//! ├── customer.rs ◄─── Customer add / update / delete
//! ├── setup.rs    ◄─── config init
//! └── render.rs   ◄─── Plain-text tables
//! ```

mod customer;
mod draft;
mod quotes;
mod render;
mod setup;

pub use draft::{editor_from_json, load_draft};

use acerler_client::{ClientConfig, HttpQuoteApi};
use serde_json::Value;

use crate::error::AppError;
use crate::Command;

/// What a command prints: text for people, JSON for scripts.
#[derive(Debug, Clone)]
pub struct Report {
    pub text: String,
    pub json: Value,
}

/// Runs one command against the configured backend.
pub async fn execute(command: &Command, config: &ClientConfig) -> Result<Report, AppError> {
    match command {
        Command::Help => Ok(Report {
            text: crate::USAGE.to_string(),
            json: Value::Null,
        }),
        Command::Totals { draft } => draft::totals(draft),
        Command::Submit { draft } => {
            let api = HttpQuoteApi::new(config)?;
            draft::submit_draft(draft, &api).await
        }
        Command::Customers { query } => {
            let api = HttpQuoteApi::new(config)?;
            quotes::customers(&api, query).await
        }
        Command::Quotes { status, query } => {
            let api = HttpQuoteApi::new(config)?;
            quotes::list(&api, *status, query).await
        }
        Command::Show { id } => {
            let api = HttpQuoteApi::new(config)?;
            quotes::show(&api, id).await
        }
        Command::Status { id, status } => {
            let api = HttpQuoteApi::new(config)?;
            quotes::change_status(&api, id, *status).await
        }
        Command::Delete { id } => {
            let api = HttpQuoteApi::new(config)?;
            quotes::delete(&api, id).await
        }
        Command::Overview => {
            let api = HttpQuoteApi::new(config)?;
            quotes::overview(&api).await
        }
        Command::CustomerAdd { file } => {
            let api = HttpQuoteApi::new(config)?;
            customer::add(&api, file).await
        }
        Command::CustomerUpdate { id, file } => {
            let api = HttpQuoteApi::new(config)?;
            customer::update(&api, id, file).await
        }
        Command::CustomerDelete { id } => {
            let api = HttpQuoteApi::new(config)?;
            customer::delete(&api, id).await
        }
        Command::ConfigInit { path } => setup::init(config, path.as_deref()),
    }
}
