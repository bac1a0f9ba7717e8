//! # acerler-client: Quote Backend Client
//!
//! The I/O half of the quote module. [`acerler_core`] owns the numbers and the
//! rules; this crate loads configuration, speaks the backend's JSON, and runs
//! the submit workflow.
//!
//! ## Modules
//!
//! - [`config`] - Layered configuration (defaults, TOML, environment)
//! - [`api`] - [`QuoteApi`] trait and its HTTP implementation
//! - [`wire`] - JSON shapes with the backend's field names
//! - [`submit`] - Validate, create or update, notify
//! - [`telemetry`] - Tracing subscriber setup
//! - [`error`] - Client error types
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use acerler_client::{submit, ClientConfig, HttpQuoteApi, Notification};
//! use acerler_core::QuoteEditor;
//!
//! # async fn run() -> acerler_client::ClientResult<()> {
//! let config = ClientConfig::load(None)?;
//! let api = HttpQuoteApi::new(&config)?;
//!
//! let mut editor = QuoteEditor::new();
//! // ... select a customer, fill in lines ...
//! let result = submit(&mut editor, &api).await;
//! println!("{}", Notification::from_submit(&result).message);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod submit;
pub mod telemetry;
pub mod wire;

pub use api::{HttpQuoteApi, QuoteApi};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use submit::{submit, Notification, NotificationLevel, SubmitOutcome};
pub use telemetry::init_tracing;
