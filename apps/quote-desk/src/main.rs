//! # Quote Desk Entry Point
//!
//! ## Startup Sequence
//! 1. Parse the command line
//! 2. Load configuration (defaults → quote-desk.toml → environment)
//! 3. Initialize tracing at the configured level
//! 4. Run the command and print its result
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    quote_desk_lib::run(std::env::args().skip(1)).await
}
