//! # Quote Desk
//!
//! Command-line front end for Acerler sales quotes.
//!
//! ## Commands
//! ```text
//! quote-desk [--config <path>] [--json] <command>
//!
//!   totals    <draft.json>                 Show line and quote totals (offline)
//!   customers [query]                      List customers, filtered by name
//!   customer  add <customer.json>          Add a customer
//!   customer  update <id> <customer.json>  Replace a customer's fields
//!   customer  delete <id>                  Delete a customer
//!   quotes    [--status <s>] [query]       List quotes
//!   overview                               Dashboard counts and totals
//!   show      <id>                         Show one stored quote
//!   submit    <draft.json>                 Validate, then create or update
//!   status    <id> <status>                Change a quote's status
//!   delete    <id>                         Delete a quote
//!   config    init                         Write settings to the config file
//! ```
//!
//! Draft files use the backend's quote JSON (`musteri_adi`, `kalemler`, ...).
//! A draft with an `id` is submitted as an update. Customer files use the
//! backend's customer JSON (`firma_adi`, `telefon`, ...).

pub mod commands;
pub mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use acerler_client::{init_tracing, ClientConfig};
use acerler_core::types::QuoteStatus;
use tracing::debug;

use crate::error::AppError;

pub const USAGE: &str = "\
usage: quote-desk [--config <path>] [--json] <command>

commands:
  totals    <draft.json>             show line and quote totals
  customers [query]                  list customers
  customer  add <customer.json>      add a customer
  customer  update <id> <file.json>  replace a customer's fields
  customer  delete <id>              delete a customer
  quotes    [--status <s>] [query]   list quotes
  overview                           quote counts and totals
  show      <id>                     show one stored quote
  submit    <draft.json>             create or update a quote
  status    <id> <status>            change a quote's status
  delete    <id>                     delete a quote
  config    init                     write settings (no token) to the config file

statuses: taslak, gonderildi, beklemede, kabul_edildi, reddedildi, iptal";

/// Parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Cli {
    pub config_path: Option<PathBuf>,
    pub json: bool,
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Totals { draft: PathBuf },
    Customers { query: String },
    Quotes { status: Option<QuoteStatus>, query: String },
    Show { id: String },
    Submit { draft: PathBuf },
    Status { id: String, status: QuoteStatus },
    Delete { id: String },
    Overview,
    CustomerAdd { file: PathBuf },
    CustomerUpdate { id: String, file: PathBuf },
    CustomerDelete { id: String },
    /// Target is the `--config` path, or the platform default when absent.
    ConfigInit { path: Option<PathBuf> },
    Help,
}

impl Cli {
    /// Parses arguments (without the program name).
    pub fn parse<I>(args: I) -> Result<Cli, AppError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config_path = None;
        let mut json = false;
        let mut rest = Vec::new();

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => {
                    let path = args
                        .next()
                        .ok_or_else(|| AppError::usage("--config needs a path"))?;
                    config_path = Some(PathBuf::from(path));
                }
                "--json" => json = true,
                "--help" | "-h" => rest.insert(0, "help".to_string()),
                _ => rest.push(arg),
            }
        }

        let mut command = Self::parse_command(rest)?;
        if let Command::ConfigInit { path } = &mut command {
            path.clone_from(&config_path);
        }
        Ok(Cli {
            config_path,
            json,
            command,
        })
    }

    fn parse_command(args: Vec<String>) -> Result<Command, AppError> {
        let mut args = args.into_iter();
        let name = match args.next() {
            Some(name) => name,
            None => return Ok(Command::Help),
        };

        let command = match name.as_str() {
            "help" => Command::Help,
            "totals" => Command::Totals {
                draft: PathBuf::from(required(&mut args, "<draft.json>")?),
            },
            "customers" => Command::Customers {
                query: args.collect::<Vec<_>>().join(" "),
            },
            "quotes" => {
                let mut status = None;
                let mut words = Vec::new();
                while let Some(arg) = args.next() {
                    if arg == "--status" || arg == "-s" {
                        let raw = required(&mut args, "<status>")?;
                        status = Some(raw.parse::<QuoteStatus>()?);
                    } else {
                        words.push(arg);
                    }
                }
                Command::Quotes {
                    status,
                    query: words.join(" "),
                }
            }
            "show" => Command::Show {
                id: required(&mut args, "<id>")?,
            },
            "submit" => Command::Submit {
                draft: PathBuf::from(required(&mut args, "<draft.json>")?),
            },
            "status" => {
                let id = required(&mut args, "<id>")?;
                let status = required(&mut args, "<status>")?.parse::<QuoteStatus>()?;
                Command::Status { id, status }
            }
            "delete" => Command::Delete {
                id: required(&mut args, "<id>")?,
            },
            "overview" => Command::Overview,
            "customer" => match required(&mut args, "customer action")?.as_str() {
                "add" => Command::CustomerAdd {
                    file: PathBuf::from(required(&mut args, "<customer.json>")?),
                },
                "update" => {
                    let id = required(&mut args, "<id>")?;
                    let file = PathBuf::from(required(&mut args, "<customer.json>")?);
                    Command::CustomerUpdate { id, file }
                }
                "delete" => Command::CustomerDelete {
                    id: required(&mut args, "<id>")?,
                },
                other => {
                    return Err(AppError::usage(format!(
                        "unknown customer action '{other}' (add, update, delete)"
                    )))
                }
            },
            "config" => match required(&mut args, "config action")?.as_str() {
                "init" => Command::ConfigInit { path: None },
                other => return Err(AppError::usage(format!("unknown config action '{other}'"))),
            },
            other => return Err(AppError::usage(format!("unknown command '{other}'"))),
        };

        Ok(command)
    }
}

fn required(args: &mut impl Iterator<Item = String>, what: &str) -> Result<String, AppError> {
    args.next()
        .ok_or_else(|| AppError::usage(format!("missing {what}")))
}

/// Parses arguments, loads configuration and runs one command.
pub async fn run<I>(args: I) -> ExitCode
where
    I: IntoIterator<Item = String>,
{
    let cli = match Cli::parse(args) {
        Ok(cli) => cli,
        Err(err) => {
            eprintln!("{}\n\n{USAGE}", err.message);
            return ExitCode::from(2);
        }
    };

    if cli.command == Command::Help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let config = match ClientConfig::load(cli.config_path.clone()) {
        Ok(config) => config,
        Err(err) if matches!(cli.command, Command::Totals { .. }) => {
            // Offline totals still run with a broken config file.
            eprintln!("warning: {err}");
            ClientConfig::default()
        }
        Err(err) => return report_error(&cli, AppError::from(err)),
    };

    init_tracing(&config.logging.level);
    debug!(command = ?cli.command, "Running quote-desk command");

    match commands::execute(&cli.command, &config).await {
        Ok(report) => {
            if cli.json {
                println!("{}", report.json);
            } else {
                println!("{}", report.text);
            }
            ExitCode::SUCCESS
        }
        Err(err) => report_error(&cli, err),
    }
}

fn report_error(cli: &Cli, err: AppError) -> ExitCode {
    if cli.json {
        match serde_json::to_string(&err) {
            Ok(body) => eprintln!("{body}"),
            Err(_) => eprintln!("{err}"),
        }
    } else {
        eprintln!("error: {}", err.message);
    }
    ExitCode::FAILURE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn parse(args: &[&str]) -> Result<Cli, AppError> {
        Cli::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_no_args_is_help() {
        assert_eq!(parse(&[]).unwrap().command, Command::Help);
        assert_eq!(parse(&["--help"]).unwrap().command, Command::Help);
    }

    #[test]
    fn test_global_flags_anywhere() {
        let cli = parse(&["show", "q-1", "--json", "--config", "/tmp/q.toml"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.config_path, Some(PathBuf::from("/tmp/q.toml")));
        assert_eq!(cli.command, Command::Show { id: "q-1".into() });
    }

    #[test]
    fn test_quotes_with_status_and_query() {
        let cli = parse(&["quotes", "--status", "kabul_edildi", "acar", "beton"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Quotes {
                status: Some(QuoteStatus::Accepted),
                query: "acar beton".into(),
            }
        );
    }

    #[test]
    fn test_status_command() {
        let cli = parse(&["status", "q-9", "sent"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Status {
                id: "q-9".into(),
                status: QuoteStatus::Sent,
            }
        );
    }

    #[test]
    fn test_usage_errors() {
        assert_eq!(parse(&["submit"]).unwrap_err().code, ErrorCode::Usage);
        assert_eq!(parse(&["frobnicate"]).unwrap_err().code, ErrorCode::Usage);
        assert_eq!(parse(&["--config"]).unwrap_err().code, ErrorCode::Usage);
        assert_eq!(
            parse(&["status", "q-1", "archived"]).unwrap_err().code,
            ErrorCode::ValidationError
        );
    }

    #[test]
    fn test_customer_commands() {
        let cli = parse(&["customer", "update", "c-31", "kapadokya.json"]).unwrap();
        assert_eq!(
            cli.command,
            Command::CustomerUpdate {
                id: "c-31".into(),
                file: PathBuf::from("kapadokya.json"),
            }
        );

        let cli = parse(&["customer", "delete", "c-31"]).unwrap();
        assert_eq!(cli.command, Command::CustomerDelete { id: "c-31".into() });

        assert_eq!(parse(&["customer"]).unwrap_err().code, ErrorCode::Usage);
        assert_eq!(parse(&["customer", "merge"]).unwrap_err().code, ErrorCode::Usage);
        assert_eq!(parse(&["customer", "update", "c-31"]).unwrap_err().code, ErrorCode::Usage);
    }

    #[test]
    fn test_overview_command() {
        let cli = parse(&["overview", "--json"]).unwrap();
        assert_eq!(cli.command, Command::Overview);
        assert!(cli.json);
    }

    #[test]
    fn test_config_init_uses_config_flag() {
        let cli = parse(&["config", "init", "--config", "/tmp/q.toml"]).unwrap();
        assert_eq!(
            cli.command,
            Command::ConfigInit {
                path: Some(PathBuf::from("/tmp/q.toml")),
            }
        );

        let cli = parse(&["config", "init"]).unwrap();
        assert_eq!(cli.command, Command::ConfigInit { path: None });
    }

    #[test]
    fn test_totals_command() {
        let cli = parse(&["totals", "draft.json"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Totals {
                draft: PathBuf::from("draft.json"),
            }
        );
    }
}
