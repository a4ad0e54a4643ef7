//! hostconf: host annotation translator.
//!
//! Reads a translation document, applies the host-scoped annotations of every
//! host and prints the resulting configuration.
//!
//! ```text
//!   document (TOML)
//!       → config::loader (parse & validate)
//!       → driver (hosts, mappers, CA store, registry, ACME account)
//!       → convert::HostUpdater, once per host
//!       → JSON report on stdout, diagnostics on stderr
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use hostconf::config::{load_document, HostConfDocument};
use hostconf::driver::translate_document;
use hostconf::observability::{logging, Level};

#[derive(Parser)]
#[command(name = "hostconf")]
#[command(about = "Translate host annotations into proxy host configuration", long_about = None)]
struct Cli {
    /// Override the log level from the document.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate every host of a document and print the result as JSON
    Translate {
        /// Translation document (TOML)
        file: PathBuf,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,

        /// Exit with a failure status when an error diagnostic was emitted
        #[arg(long)]
        fail_on_error: bool,
    },
    /// Load and validate a document without translating it
    Check {
        /// Translation document (TOML)
        file: PathBuf,
    },
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Translate {
            file,
            pretty,
            fail_on_error,
        } => {
            let doc = load(&file, cli.log_level)?;
            tracing::info!(path = ?file, hosts = doc.hosts.len(), "hostconf starting");

            // Diagnostics reach stderr through the tracing subscriber.
            let report = translate_document(&doc);
            let output = if pretty {
                serde_json::to_string_pretty(&report)?
            } else {
                serde_json::to_string(&report)?
            };
            println!("{}", output);

            if fail_on_error && report.has_errors() {
                eprintln!(
                    "Error: {} error(s), {} warning(s)",
                    report.count(Level::Error),
                    report.count(Level::Warn)
                );
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Check { file } => {
            let doc = load(&file, cli.log_level)?;
            println!(
                "{}: ok ({} hosts, {} CA secrets, {} backends)",
                file.display(),
                doc.hosts.len(),
                doc.ca_secrets.len(),
                doc.backends.len()
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Load the document and install logging from its `[observability]` section,
/// `--log-level` taking precedence.
fn load(file: &Path, log_level: Option<String>) -> Result<HostConfDocument, Box<dyn std::error::Error>> {
    let mut doc = load_document(file)?;
    if let Some(level) = log_level {
        doc.observability.log_level = level;
    }
    logging::init_logging(&doc.observability)?;
    tracing::debug!(path = ?file, format = ?doc.observability.log_format, "Logging initialized");
    Ok(doc)
}
