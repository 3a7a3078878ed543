//! nestkv CLI
//!
//! Interactive front end for the nestkv store.
//!
//! Reads one command per line from stdin (or `--script`) and prints the
//! output of GET and NUMEQUALTO, plus any command errors, to stdout.
//!
//! # Commands
//!
//! - `SET key value` / `GET key` / `UNSET key` / `NUMEQUALTO value`
//! - `BEGIN` / `COMMIT` / `ROLLBACK`
//! - `END` - stop reading

mod error;
mod repl;
mod report;

use clap::Parser;
use nestkv_core::{Config, Session, DEFAULT_END_COMMAND};
use report::{StatsFormat, StatsReport};
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// In-memory key/value store with nested transactions.
#[derive(Parser)]
#[command(name = "nestkv")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Read commands from this file instead of stdin
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Match command names exactly instead of upper-casing them
    #[arg(long)]
    case_sensitive: bool,

    /// Command that ends the session
    #[arg(long, default_value = DEFAULT_END_COMMAND)]
    end_command: String,

    /// Print statistics to stderr when the session ends
    #[arg(long)]
    stats: bool,

    /// Statistics format
    #[arg(long, value_enum, default_value_t = StatsFormat::Text)]
    stats_format: StatsFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logging goes to stderr so stdout carries only command output
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = Config::new()
        .case_insensitive_commands(!cli.case_sensitive)
        .end_command(cli.end_command);
    let mut session = Session::with_config(config);

    let input = repl::open_input(cli.script.as_deref())?;
    let summary = repl::run(&mut session, input, io::stdout().lock())?;
    info!(
        lines = summary.lines,
        errors = summary.errors,
        ended_by_command = summary.ended_by_command,
        "session finished"
    );

    if cli.stats {
        StatsReport::new(&summary, session.store())
            .write(io::stderr().lock(), cli.stats_format)?;
    }

    Ok(())
}
