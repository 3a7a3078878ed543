//! CLI error types.

use std::io;
use thiserror::Error;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors that stop the CLI.
///
/// Command errors are not in here: those are printed and the loop goes on.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The script file could not be opened.
    #[error("cannot open script {path}: {source}")]
    Script {
        /// Path that was given.
        path: String,
        /// Underlying error.
        source: io::Error,
    },

    /// Serializing the statistics report failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
