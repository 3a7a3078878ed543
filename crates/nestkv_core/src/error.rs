//! Error types for nestkv core.
//!
//! Display strings are the exact lines the command interface prints, so a
//! read loop can report an error with `println!("{err}")`.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in nestkv core operations.
///
/// None of these are fatal. State is never mutated on the error path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// COMMIT or ROLLBACK with no open transaction.
    #[error("NO TRANSACTION")]
    NoActiveTransaction,

    /// A command received fewer arguments than it needs.
    #[error("NOT ENOUGH ARGUMENTS")]
    NotEnoughArguments {
        /// The command name as dispatched.
        command: String,
        /// Number of arguments the command needs.
        required: usize,
        /// Number of arguments supplied.
        given: usize,
    },

    /// The command name is not recognized.
    #[error("UNKNOWN COMMAND")]
    UnknownCommand {
        /// The unrecognized name.
        name: String,
    },
}

impl CoreError {
    /// Creates a not enough arguments error.
    pub fn not_enough_arguments(command: impl Into<String>, required: usize, given: usize) -> Self {
        Self::NotEnoughArguments {
            command: command.into(),
            required,
            given,
        }
    }

    /// Creates an unknown command error.
    pub fn unknown_command(name: impl Into<String>) -> Self {
        Self::UnknownCommand { name: name.into() }
    }
}
