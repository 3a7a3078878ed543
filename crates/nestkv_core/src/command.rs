//! Command parsing and execution.
//!
//! A [`Command`] is a short-lived value: it is parsed from a name and its
//! arguments, executed once against a [`Store`], and dropped. Mutating
//! commands leave their undo record in the store's transaction stack, not
//! in the command.

use crate::error::{CoreError, CoreResult};
use crate::store::Store;
use nestkv_storage::Storage;

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `SET key value`
    Set {
        /// Key to write.
        key: String,
        /// Value to store.
        value: String,
    },
    /// `GET key`
    Get {
        /// Key to read.
        key: String,
    },
    /// `UNSET key`
    Unset {
        /// Key to remove.
        key: String,
    },
    /// `NUMEQUALTO value`
    NumEqualTo {
        /// Value to count.
        value: String,
    },
    /// `BEGIN`
    Begin,
    /// `COMMIT`
    Commit,
    /// `ROLLBACK`
    Rollback,
}

impl Command {
    /// Parses `name` and `args` into a command.
    ///
    /// `name` must be one of the upper-case command names. Arguments beyond
    /// those a command needs are ignored.
    ///
    /// # Errors
    ///
    /// - [`CoreError::UnknownCommand`] if `name` is not recognized
    /// - [`CoreError::NotEnoughArguments`] if `args` is too short
    pub fn parse<A: AsRef<str>>(name: &str, args: &[A]) -> CoreResult<Self> {
        let arg = |index: usize| args[index].as_ref().to_string();

        let command = match name {
            "SET" => {
                require(name, args, 2)?;
                Self::Set {
                    key: arg(0),
                    value: arg(1),
                }
            }
            "GET" => {
                require(name, args, 1)?;
                Self::Get { key: arg(0) }
            }
            "UNSET" => {
                require(name, args, 1)?;
                Self::Unset { key: arg(0) }
            }
            "NUMEQUALTO" => {
                require(name, args, 1)?;
                Self::NumEqualTo { value: arg(0) }
            }
            "BEGIN" => Self::Begin,
            "COMMIT" => Self::Commit,
            "ROLLBACK" => Self::Rollback,
            _ => return Err(CoreError::unknown_command(name)),
        };
        Ok(command)
    }

    /// Returns the command's name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Set { .. } => "SET",
            Self::Get { .. } => "GET",
            Self::Unset { .. } => "UNSET",
            Self::NumEqualTo { .. } => "NUMEQUALTO",
            Self::Begin => "BEGIN",
            Self::Commit => "COMMIT",
            Self::Rollback => "ROLLBACK",
        }
    }

    /// Returns `true` for commands that write to storage.
    #[must_use]
    pub fn is_mutation(&self) -> bool {
        matches!(self, Self::Set { .. } | Self::Unset { .. })
    }

    /// Executes the command against `store`.
    ///
    /// Returns the output line for GET and NUMEQUALTO.
    ///
    /// # Errors
    ///
    /// COMMIT and ROLLBACK return [`CoreError::NoActiveTransaction`] when no
    /// transaction is open.
    pub fn execute<S: Storage>(self, store: &mut Store<S>) -> CoreResult<Option<String>> {
        match self {
            Self::Set { key, value } => store.execute_set(key, value),
            Self::Get { key } => return Ok(Some(store.execute_get(&key))),
            Self::Unset { key } => store.execute_unset(&key),
            Self::NumEqualTo { value } => return Ok(Some(store.execute_num_equal_to(&value))),
            Self::Begin => {
                store.begin();
            }
            Self::Commit => store.commit()?,
            Self::Rollback => store.rollback()?,
        }
        Ok(None)
    }
}

fn require<A>(name: &str, args: &[A], required: usize) -> CoreResult<()> {
    if args.len() < required {
        return Err(CoreError::not_enough_arguments(name, required, args.len()));
    }
    Ok(())
}
