//! Line-oriented command interpreter.
//!
//! A [`Session`] turns one line of text into a command against its
//! [`Store`]. It owns the tokenizing rules and the end-of-session command;
//! reading lines and printing replies are left to the caller.

use crate::config::Config;
use crate::error::CoreResult;
use crate::store::Store;
use nestkv_storage::{InMemoryStorage, Storage};
use std::borrow::Cow;

/// Outcome of a successfully interpreted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The command produced no output.
    Silent,
    /// The command produced one line of output.
    Output(String),
    /// The line was the end command; the caller should stop.
    End,
}

/// An interactive session over a store.
///
/// # Example
///
/// ```rust
/// use nestkv_core::{Reply, Session};
///
/// let mut session = Session::new();
/// assert_eq!(session.execute_line("set a 10").unwrap(), Reply::Silent);
/// assert_eq!(session.execute_line("GET a").unwrap(), Reply::Output("10".into()));
/// assert_eq!(session.execute_line("END").unwrap(), Reply::End);
/// ```
#[derive(Debug)]
pub struct Session<S: Storage = InMemoryStorage> {
    store: Store<S>,
    config: Config,
}

impl Session {
    /// Creates a session over an empty store with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates a session over an empty store.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self::with_store(Store::new(), config)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Storage> Session<S> {
    /// Creates a session over an existing store.
    pub fn with_store(store: Store<S>, config: Config) -> Self {
        Self { store, config }
    }

    /// Returns the store.
    #[must_use]
    pub fn store(&self) -> &Store<S> {
        &self.store
    }

    /// Returns the store mutably.
    pub fn store_mut(&mut self) -> &mut Store<S> {
        &mut self.store
    }

    /// Consumes the session, returning its store.
    pub fn into_store(self) -> Store<S> {
        self.store
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Interprets one line.
    ///
    /// The line is split on whitespace. The first token names the command
    /// and the rest are its arguments. A blank line is an unknown command.
    ///
    /// # Errors
    ///
    /// Returns the [`crate::CoreError`] of the dispatched command. The
    /// session stays usable afterwards.
    pub fn execute_line(&mut self, line: &str) -> CoreResult<Reply> {
        let mut tokens = line.split_whitespace();
        let name = self.normalize(tokens.next().unwrap_or_default());

        if self.is_end_command(&name) {
            return Ok(Reply::End);
        }

        let args: Vec<&str> = tokens.collect();
        let reply = match self.store.dispatch(&name, args.as_slice())? {
            Some(output) => Reply::Output(output),
            None => Reply::Silent,
        };
        Ok(reply)
    }

    fn normalize<'a>(&self, name: &'a str) -> Cow<'a, str> {
        if self.config.case_insensitive_commands {
            Cow::Owned(name.to_uppercase())
        } else {
            Cow::Borrowed(name)
        }
    }

    fn is_end_command(&self, name: &str) -> bool {
        match self.config.end_command.as_deref() {
            Some(end) if self.config.case_insensitive_commands => end.eq_ignore_ascii_case(name),
            Some(end) => end == name,
            None => false,
        }
    }
}
