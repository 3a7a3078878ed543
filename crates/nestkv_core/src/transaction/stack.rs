//! Stack of open transaction scopes.

use crate::error::{CoreError, CoreResult};
use crate::transaction::scope::TransactionScope;
use crate::transaction::undo::UndoAction;
use nestkv_storage::Storage;
use tracing::{debug, trace};

/// Open transaction scopes, innermost last.
///
/// The stack is idle (empty) at creation. Its depth is the nesting level:
/// there is no separate state enum.
///
/// ## Nesting
///
/// Only the innermost scope receives undo actions. Popping a scope, by
/// commit or rollback, never touches the scopes beneath it.
#[derive(Debug, Default)]
pub struct TransactionStack {
    scopes: Vec<TransactionScope>,
}

impl TransactionStack {
    /// Creates an idle stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of open scopes.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Returns `true` if at least one scope is open.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.scopes.is_empty()
    }

    /// Returns the innermost scope, if any.
    #[must_use]
    pub fn innermost(&self) -> Option<&TransactionScope> {
        self.scopes.last()
    }

    /// Opens a new innermost scope.
    ///
    /// Returns the new depth.
    pub fn begin(&mut self) -> usize {
        self.scopes.push(TransactionScope::new());
        let depth = self.depth();
        debug!(depth, "transaction begun");
        depth
    }

    /// Appends `action` to the innermost scope.
    ///
    /// Returns `false` without recording anything when no scope is open;
    /// the mutation it would undo is then already permanent.
    pub fn record(&mut self, action: UndoAction) -> bool {
        let depth = self.scopes.len();
        match self.scopes.last_mut() {
            Some(scope) => {
                trace!(key = action.key(), depth, "undo action recorded");
                scope.record(action);
                true
            }
            None => false,
        }
    }

    /// Closes the innermost scope, keeping its writes.
    ///
    /// The scope's undo actions are dropped, not handed to the enclosing
    /// scope. Returns the number of actions dropped.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NoActiveTransaction`] if no scope is open.
    pub fn commit(&mut self) -> CoreResult<usize> {
        let scope = self.scopes.pop().ok_or(CoreError::NoActiveTransaction)?;
        let discarded = scope.len();
        debug!(depth = self.depth(), discarded, "transaction committed");
        Ok(discarded)
    }

    /// Closes the innermost scope, undoing its writes in `storage`.
    ///
    /// Returns the number of undo actions replayed.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NoActiveTransaction`] if no scope is open.
    pub fn rollback<S: Storage + ?Sized>(&mut self, storage: &mut S) -> CoreResult<usize> {
        let scope = self.scopes.pop().ok_or(CoreError::NoActiveTransaction)?;
        let replayed = scope.rollback(storage);
        debug!(depth = self.depth(), replayed, "transaction rolled back");
        Ok(replayed)
    }
}
