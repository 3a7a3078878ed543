//! A single transaction scope.

use crate::transaction::undo::UndoAction;
use nestkv_storage::Storage;

/// The undo log of one BEGIN ... COMMIT/ROLLBACK span.
///
/// Actions are append-only while the scope is open. A scope is consumed
/// either by [`rollback`](Self::rollback), which replays it, or by being
/// dropped on commit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionScope {
    actions: Vec<UndoAction>,
}

impl TransactionScope {
    /// Creates an empty scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an undo action.
    pub fn record(&mut self, action: UndoAction) {
        self.actions.push(action);
    }

    /// Returns the recorded actions, oldest first.
    #[must_use]
    pub fn actions(&self) -> &[UndoAction] {
        &self.actions
    }

    /// Returns the number of recorded actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Replays every action newest first against `storage`.
    ///
    /// Returns the number of actions replayed.
    pub fn rollback<S: Storage + ?Sized>(self, storage: &mut S) -> usize {
        let replayed = self.actions.len();
        for action in self.actions.into_iter().rev() {
            action.apply(storage);
        }
        replayed
    }
}
