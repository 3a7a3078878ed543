//! The store: storage plus its transaction stack.

use crate::command::Command;
use crate::error::CoreResult;
use crate::stats::StoreStats;
use crate::transaction::{TransactionStack, UndoAction};
use nestkv_storage::{InMemoryStorage, Storage};
use tracing::trace;

/// Marker returned by GET for an absent key.
pub const NULL_MARKER: &str = "NULL";

/// A key/value store with nested transactions.
///
/// `Store` owns both the storage and the transaction stack, so every
/// mutation and its undo record happen under the same `&mut self`.
///
/// # Example
///
/// ```rust
/// use nestkv_core::Store;
///
/// let mut store = Store::new();
/// store.execute_set("a", "10");
///
/// store.begin();
/// store.execute_set("a", "20");
/// assert_eq!(store.execute_get("a"), "20");
/// store.rollback().unwrap();
///
/// assert_eq!(store.execute_get("a"), "10");
/// ```
#[derive(Debug)]
pub struct Store<S: Storage = InMemoryStorage> {
    storage: S,
    transactions: TransactionStack,
    stats: StoreStats,
}

impl Store {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::with_storage(InMemoryStorage::new())
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Storage> Store<S> {
    /// Creates a store over an existing storage.
    ///
    /// Whatever `storage` already holds is permanent: no transaction is open.
    pub fn with_storage(storage: S) -> Self {
        Self {
            storage,
            transactions: TransactionStack::new(),
            stats: StoreStats::new(),
        }
    }

    /// Returns the underlying storage.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consumes the store, returning its storage.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Returns the transaction stack.
    #[must_use]
    pub fn transactions(&self) -> &TransactionStack {
        &self.transactions
    }

    /// Returns the current transaction nesting depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.transactions.depth()
    }

    /// Returns the statistics gathered so far.
    #[must_use]
    pub fn stats(&self) -> StoreStats {
        self.stats
    }

    /// Reads a key without counting it as a GET.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.storage.get(key)
    }

    /// SET: stores `value` under `key`.
    pub fn execute_set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let prior = self.storage.put(key.clone(), value.into());
        self.stats.sets += 1;
        self.record(UndoAction::restore(key, prior));
    }

    /// GET: returns the value of `key`, or `"NULL"` if it is absent.
    pub fn execute_get(&mut self, key: &str) -> String {
        self.stats.gets += 1;
        self.storage.get(key).unwrap_or(NULL_MARKER).to_string()
    }

    /// UNSET: removes `key`.
    ///
    /// An absent key is left alone and nothing is recorded.
    pub fn execute_unset(&mut self, key: &str) {
        self.stats.unsets += 1;
        if let Some(prior) = self.storage.remove(key) {
            self.record(UndoAction::RestorePut {
                key: key.to_string(),
                value: prior,
            });
        } else {
            trace!(key, "unset of absent key");
        }
    }

    /// NUMEQUALTO: returns the number of keys holding `value`, in decimal.
    pub fn execute_num_equal_to(&mut self, value: &str) -> String {
        self.stats.count_queries += 1;
        self.storage.count_equal_to(value).to_string()
    }

    /// BEGIN: opens a nested transaction. Returns the new depth.
    pub fn begin(&mut self) -> usize {
        let depth = self.transactions.begin();
        self.stats.record_begin(depth);
        depth
    }

    /// COMMIT: closes the innermost transaction, keeping its writes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CoreError::NoActiveTransaction`] if none is open.
    pub fn commit(&mut self) -> CoreResult<()> {
        self.transactions.commit()?;
        self.stats.commits += 1;
        Ok(())
    }

    /// ROLLBACK: closes the innermost transaction, undoing its writes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CoreError::NoActiveTransaction`] if none is open.
    pub fn rollback(&mut self) -> CoreResult<()> {
        let replayed = self.transactions.rollback(&mut self.storage)?;
        self.stats.record_rollback(replayed);
        Ok(())
    }

    /// Parses and executes one command.
    ///
    /// `name` is matched exactly. Returns the output line for GET and
    /// NUMEQUALTO, `None` for the rest.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCommand` or `NotEnoughArguments` without touching
    /// the store, or `NoActiveTransaction` from COMMIT/ROLLBACK.
    pub fn dispatch<A: AsRef<str>>(
        &mut self,
        name: &str,
        args: &[A],
    ) -> CoreResult<Option<String>> {
        Command::parse(name, args)?.execute(self)
    }

    fn record(&mut self, action: UndoAction) {
        if self.transactions.record(action) {
            self.stats.undo_actions_recorded += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn set_then_get() {
        let mut store = Store::new();
        store.execute_set("a", "10");
        assert_eq!(store.execute_get("a"), "10");
    }

    #[test]
    fn get_missing_is_null() {
        let mut store = Store::new();
        assert_eq!(store.execute_get("missing"), "NULL");
    }

    #[test]
    fn unset_removes_key() {
        let mut store = Store::new();
        store.execute_set("a", "10");
        store.execute_unset("a");
        assert_eq!(store.execute_get("a"), "NULL");
    }

    #[test]
    fn unset_absent_key_records_nothing() {
        let mut store = Store::new();
        store.begin();
        store.execute_unset("ghost");

        assert!(store.transactions().innermost().unwrap().is_empty());
        assert!(store.storage().is_empty());
        assert_eq!(store.stats().undo_actions_recorded, 0);
    }

    #[test]
    fn set_records_restore_remove_for_new_key() {
        let mut store = Store::new();
        store.begin();
        store.execute_set("a", "1");

        assert_eq!(
            store.transactions().innermost().unwrap().actions(),
            &[UndoAction::RestoreRemove { key: "a".into() }]
        );
    }

    #[test]
    fn set_records_restore_put_for_existing_key() {
        let mut store = Store::with_storage(InMemoryStorage::with_entries([("a", "1")]));
        store.begin();
        store.execute_set("a", "2");

        assert_eq!(
            store.transactions().innermost().unwrap().actions(),
            &[UndoAction::RestorePut {
                key: "a".into(),
                value: "1".into()
            }]
        );
    }

    #[test]
    fn mutations_outside_transaction_are_unrecorded() {
        let mut store = Store::new();
        store.execute_set("a", "1");
        store.execute_unset("a");
        assert_eq!(store.stats().undo_actions_recorded, 0);
    }

    #[test]
    fn num_equal_to_counts_exact_matches() {
        let mut store = Store::new();
        store.execute_set("a", "10");
        store.execute_set("b", "10");
        store.execute_set("c", "100");

        assert_eq!(store.execute_num_equal_to("10"), "2");
        assert_eq!(store.execute_num_equal_to("1"), "0");
    }

    #[test]
    fn rollback_restores_prior_value() {
        let mut store = Store::new();
        store.execute_set("a", "10");

        store.begin();
        store.execute_set("a", "20");
        store.execute_unset("a");
        store.execute_set("b", "30");
        store.rollback().unwrap();

        assert_eq!(store.execute_get("a"), "10");
        assert_eq!(store.execute_get("b"), "NULL");
        assert_eq!(store.depth(), 0);
    }

    #[test]
    fn nested_rollback() {
        let mut store = Store::new();
        store.begin();
        store.execute_set("k", "a");
        store.begin();
        store.execute_set("k", "b");

        store.rollback().unwrap();
        assert_eq!(store.execute_get("k"), "a");

        store.rollback().unwrap();
        assert_eq!(store.execute_get("k"), "NULL");
    }

    #[test]
    fn commit_keeps_writes() {
        let mut store = Store::new();
        store.begin();
        store.execute_set("a", "1");
        store.commit().unwrap();

        assert_eq!(store.execute_get("a"), "1");
        assert_eq!(store.rollback(), Err(CoreError::NoActiveTransaction));
    }

    #[test]
    fn outer_rollback_after_inner_commit_keeps_inner_writes() {
        let mut store = Store::new();
        store.begin();
        store.execute_set("a", "30");
        store.begin();
        store.execute_set("a", "40");
        store.commit().unwrap();
        assert_eq!(store.execute_get("a"), "40");

        store.rollback().unwrap();

        // Only the outer scope's own undo action runs: a was absent before it.
        assert_eq!(store.execute_get("a"), "NULL");

        let mut store = Store::new();
        store.begin();
        store.execute_set("outer", "1");
        store.begin();
        store.execute_set("inner", "2");
        store.commit().unwrap();
        store.rollback().unwrap();

        assert_eq!(store.execute_get("outer"), "NULL");
        assert_eq!(store.execute_get("inner"), "2");
    }

    #[test]
    fn empty_stack_errors_leave_state_alone() {
        let mut store = Store::new();
        store.execute_set("a", "1");

        assert_eq!(store.commit(), Err(CoreError::NoActiveTransaction));
        assert_eq!(store.rollback(), Err(CoreError::NoActiveTransaction));
        assert_eq!(store.depth(), 0);
        assert_eq!(store.execute_get("a"), "1");
        assert_eq!(store.stats().closed_transactions(), 0);
    }

    #[test]
    fn stats_follow_commands() {
        let mut store = Store::new();
        store.begin();
        store.begin();
        store.execute_set("a", "1");
        store.execute_unset("a");
        store.execute_get("a");
        store.execute_num_equal_to("1");
        store.rollback().unwrap();
        store.commit().unwrap();

        let stats = store.stats();
        assert_eq!(stats.sets, 1);
        assert_eq!(stats.unsets, 1);
        assert_eq!(stats.gets, 1);
        assert_eq!(stats.count_queries, 1);
        assert_eq!(stats.begins, 2);
        assert_eq!(stats.max_depth, 2);
        assert_eq!(stats.undo_actions_recorded, 2);
        assert_eq!(stats.undo_actions_replayed, 2);
        assert_eq!(stats.commits, 1);
        assert_eq!(stats.rollbacks, 1);
    }

    #[test]
    fn scenario_from_command_sequence() {
        let mut store = Store::new();
        store.execute_set("a", "10");
        store.execute_set("b", "10");
        assert_eq!(store.execute_num_equal_to("10"), "2");

        store.execute_unset("a");
        assert_eq!(store.execute_num_equal_to("10"), "1");

        store.begin();
        store.execute_set("a", "20");
        store.rollback().unwrap();
        assert_eq!(store.execute_get("a"), "NULL");
    }
}
