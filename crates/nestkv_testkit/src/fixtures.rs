//! Store fixtures and helpers.
//!
//! Provides convenience functions for building stores, capturing their
//! contents, and replaying operation sequences.

use crate::generators::Op;
use nestkv_core::{CoreResult, Store};
use nestkv_storage::InMemoryStorage;
use std::collections::BTreeMap;

/// Ordered copy of a store's contents, for equality checks.
pub type Snapshot = BTreeMap<String, String>;

/// Creates a store whose storage already holds `entries`.
///
/// The entries are permanent: no transaction is open.
pub fn store_with<I, K, V>(entries: I) -> Store
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    Store::with_storage(InMemoryStorage::with_entries(entries))
}

/// Captures the current contents of `store`.
pub fn snapshot(store: &Store) -> Snapshot {
    store
        .storage()
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Applies one operation to `store`.
///
/// # Errors
///
/// Returns the error of a COMMIT or ROLLBACK with no open transaction.
pub fn apply_op(store: &mut Store, op: &Op) -> CoreResult<()> {
    match op {
        Op::Set(key, value) => store.execute_set(key.as_str(), value.as_str()),
        Op::Unset(key) => store.execute_unset(key),
        Op::Begin => {
            store.begin();
        }
        Op::Commit => store.commit()?,
        Op::Rollback => store.rollback()?,
    }
    Ok(())
}

/// Applies every operation in order, ignoring transaction errors.
pub fn apply_ops(store: &mut Store, ops: &[Op]) {
    for op in ops {
        let _ = apply_op(store, op);
    }
}

/// Counts the entries of `snapshot` equal to `value`.
pub fn count_in(snapshot: &Snapshot, value: &str) -> usize {
    snapshot.values().filter(|v| v.as_str() == value).count()
}
