//! Thread-safe store handle.

use crate::error::CoreResult;
use crate::stats::StoreStats;
use crate::store::Store;
use nestkv_storage::{InMemoryStorage, Storage};
use parking_lot::Mutex;
use std::sync::Arc;

/// A cloneable handle to a store shared between threads.
///
/// Storage and the transaction stack sit behind one lock. Every command
/// holds it for its whole duration, so no thread can observe a mutation
/// whose undo record is not yet in place.
///
/// The transaction stack is shared too: a BEGIN on one handle opens a
/// scope that every handle writes into.
#[derive(Debug)]
pub struct SharedStore<S: Storage = InMemoryStorage> {
    inner: Arc<Mutex<Store<S>>>,
}

impl<S: Storage> Clone for SharedStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl SharedStore {
    /// Creates a handle to a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::from_store(Store::new())
    }
}

impl Default for SharedStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Storage> SharedStore<S> {
    /// Wraps an existing store.
    pub fn from_store(store: Store<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Runs `f` with exclusive access to the store.
    ///
    /// Commands issued inside `f` form one atomic group as seen by other
    /// handles.
    pub fn with<R>(&self, f: impl FnOnce(&mut Store<S>) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// See [`Store::execute_set`].
    pub fn execute_set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.lock().execute_set(key, value);
    }

    /// See [`Store::execute_get`].
    pub fn execute_get(&self, key: &str) -> String {
        self.inner.lock().execute_get(key)
    }

    /// See [`Store::execute_unset`].
    pub fn execute_unset(&self, key: &str) {
        self.inner.lock().execute_unset(key);
    }

    /// See [`Store::execute_num_equal_to`].
    pub fn execute_num_equal_to(&self, value: &str) -> String {
        self.inner.lock().execute_num_equal_to(value)
    }

    /// See [`Store::begin`].
    pub fn begin(&self) -> usize {
        self.inner.lock().begin()
    }

    /// See [`Store::commit`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::CoreError::NoActiveTransaction`] if none is open.
    pub fn commit(&self) -> CoreResult<()> {
        self.inner.lock().commit()
    }

    /// See [`Store::rollback`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::CoreError::NoActiveTransaction`] if none is open.
    pub fn rollback(&self) -> CoreResult<()> {
        self.inner.lock().rollback()
    }

    /// See [`Store::dispatch`].
    ///
    /// # Errors
    ///
    /// Same as [`Store::dispatch`].
    pub fn dispatch<A: AsRef<str>>(
        &self,
        name: &str,
        args: &[A],
    ) -> CoreResult<Option<String>> {
        self.inner.lock().dispatch(name, args)
    }

    /// Returns the current statistics.
    #[must_use]
    pub fn stats(&self) -> StoreStats {
        self.inner.lock().stats()
    }
}
