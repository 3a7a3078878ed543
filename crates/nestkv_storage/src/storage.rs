//! Storage trait definition.

/// A flat string key/value map.
///
/// Implementations hold the current, already-applied state of the store.
/// They know nothing about transactions: every call takes effect
/// immediately, and reversing it is the caller's job.
///
/// # Invariants
///
/// - Keys are unique
/// - `put` and `remove` return exactly the value the key held before the
///   call (`None` if it was absent)
/// - `remove` on an absent key changes nothing
/// - `count_equal_to` uses exact, case-sensitive string equality
///
/// # Implementors
///
/// - [`super::InMemoryStorage`] - hash map backed
pub trait Storage: Send {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<&str>;

    /// Stores `value` under `key`.
    ///
    /// Returns the value previously stored under `key`, or `None` if the
    /// key was absent.
    fn put(&mut self, key: String, value: String) -> Option<String>;

    /// Removes `key`.
    ///
    /// Returns the removed value, or `None` if the key was absent (in which
    /// case nothing changes).
    fn remove(&mut self, key: &str) -> Option<String>;

    /// Returns the number of entries whose value equals `value` exactly.
    ///
    /// This is a full scan; no index is maintained.
    fn count_equal_to(&self, value: &str) -> usize;

    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the storage holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
