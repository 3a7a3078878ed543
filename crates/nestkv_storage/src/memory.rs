//! In-memory storage.

use crate::storage::Storage;
use std::collections::HashMap;

/// A hash map backed storage.
///
/// Entries live for as long as the value does; nothing is ever written
/// anywhere else.
///
/// # Example
///
/// ```rust
/// use nestkv_storage::{InMemoryStorage, Storage};
///
/// let mut storage = InMemoryStorage::new();
/// storage.put("k".into(), "v".into());
/// assert_eq!(storage.remove("k"), Some("v".to_string()));
/// assert_eq!(storage.remove("k"), None);
/// assert!(storage.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryStorage {
    entries: HashMap<String, String>,
}

impl InMemoryStorage {
    /// Creates a new empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage pre-populated with `entries`.
    ///
    /// Later duplicates of a key overwrite earlier ones.
    #[must_use]
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Iterates over all entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Storage for InMemoryStorage {
    fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn put(&mut self, key: String, value: String) -> Option<String> {
        self.entries.insert(key, value)
    }

    fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    fn count_equal_to(&self, value: &str) -> usize {
        self.entries.values().filter(|v| v.as_str() == value).count()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn memory_new_is_empty() {
        let storage = InMemoryStorage::new();
        assert!(storage.is_empty());
        assert_eq!(storage.len(), 0);
        assert_eq!(storage.get("missing"), None);
    }

    #[test]
    fn put_returns_prior_value() {
        let mut storage = InMemoryStorage::new();

        assert_eq!(storage.put("a".into(), "1".into()), None);
        assert_eq!(storage.put("a".into(), "2".into()), Some("1".to_string()));
        assert_eq!(storage.get("a"), Some("2"));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn remove_returns_prior_value() {
        let mut storage = InMemoryStorage::with_entries([("a", "1")]);

        assert_eq!(storage.remove("a"), Some("1".to_string()));
        assert_eq!(storage.get("a"), None);
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut storage = InMemoryStorage::with_entries([("a", "1")]);
        let before = storage.clone();

        assert_eq!(storage.remove("b"), None);
        assert_eq!(storage, before);
    }

    #[test]
    fn count_equal_to_matches_exactly() {
        let storage =
            InMemoryStorage::with_entries([("a", "10"), ("b", "10"), ("c", "x"), ("d", "X")]);

        assert_eq!(storage.count_equal_to("10"), 2);
        assert_eq!(storage.count_equal_to("x"), 1);
        assert_eq!(storage.count_equal_to("X"), 1);
        assert_eq!(storage.count_equal_to("1"), 0);
    }

    #[test]
    fn count_on_empty_storage_is_zero() {
        assert_eq!(InMemoryStorage::new().count_equal_to(""), 0);
    }

    #[test]
    fn with_entries_last_duplicate_wins() {
        let storage = InMemoryStorage::with_entries([("a", "1"), ("a", "2")]);
        assert_eq!(storage.len(), 1);
        assert_eq!(storage.get("a"), Some("2"));
    }

    #[test]
    fn clear_removes_everything() {
        let mut storage = InMemoryStorage::with_entries([("a", "1"), ("b", "2")]);
        storage.clear();
        assert!(storage.is_empty());
    }

    #[test]
    fn iter_yields_all_entries() {
        let storage = InMemoryStorage::with_entries([("a", "1"), ("b", "2")]);
        let mut entries: Vec<_> = storage.iter().collect();
        entries.sort_unstable();
        assert_eq!(entries, vec![("a", "1"), ("b", "2")]);
    }

    proptest! {
        #[test]
        fn count_agrees_with_iteration(
            entries in prop::collection::hash_map("[a-e]{1,3}", "[xyz]{0,2}", 0..32),
            needle in "[xyz]{0,2}",
        ) {
            let storage = InMemoryStorage::with_entries(entries.clone());
            let expected = entries.values().filter(|v| **v == needle).count();
            prop_assert_eq!(storage.count_equal_to(&needle), expected);
        }
    }
}
