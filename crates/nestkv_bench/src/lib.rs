//! Benchmark utilities.

#![warn(missing_docs)]

use nestkv_core::Store;
use nestkv_storage::InMemoryStorage;
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Generate a random alphanumeric string of the given length.
pub fn random_string(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Generate `count` random key/value pairs whose values come from a pool
/// of `distinct_values` strings.
pub fn generate_entries(count: usize, distinct_values: usize) -> Vec<(String, String)> {
    let pool: Vec<String> = (0..distinct_values.max(1)).map(|_| random_string(8)).collect();
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|i| {
            let value = pool[rng.gen_range(0..pool.len())].clone();
            (format!("key{i}"), value)
        })
        .collect()
}

/// Build a store pre-populated with `entries`.
pub fn populated_store(entries: &[(String, String)]) -> Store {
    Store::with_storage(InMemoryStorage::with_entries(entries.iter().cloned()))
}
