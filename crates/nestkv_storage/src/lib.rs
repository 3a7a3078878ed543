//! # nestkv Storage
//!
//! Flat key/value storage for nestkv.
//!
//! This crate provides the lowest layer of the store: a mapping from
//! string keys to string values. Storage has **no transaction awareness**.
//! Undo logs and nesting live in `nestkv_core`, which drives a storage
//! through the [`Storage`] trait.
//!
//! ## Design Principles
//!
//! - Two primitive mutations only: `put` and `remove`
//! - Both mutations return the prior value so callers can build undo
//!   records without a second lookup
//! - Reads never fail
//! - No secondary indexes; value counts are linear scans
//!
//! ## Example
//!
//! ```rust
//! use nestkv_storage::{InMemoryStorage, Storage};
//!
//! let mut storage = InMemoryStorage::new();
//! assert_eq!(storage.put("a".into(), "10".into()), None);
//! assert_eq!(storage.put("a".into(), "20".into()), Some("10".to_string()));
//! assert_eq!(storage.get("a"), Some("20"));
//! assert_eq!(storage.count_equal_to("20"), 1);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod memory;
mod storage;

pub use memory::InMemoryStorage;
pub use storage::Storage;
