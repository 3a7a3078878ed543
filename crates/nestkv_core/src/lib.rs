//! # nestkv Core
//!
//! Transaction engine and command layer for nestkv.
//!
//! This crate provides:
//! - Undo-log based nested transactions (BEGIN / COMMIT / ROLLBACK)
//! - The [`Store`] with its SET / GET / UNSET / NUMEQUALTO operations
//! - Command parsing and dispatch
//! - A line-oriented [`Session`] interpreter
//! - A lock-guarded [`SharedStore`] handle for multi-threaded callers
//!
//! ## Example
//!
//! ```rust
//! use nestkv_core::{CoreError, Store};
//!
//! let mut store = Store::new();
//! store.execute_set("a", "10");
//! store.execute_set("b", "10");
//! assert_eq!(store.execute_num_equal_to("10"), "2");
//!
//! store.begin();
//! store.execute_unset("a");
//! store.rollback().unwrap();
//! assert_eq!(store.execute_get("a"), "10");
//!
//! assert_eq!(store.commit(), Err(CoreError::NoActiveTransaction));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod command;
mod config;
mod error;
mod session;
mod shared;
mod stats;
mod store;
pub mod transaction;

pub use command::Command;
pub use config::{Config, DEFAULT_END_COMMAND};
pub use error::{CoreError, CoreResult};
pub use session::{Reply, Session};
pub use shared::SharedStore;
pub use stats::StoreStats;
pub use store::{Store, NULL_MARKER};
pub use transaction::{TransactionScope, TransactionStack, UndoAction};

pub use nestkv_storage::{InMemoryStorage, Storage};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
