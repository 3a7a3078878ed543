//! # nestkv Testkit
//!
//! Test utilities for nestkv.
//!
//! This crate provides:
//! - Store fixtures and state snapshots
//! - Property-based test generators using proptest
//! - Golden scenario vectors (JSON transcripts)
//!
//! ## Usage
//!
//! ```rust
//! use nestkv_testkit::prelude::*;
//!
//! let mut store = store_with([("a", "1")]);
//! store.begin();
//! store.execute_set("a", "2");
//! store.rollback().unwrap();
//! assert_eq!(snapshot(&store), snapshot(&store_with([("a", "1")])));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod vectors;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::vectors::*;
}

pub use fixtures::*;
pub use generators::*;
pub use vectors::*;
