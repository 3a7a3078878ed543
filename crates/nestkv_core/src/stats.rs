//! Store statistics.
//!
//! Counters for the commands a [`crate::Store`] has executed.
//!
//! # Usage
//!
//! ```rust
//! use nestkv_core::Store;
//!
//! let mut store = Store::new();
//! store.begin();
//! store.execute_set("a", "1");
//! store.rollback().unwrap();
//!
//! let stats = store.stats();
//! assert_eq!(stats.sets, 1);
//! assert_eq!(stats.undo_actions_replayed, 1);
//! ```

/// Store statistics.
///
/// All counters are monotonically increasing for the lifetime of the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    // Command counters
    /// SET commands executed.
    pub sets: u64,
    /// UNSET commands executed, including those on absent keys.
    pub unsets: u64,
    /// GET commands executed.
    pub gets: u64,
    /// NUMEQUALTO commands executed.
    pub count_queries: u64,

    // Transaction counters
    /// Scopes opened.
    pub begins: u64,
    /// Scopes committed.
    pub commits: u64,
    /// Scopes rolled back.
    pub rollbacks: u64,
    /// Undo actions appended to a scope.
    pub undo_actions_recorded: u64,
    /// Undo actions replayed by rollbacks.
    pub undo_actions_replayed: u64,
    /// Deepest nesting level reached.
    pub max_depth: usize,
}

impl StoreStats {
    /// Creates zeroed statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_begin(&mut self, depth: usize) {
        self.begins += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    pub(crate) fn record_rollback(&mut self, replayed: usize) {
        self.rollbacks += 1;
        self.undo_actions_replayed += replayed as u64;
    }

    /// Returns the number of scopes closed by commit or rollback.
    #[must_use]
    pub fn closed_transactions(&self) -> u64 {
        self.commits + self.rollbacks
    }
}
