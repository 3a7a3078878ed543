//! Property-based test generators using proptest.
//!
//! Keys and values are drawn from small alphabets so that generated
//! sequences collide on the same keys often enough to exercise undo
//! records that overwrite each other.

use proptest::prelude::*;

/// One store operation in a generated sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    /// `SET key value`
    Set(String, String),
    /// `UNSET key`
    Unset(String),
    /// `BEGIN`
    Begin,
    /// `COMMIT`
    Commit,
    /// `ROLLBACK`
    Rollback,
}

impl Op {
    /// Returns `true` for SET and UNSET.
    #[must_use]
    pub fn is_mutation(&self) -> bool {
        matches!(self, Self::Set(..) | Self::Unset(_))
    }

    /// Renders the operation as a command line.
    #[must_use]
    pub fn to_line(&self) -> String {
        match self {
            Self::Set(key, value) => format!("SET {key} {value}"),
            Self::Unset(key) => format!("UNSET {key}"),
            Self::Begin => "BEGIN".to_string(),
            Self::Commit => "COMMIT".to_string(),
            Self::Rollback => "ROLLBACK".to_string(),
        }
    }
}

/// Strategy for keys from a small shared pool.
pub fn key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-f]").expect("Invalid regex")
}

/// Strategy for values, including case-only differences.
pub fn value_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-3xX]{1,2}").expect("Invalid regex")
}

/// Strategy for a pre-populated storage.
pub fn entries_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((key_strategy(), value_strategy()), 0..8)
}

/// Strategy for a single SET or UNSET.
pub fn mutation_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (key_strategy(), value_strategy()).prop_map(|(k, v)| Op::Set(k, v)),
        1 => key_strategy().prop_map(Op::Unset),
    ]
}

/// Strategy for a sequence of SET and UNSET only.
pub fn mutations_strategy(max_len: usize) -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(mutation_strategy(), 0..max_len)
}

/// Strategy for any operation, transaction control included.
pub fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => mutation_strategy(),
        2 => Just(Op::Begin),
        1 => Just(Op::Commit),
        1 => Just(Op::Rollback),
    ]
}

/// Strategy for a sequence that never closes more scopes than it opens
/// and never commits.
///
/// Every BEGIN in the result is either matched by a later ROLLBACK or
/// left open. Used for checks where rollback must restore a snapshot
/// exactly.
pub fn rollback_only_strategy(max_len: usize) -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(
        prop_oneof![
            6 => mutation_strategy(),
            2 => Just(Op::Begin),
            1 => Just(Op::Rollback),
        ],
        0..max_len,
    )
    .prop_map(|ops| {
        let mut depth = 0usize;
        ops.into_iter()
            .filter(|op| match op {
                Op::Begin => {
                    depth += 1;
                    true
                }
                Op::Rollback if depth == 0 => false,
                Op::Rollback => {
                    depth -= 1;
                    true
                }
                _ => true,
            })
            .collect()
    })
}
