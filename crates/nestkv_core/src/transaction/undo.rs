//! Undo actions.

use nestkv_storage::Storage;

/// The inverse of one mutating command.
///
/// Built from the key's state *before* the mutation. Replaying it puts the
/// key back exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoAction {
    /// The key held `value`; replay writes it back.
    RestorePut {
        /// Affected key.
        key: String,
        /// Value the key held before the mutation.
        value: String,
    },
    /// The key was absent; replay removes it.
    RestoreRemove {
        /// Affected key.
        key: String,
    },
}

impl UndoAction {
    /// Builds the action that restores `key` to `prior`.
    ///
    /// `prior` is what storage returned from the mutating call.
    #[must_use]
    pub fn restore(key: String, prior: Option<String>) -> Self {
        match prior {
            Some(value) => Self::RestorePut { key, value },
            None => Self::RestoreRemove { key },
        }
    }

    /// Returns the affected key.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::RestorePut { key, .. } | Self::RestoreRemove { key } => key,
        }
    }

    /// Applies this action to `storage`.
    pub fn apply<S: Storage + ?Sized>(self, storage: &mut S) {
        match self {
            Self::RestorePut { key, value } => {
                storage.put(key, value);
            }
            Self::RestoreRemove { key } => {
                storage.remove(&key);
            }
        }
    }
}
