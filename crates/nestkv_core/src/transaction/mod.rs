//! Nested transactions built on an undo log.
//!
//! Mutations are applied to storage immediately. While a transaction is
//! open, each mutating command also leaves an [`UndoAction`] in the
//! innermost [`TransactionScope`]:
//! - **Rollback** pops the innermost scope and replays its actions newest
//!   first, restoring storage to its state at the matching BEGIN
//! - **Commit** pops the innermost scope and drops its actions; nothing is
//!   merged into the enclosing scope
//!
//! Because commit does not merge, rolling back an outer scope after an
//! inner scope committed leaves the inner scope's writes in place.

mod scope;
mod stack;
mod undo;

pub use scope::TransactionScope;
pub use stack::TransactionStack;
pub use undo::UndoAction;
