//! Persistence contract for the expense collection.
//!
//! The ledger only talks to an [`ExpenseStore`]; how and where the collection
//! lives is up to the implementation. The reference backend is
//! [`JsonExpenseStore`], which keeps the whole collection as one JSON blob in a
//! [`BlobStore`] slot.

use async_trait::async_trait;

use crate::{Expense, ResultEngine};

mod blob;
mod json;

pub use blob::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use json::{DEFAULT_KEY, JsonExpenseStore};

/// Durable storage of the full expense collection.
///
/// Implementations are not required to be safe against concurrent mutations:
/// callers serialize `add`/`update`/`remove`/`replace_all`.
#[async_trait]
pub trait ExpenseStore: Send + Sync {
    /// Returns the full persisted collection, in stored order.
    ///
    /// A store that was never written to yields an empty list, not an error.
    async fn get_all(&self) -> ResultEngine<Vec<Expense>>;

    /// Appends one record and persists the updated collection.
    async fn add(&self, expense: Expense) -> ResultEngine<()>;

    /// Replaces the record sharing `expense.id`. Unknown ids are a no-op.
    async fn update(&self, expense: Expense) -> ResultEngine<()>;

    /// Deletes the record with `id` if present. Unknown ids are a no-op.
    async fn remove(&self, id: &str) -> ResultEngine<()>;

    /// Overwrites the entire persisted collection.
    async fn replace_all(&self, expenses: Vec<Expense>) -> ResultEngine<()>;
}
