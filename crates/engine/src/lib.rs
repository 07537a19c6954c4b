//! Expense state and aggregation engine.
//!
//! The crate is embedded by a UI shell. The shell constructs one
//! [`ExpenseStore`] and one [`Ledger`] at start-up and passes them to every
//! screen:
//!
//! ```rust,no_run
//! use engine::{Category, JsonExpenseStore, Ledger, MemoryBlobStore, local_today, stats};
//!
//! # async fn run() -> Result<(), engine::EngineError> {
//! let store = JsonExpenseStore::new(MemoryBlobStore::new());
//! let mut ledger = Ledger::builder(store).build();
//! ledger.refresh().await?;
//!
//! ledger.add("Coffee", 450, Category::Food, local_today()).await?;
//!
//! let per_category = stats::by_category(ledger.visible());
//! let total = ledger.total_cents();
//! # let _ = (per_category, total);
//! # Ok(())
//! # }
//! ```

pub use category::Category;
pub use error::EngineError;
pub use expense::{Expense, MAX_AMOUNT_CENTS};
pub use ledger::{Ledger, LedgerBuilder};
pub use money::parse_amount_cents;
pub use range::{Range, local_today};
pub use stats::CategoryTotal;
pub use store::{
    BlobStore, DEFAULT_KEY, ExpenseStore, FileBlobStore, JsonExpenseStore, MemoryBlobStore,
};

mod category;
mod error;
mod expense;
mod ledger;
mod money;
mod range;
pub mod stats;
mod store;

type ResultEngine<T> = Result<T, EngineError>;
