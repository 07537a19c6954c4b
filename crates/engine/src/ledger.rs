//! The expense state engine.
//!
//! A [`Ledger`] owns the canonical list of expenses as last read from its
//! [`ExpenseStore`]. Every mutation is written to the store first and the
//! in-memory list is then re-read from it, so the ledger never shows an
//! expense that failed to persist.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::{
    Category, EngineError, Expense, ExpenseStore, Range, ResultEngine,
    expense::{NewExpense, normalize_title},
    range::local_today,
    stats,
};

#[derive(Debug)]
pub struct Ledger<S> {
    store: S,
    items: Vec<Expense>,
    range: Range,
    loading: bool,
}

impl<S: ExpenseStore> Ledger<S> {
    /// Return a builder for `Ledger`. Help to build the struct.
    pub fn builder(store: S) -> LedgerBuilder<S> {
        LedgerBuilder {
            store,
            range: Range::default(),
        }
    }

    /// All expenses, newest date first. Expenses sharing a date keep the
    /// order the store returned them in.
    pub fn items(&self) -> &[Expense] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&Expense> {
        self.items.iter().find(|e| e.id == id)
    }

    /// `true` until the first successful [`refresh`](Self::refresh), while a
    /// refresh is in progress, and after a failed one.
    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn range(&self) -> Range {
        self.range
    }

    /// Changes the active range. Only the derived view is affected.
    pub fn set_range(&mut self, range: Range) {
        self.range = range;
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Items inside the active range, evaluated against today's local date.
    pub fn visible(&self) -> Vec<&Expense> {
        self.visible_on(local_today())
    }

    /// Items inside the active range, with `today` as the local calendar day.
    pub fn visible_on(&self, today: NaiveDate) -> Vec<&Expense> {
        self.range.apply(&self.items, today)
    }

    /// Sum of the visible amounts, in minor units.
    pub fn total_cents(&self) -> i64 {
        self.total_cents_on(local_today())
    }

    pub fn total_cents_on(&self, today: NaiveDate) -> i64 {
        stats::grand_total(self.visible_on(today))
    }

    /// Re-reads the collection from the store and sorts it by date, newest
    /// first.
    ///
    /// On failure the previous items are kept and `loading` stays `true`, so
    /// a read error is never presented as an empty ledger.
    pub async fn refresh(&mut self) -> ResultEngine<()> {
        self.loading = true;
        let mut items = match self.store.get_all().await {
            Ok(items) => items,
            Err(err) => {
                tracing::warn!("refresh failed, keeping {} stale items: {err}", self.items.len());
                return Err(err);
            }
        };
        // Stable sort: same-day expenses stay in insertion order.
        items.sort_by(|a, b| b.date.cmp(&a.date));
        self.items = items;
        self.loading = false;
        Ok(())
    }

    /// Records a new expense and returns its freshly generated id.
    ///
    /// `title` is trimmed and must not be empty; `amount_cents` must be > 0.
    /// Invalid input fails with [`EngineError::Validation`] before the store
    /// is touched. If the write succeeds but the follow-up refresh fails, the
    /// read error is returned even though the record is saved; the next
    /// successful refresh shows it.
    pub async fn add(
        &mut self,
        title: &str,
        amount_cents: i64,
        category: Category,
        date: NaiveDate,
    ) -> ResultEngine<String> {
        let expense = NewExpense::new(title, amount_cents, category, date).into_expense()?;
        let id = expense.id.clone();

        self.store.add(expense).await?;
        self.refresh().await?;
        tracing::debug!(id = %id, items = self.items.len(), "expense added");
        Ok(id)
    }

    /// Deletes the expense with `id`. Removing an unknown id is a no-op.
    pub async fn remove(&mut self, id: &str) -> ResultEngine<()> {
        self.store.remove(id).await?;
        self.refresh().await?;
        tracing::debug!(id = %id, items = self.items.len(), "expense removed");
        Ok(())
    }

    /// Replaces the expense sharing `expense.id` with the given values.
    ///
    /// The title is trimmed before saving. Updating an unknown id leaves the
    /// collection unchanged.
    pub async fn update(&mut self, mut expense: Expense) -> ResultEngine<()> {
        expense.title = normalize_title(&expense.title)?;
        expense.validate()?;

        let id = expense.id.clone();
        self.store.update(expense).await?;
        self.refresh().await?;
        tracing::debug!(id = %id, items = self.items.len(), "expense updated");
        Ok(())
    }

    /// Overwrites the whole collection, e.g. when restoring a backup.
    ///
    /// Every record is validated and ids must be unique; otherwise nothing is
    /// written.
    pub async fn replace_all(&mut self, expenses: Vec<Expense>) -> ResultEngine<()> {
        {
            let mut seen = HashSet::with_capacity(expenses.len());
            for expense in &expenses {
                expense.validate()?;
                if !seen.insert(expense.id.as_str()) {
                    return Err(EngineError::Validation(format!(
                        "duplicate expense id: {}",
                        expense.id
                    )));
                }
            }
        }

        self.store.replace_all(expenses).await?;
        self.refresh().await?;
        tracing::debug!(items = self.items.len(), "collection replaced");
        Ok(())
    }
}

/// The builder for `Ledger`
pub struct LedgerBuilder<S> {
    store: S,
    range: Range,
}

impl<S: ExpenseStore> LedgerBuilder<S> {
    /// Initial range selector (default: current month).
    pub fn range(mut self, range: Range) -> LedgerBuilder<S> {
        self.range = range;
        self
    }

    /// Construct `Ledger`. Items stay empty until the first `refresh`.
    pub fn build(self) -> Ledger<S> {
        Ledger {
            store: self.store,
            items: Vec::new(),
            range: self.range,
            loading: true,
        }
    }
}
