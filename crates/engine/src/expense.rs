//! Expense records.
//!
//! An `Expense` is immutable once created: edits replace it wholesale under
//! the same id.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Category, EngineError, ResultEngine};

/// Largest accepted amount for a single expense, in minor units
/// (one billion major units).
///
/// Keeps totals over any realistic collection far from `i64::MAX`.
pub const MAX_AMOUNT_CENTS: i64 = 100_000_000_000;

/// A single persisted expense.
///
/// `date` is a local calendar day with no time-of-day or timezone attached.
/// The serialized shape is `{"id","title","amountCents","category","dateISO"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub title: String,
    pub amount_cents: i64,
    pub category: Category,
    #[serde(rename = "dateISO")]
    pub date: NaiveDate,
}

impl Expense {
    /// Checks the record invariants: non-empty id, non-empty trimmed title
    /// and an amount in `1..=MAX_AMOUNT_CENTS`.
    pub fn validate(&self) -> ResultEngine<()> {
        if self.id.trim().is_empty() {
            return Err(EngineError::Validation(
                "expense id must not be empty".to_string(),
            ));
        }
        if self.title.trim() != self.title || self.title.is_empty() {
            return Err(EngineError::Validation(
                "title must be non-empty and trimmed".to_string(),
            ));
        }
        ensure_positive_amount(self.amount_cents)
    }
}

/// Field values for an expense that has not been assigned an id yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct NewExpense {
    pub title: String,
    pub amount_cents: i64,
    pub category: Category,
    pub date: NaiveDate,
}

impl NewExpense {
    pub(crate) fn new(
        title: impl Into<String>,
        amount_cents: i64,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            amount_cents,
            category,
            date,
        }
    }

    /// Validates the draft and turns it into a record with a fresh id.
    pub(crate) fn into_expense(self) -> ResultEngine<Expense> {
        let title = normalize_title(&self.title)?;
        ensure_positive_amount(self.amount_cents)?;
        Ok(Expense {
            id: new_expense_id(),
            title,
            amount_cents: self.amount_cents,
            category: self.category,
            date: self.date,
        })
    }
}

/// Generates an opaque, never reused expense id.
pub(crate) fn new_expense_id() -> String {
    Uuid::new_v4().to_string()
}

pub(crate) fn normalize_title(value: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::Validation(
            "title must not be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

fn ensure_positive_amount(amount_cents: i64) -> ResultEngine<()> {
    if amount_cents <= 0 {
        return Err(EngineError::Validation(format!(
            "amount must be > 0, got {amount_cents}"
        )));
    }
    if amount_cents > MAX_AMOUNT_CENTS {
        return Err(EngineError::Validation(format!(
            "amount must be <= {MAX_AMOUNT_CENTS}, got {amount_cents}"
        )));
    }
    Ok(())
}
