//! Aggregations over any expense collection.
//!
//! These functions are pure: they never touch a store or the ledger state and
//! work on whatever slice or filtered view the caller hands them. Amounts stay
//! in integer minor units; converting to a display string is the caller's job.
//!
//! Sums saturate at `i64::MAX`. Amounts are capped at
//! [`MAX_AMOUNT_CENTS`](crate::MAX_AMOUNT_CENTS) on the way in, but a slot
//! written by another tool is read back unchecked.

use serde::{Deserialize, Serialize};

use crate::{Category, Expense};

/// Sum of the amounts of one category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub category: Category,
    pub total_cents: i64,
}

/// Groups `records` by category and sums each group.
///
/// Only categories present in the input appear, each exactly once, in the
/// order they are first seen.
pub fn by_category<'a, I>(records: I) -> Vec<CategoryTotal>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for expense in records {
        match totals.iter_mut().find(|t| t.category == expense.category) {
            Some(total) => {
                total.total_cents = total.total_cents.saturating_add(expense.amount_cents);
            }
            None => totals.push(CategoryTotal {
                category: expense.category,
                total_cents: expense.amount_cents,
            }),
        }
    }
    totals
}

/// Sum of all amounts, `0` for an empty input.
pub fn grand_total<'a, I>(records: I) -> i64
where
    I: IntoIterator<Item = &'a Expense>,
{
    records
        .into_iter()
        .fold(0i64, |sum, e| sum.saturating_add(e.amount_cents))
}
