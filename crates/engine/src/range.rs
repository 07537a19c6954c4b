//! Time-range selector applied to the ledger's items.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::Expense;

/// The active time window for the visible view.
///
/// It only shapes the derived view; persisted data is never filtered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Range {
    /// Only expenses dated in the current local calendar month.
    #[default]
    CurrentMonth,
    All,
}

impl Range {
    /// Label shown on the range toggle.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Range::CurrentMonth => "This Month",
            Range::All => "All",
        }
    }

    /// The other selector, for a single toggle control.
    #[must_use]
    pub const fn toggled(self) -> Range {
        match self {
            Range::CurrentMonth => Range::All,
            Range::All => Range::CurrentMonth,
        }
    }

    /// Returns `true` if an expense dated `date` is inside the range, with
    /// `today` being the caller's local calendar day.
    #[must_use]
    pub fn contains(self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            Range::CurrentMonth => date.year() == today.year() && date.month() == today.month(),
            Range::All => true,
        }
    }

    /// Filters `items`, preserving their order.
    pub fn apply(self, items: &[Expense], today: NaiveDate) -> Vec<&Expense> {
        items
            .iter()
            .filter(|expense| self.contains(expense.date, today))
            .collect()
    }
}

/// Today's date from the local wall clock.
///
/// Year, month and day come from local time components, so an expense dated
/// on the 1st never lands in the previous month because of a UTC offset.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
