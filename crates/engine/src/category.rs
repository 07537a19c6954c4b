use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::EngineError;

/// Spending category of an expense.
///
/// The set is closed: every place that interprets a category matches on it
/// exhaustively, so adding one is a compile-time checked change.
///
/// Serialized with its label (`"Food"`, `"Transport"`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Bills,
    Shopping,
    Fun,
    Other,
}

impl Category {
    /// Every category, in the order the UI offers them.
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Transport,
        Category::Bills,
        Category::Shopping,
        Category::Fun,
        Category::Other,
    ];

    /// Canonical label, identical to the serialized form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Bills => "Bills",
            Category::Shopping => "Shopping",
            Category::Fun => "Fun",
            Category::Other => "Other",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<&str> for Category {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "food" => Ok(Category::Food),
            "transport" => Ok(Category::Transport),
            "bills" => Ok(Category::Bills),
            "shopping" => Ok(Category::Shopping),
            "fun" => Ok(Category::Fun),
            "other" => Ok(Category::Other),
            other => Err(EngineError::InvalidCategory(format!(
                "unknown category: {other}"
            ))),
        }
    }
}

impl FromStr for Category {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::try_from(s)
    }
}
