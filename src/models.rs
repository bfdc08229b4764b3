// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type ExpenseId = i64;

/// Spending category. The ten fixed labels cover the default form; `Custom`
/// carries free text when the ledger runs with free-text categories.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Food,
    Transport,
    Housing,
    Utilities,
    Entertainment,
    Health,
    Shopping,
    Education,
    Travel,
    Other,
    Custom(String),
}

impl Category {
    pub const FIXED: [Category; 10] = [
        Category::Food,
        Category::Transport,
        Category::Housing,
        Category::Utilities,
        Category::Entertainment,
        Category::Health,
        Category::Shopping,
        Category::Education,
        Category::Travel,
        Category::Other,
    ];

    pub fn label(&self) -> &str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Housing => "Housing",
            Category::Utilities => "Utilities",
            Category::Entertainment => "Entertainment",
            Category::Health => "Health",
            Category::Shopping => "Shopping",
            Category::Education => "Education",
            Category::Travel => "Travel",
            Category::Other => "Other",
            Category::Custom(s) => s,
        }
    }

    /// Case-insensitive lookup among the fixed labels.
    pub fn fixed(s: &str) -> Option<Category> {
        let s = s.trim();
        Self::FIXED
            .iter()
            .find(|c| c.label().eq_ignore_ascii_case(s))
            .cloned()
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Category::Custom(_))
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Category::fixed(&s).unwrap_or_else(|| Category::Custom(s.trim().to_string()))
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Category::from(s.to_string())
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        c.label().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub amount: Decimal,
    pub category: Category,
    pub description: String,
    pub date: NaiveDate,
}

impl Expense {
    pub fn from_draft(id: ExpenseId, draft: &ExpenseDraft) -> Self {
        Expense {
            id,
            amount: draft.amount,
            category: draft.category.clone(),
            description: draft.description.clone(),
            date: draft.date,
        }
    }

    pub fn month(&self) -> YearMonth {
        YearMonth::of(self.date)
    }
}

/// A validated record without its identifier; what the stores insert and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub amount: Decimal,
    pub category: Category,
    pub description: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        YearMonth {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// `"all"` (any case) or an empty string select everything.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(Category::from(s))
        }
    }

    pub fn matches(&self, e: &Expense) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => &e.category == c,
        }
    }
}
