// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::ValidationError;
use crate::models::{Category, Expense, ExpenseDraft};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Largest amount a single expense may carry.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryPolicy {
    /// Only the ten built-in labels are accepted.
    #[default]
    Fixed,
    /// Any non-empty label is accepted.
    Free,
}

/// Raw form state as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseForm {
    pub amount: String,
    pub category: String,
    pub description: String,
    pub date: String,
}

impl ExpenseForm {
    /// Pre-fill an edit form from an existing record.
    pub fn from_expense(e: &Expense) -> Self {
        ExpenseForm {
            amount: e.amount.to_string(),
            category: e.category.label().to_string(),
            description: e.description.clone(),
            date: e.date.format("%Y-%m-%d").to_string(),
        }
    }

    pub fn validate(&self, policy: CategoryPolicy) -> Result<ExpenseDraft, ValidationError> {
        let amount_s = required("amount", &self.amount)?;
        let category_s = required("category", &self.category)?;
        let date_s = required("date", &self.date)?;

        let amount = amount_s
            .parse::<Decimal>()
            .map_err(|_| ValidationError::InvalidAmount(amount_s.to_string()))?;
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(ValidationError::NegativeAmount(amount_s.to_string()));
        }
        if amount > Decimal::from(MAX_AMOUNT) {
            return Err(ValidationError::AmountTooLarge(amount_s.to_string()));
        }

        let date = NaiveDate::parse_from_str(date_s, "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate(date_s.to_string()))?;

        let category = match policy {
            CategoryPolicy::Fixed => Category::fixed(category_s)
                .ok_or_else(|| ValidationError::UnknownCategory(category_s.to_string()))?,
            CategoryPolicy::Free => Category::from(category_s),
        };

        Ok(ExpenseDraft {
            amount,
            category,
            description: self.description.trim().to_string(),
            date,
        })
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let v = value.trim();
    if v.is_empty() {
        Err(ValidationError::Missing(field))
    } else {
        Ok(v)
    }
}
