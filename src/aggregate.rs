// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Grouping and summation over a snapshot of expenses.
//!
//! Every function here is pure and total: input order is irrelevant and an
//! empty slice yields empty or zero results. Sums saturate at `Decimal::MAX`
//! instead of overflowing.

use crate::models::{Category, CategoryFilter, Expense, YearMonth};
use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Number of calendar days in the rolling daily window, `today` included.
pub const DAILY_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: Category,
    pub total: Decimal,
    pub count: usize,
    /// Percentage of the grand total, 0 when the grand total is 0.
    pub percent: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    pub grand_total: Decimal,
    /// Sorted by total descending, then label.
    pub entries: Vec<CategoryShare>,
}

impl CategoryBreakdown {
    pub fn get(&self, category: &Category) -> Option<&CategoryShare> {
        self.entries.iter().find(|e| &e.category == category)
    }

    pub fn total_for(&self, category: &Category) -> Decimal {
        self.get(category).map(|e| e.total).unwrap_or(Decimal::ZERO)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTotal {
    pub month: YearMonth,
    pub total: Decimal,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total: Decimal,
    pub count: usize,
    pub current_month: Decimal,
    pub average: Decimal,
    pub top_category: Option<Category>,
}

fn total_of(amounts: impl Iterator<Item = Decimal>) -> Decimal {
    amounts.fold(Decimal::ZERO, |acc, a| acc.saturating_add(a))
}

pub fn grand_total(expenses: &[Expense]) -> Decimal {
    total_of(expenses.iter().map(|e| e.amount))
}

/// `part` as a percentage of `whole`; 0 when `whole` is 0.
pub fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    part.checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|p| p.checked_div(whole))
        .or_else(|| {
            part.checked_div(whole)
                .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
        })
        .unwrap_or(Decimal::ZERO)
}

pub fn category_totals(expenses: &[Expense]) -> CategoryBreakdown {
    let mut agg: HashMap<&Category, (Decimal, usize)> = HashMap::new();
    for e in expenses {
        let entry = agg.entry(&e.category).or_insert((Decimal::ZERO, 0));
        entry.0 = entry.0.saturating_add(e.amount);
        entry.1 += 1;
    }
    let grand_total = total_of(agg.values().map(|(t, _)| *t));

    let mut entries: Vec<CategoryShare> = agg
        .into_iter()
        .map(|(category, (total, count))| CategoryShare {
            category: category.clone(),
            total,
            count,
            percent: percent_of(total, grand_total),
        })
        .collect();
    entries.sort_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then_with(|| a.category.label().cmp(b.category.label()))
    });

    CategoryBreakdown {
        grand_total,
        entries,
    }
}

pub fn filtered_total(expenses: &[Expense], filter: &CategoryFilter) -> Decimal {
    total_of(
        expenses
            .iter()
            .filter(|e| filter.matches(e))
            .map(|e| e.amount),
    )
}

/// Totals per calendar month, ascending by year-month.
pub fn monthly_totals(expenses: &[Expense]) -> Vec<MonthlyTotal> {
    let mut map: BTreeMap<YearMonth, (Decimal, usize)> = BTreeMap::new();
    for e in expenses {
        let entry = map.entry(e.month()).or_insert((Decimal::ZERO, 0));
        entry.0 = entry.0.saturating_add(e.amount);
        entry.1 += 1;
    }
    map.into_iter()
        .map(|(month, (total, count))| MonthlyTotal {
            month,
            total,
            count,
        })
        .collect()
}

/// Totals per day over the 30 days ending at `today`, ascending by date.
///
/// A record dated exactly 30 days before `today` falls outside the window.
pub fn daily_totals(expenses: &[Expense], today: NaiveDate) -> Vec<DailyTotal> {
    let cutoff = today - Duration::days(DAILY_WINDOW_DAYS);
    let mut map: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for e in expenses.iter().filter(|e| e.date > cutoff && e.date <= today) {
        let slot = map.entry(e.date).or_insert(Decimal::ZERO);
        *slot = slot.saturating_add(e.amount);
    }
    map.into_iter()
        .map(|(date, total)| DailyTotal { date, total })
        .collect()
}

/// Sum of records whose month number equals `today`'s month.
///
/// The year is not compared, so January of every year counts toward January.
pub fn current_month_total(expenses: &[Expense], today: NaiveDate) -> Decimal {
    total_of(
        expenses
            .iter()
            .filter(|e| e.date.month() == today.month())
            .map(|e| e.amount),
    )
}

pub fn summarize(expenses: &[Expense], today: NaiveDate) -> Summary {
    let breakdown = category_totals(expenses);
    let count = expenses.len();
    let average = if count == 0 {
        Decimal::ZERO
    } else {
        breakdown
            .grand_total
            .checked_div(Decimal::from(count))
            .unwrap_or(Decimal::ZERO)
    };
    Summary {
        total: breakdown.grand_total,
        count,
        current_month: current_month_total(expenses, today),
        average,
        top_category: breakdown.entries.first().map(|e| e.category.clone()),
    }
}
