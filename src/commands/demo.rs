// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::auth::MOCK_USER_ID;
use crate::commands::reports::print_all;
use crate::form::ExpenseForm;
use crate::ledger::{Ledger, SyncMode};
use crate::store::MemoryStore;
use crate::utils::today;
use anyhow::Result;
use chrono::{Duration, NaiveDate};

/// (days ago, amount, category, description)
const SAMPLE: [(i64, &str, &str, &str); 12] = [
    (1, "12.40", "Food", "Lunch"),
    (2, "3.20", "Transport", "Bus fare"),
    (3, "64.99", "Shopping", "Running shoes"),
    (5, "41.75", "Food", "Groceries"),
    (8, "89.00", "Utilities", "Electricity bill"),
    (12, "15.00", "Entertainment", "Cinema"),
    (20, "1200.00", "Housing", "Rent"),
    (27, "25.50", "Health", "Pharmacy"),
    (38, "38.10", "Food", "Groceries"),
    (45, "1200.00", "Housing", "Rent"),
    (70, "310.00", "Travel", "Train tickets"),
    (75, "1200.00", "Housing", "Rent"),
];

pub fn sample_forms(today: NaiveDate) -> Vec<ExpenseForm> {
    SAMPLE
        .iter()
        .map(|(ago, amount, category, description)| ExpenseForm {
            amount: amount.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            date: (today - Duration::days(*ago)).format("%Y-%m-%d").to_string(),
        })
        .collect()
}

pub fn handle() -> Result<()> {
    let mut ledger = Ledger::new(MemoryStore::new(), MOCK_USER_ID).with_mode(SyncMode::Local);
    for form in sample_forms(today()) {
        ledger.add(&form)?;
    }
    println!("Sample ledger with {} expenses (in memory, nothing saved)", ledger.records().len());
    print_all(ledger.records(), "USD");
    Ok(())
}
