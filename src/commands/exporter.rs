// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::models::Expense;
use crate::store::ExpenseStore;
use anyhow::{bail, Result};
use std::path::Path;

pub fn handle<S: ExpenseStore>(ledger: &Ledger<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("expenses", sub)) => {
            let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
            let out = sub.get_one::<String>("out").unwrap().trim().to_string();
            let n = export_expenses(ledger.records(), &fmt, Path::new(&out))?;
            println!("Exported {} expense(s) to {}", n, out);
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Write `records` oldest first; returns how many were written.
pub fn export_expenses(records: &[Expense], fmt: &str, out: &Path) -> Result<usize> {
    let mut items: Vec<&Expense> = records.iter().collect();
    items.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));

    match fmt {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["id", "date", "category", "description", "amount"])?;
            for e in &items {
                wtr.write_record([
                    e.id.to_string(),
                    e.date.to_string(),
                    e.category.to_string(),
                    e.description.clone(),
                    e.amount.to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        other => bail!("Unknown format: {} (use csv|json)", other),
    }
    log::info!("exported {} expenses to {}", items.len(), out.display());
    Ok(items.len())
}
