// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::grand_total;
use crate::config::Settings;
use crate::form::ExpenseForm;
use crate::ledger::Ledger;
use crate::models::{CategoryFilter, Expense, ExpenseId};
use crate::store::ExpenseStore;
use crate::utils::{fmt_money, maybe_print_json, parse_month, pretty_table, today};
use anyhow::{anyhow, Context, Result};
use regex::RegexBuilder;

pub fn handle<S: ExpenseStore>(
    ledger: &mut Ledger<S>,
    settings: &Settings,
    m: &clap::ArgMatches,
) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(ledger, settings, sub)?,
        Some(("list", sub)) => list(ledger, settings, sub)?,
        Some(("edit", sub)) => edit(ledger, settings, sub)?,
        Some(("rm", sub)) => remove(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

/// Overlay whichever form flags were given on top of `base`.
pub fn form_from_args(sub: &clap::ArgMatches, base: ExpenseForm) -> ExpenseForm {
    let pick = |key: &str, fallback: String| {
        sub.get_one::<String>(key)
            .map(|s| s.to_string())
            .unwrap_or(fallback)
    };
    ExpenseForm {
        amount: pick("amount", base.amount),
        category: pick("category", base.category),
        description: pick("description", base.description),
        date: pick("date", base.date),
    }
}

fn add<S: ExpenseStore>(
    ledger: &mut Ledger<S>,
    settings: &Settings,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let base = ExpenseForm {
        date: today().format("%Y-%m-%d").to_string(),
        ..ExpenseForm::default()
    };
    let form = form_from_args(sub, base);
    let e = ledger.add(&form).context("Expense not saved")?;
    println!(
        "Recorded #{}: {} on {} ({})",
        e.id,
        fmt_money(&e.amount, &settings.currency),
        e.date,
        e.category
    );
    Ok(())
}

fn edit<S: ExpenseStore>(
    ledger: &mut Ledger<S>,
    settings: &Settings,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let id = *sub.get_one::<ExpenseId>("id").unwrap();
    let existing = ledger
        .find(id)
        .ok_or_else(|| anyhow!("Expense {} not found", id))?;
    let form = form_from_args(sub, ExpenseForm::from_expense(existing));
    let e = ledger.edit(id, &form).context("Expense not updated")?;
    println!(
        "Updated #{}: {} on {} ({})",
        e.id,
        fmt_money(&e.amount, &settings.currency),
        e.date,
        e.category
    );
    Ok(())
}

fn remove<S: ExpenseStore>(ledger: &mut Ledger<S>, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<ExpenseId>("id").unwrap();
    ledger.remove(id).context("Expense not deleted")?;
    println!("Deleted expense #{}", id);
    Ok(())
}

fn list<S: ExpenseStore>(
    ledger: &Ledger<S>,
    settings: &Settings,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(ledger.records(), sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|e| {
                vec![
                    e.id.to_string(),
                    e.date.to_string(),
                    e.category.to_string(),
                    e.description.clone(),
                    format!("{:.2}", e.amount),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Date", "Category", "Description", "Amount"], rows)
        );
        println!(
            "{} expense(s), total {}",
            data.len(),
            fmt_money(&grand_total(&data), &settings.currency)
        );
    }
    Ok(())
}

/// Apply the list filters to a snapshot, keeping its order.
pub fn query_rows(records: &[Expense], sub: &clap::ArgMatches) -> Result<Vec<Expense>> {
    let filter = sub
        .get_one::<String>("category")
        .map(|s| CategoryFilter::parse(s))
        .unwrap_or_default();
    let month = match sub.get_one::<String>("month") {
        Some(m) => Some(parse_month(m)?),
        None => None,
    };
    let search = match sub.get_one::<String>("search") {
        Some(pat) => Some(
            RegexBuilder::new(pat)
                .case_insensitive(true)
                .build()
                .with_context(|| format!("Invalid search pattern '{}'", pat))?,
        ),
        None => None,
    };
    let limit = sub.get_one::<usize>("limit").copied().unwrap_or(usize::MAX);

    let data = records
        .iter()
        .filter(|e| filter.matches(e))
        .filter(|e| month.as_deref().is_none_or(|m| e.month().to_string() == m))
        .filter(|e| search.as_ref().is_none_or(|re| re.is_match(&e.description)))
        .take(limit)
        .cloned()
        .collect();
    Ok(data)
}
