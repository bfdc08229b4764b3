// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{
    category_totals, daily_totals, filtered_total, monthly_totals, summarize, CategoryBreakdown,
    DailyTotal, MonthlyTotal, Summary,
};
use crate::config::Settings;
use crate::ledger::Ledger;
use crate::models::{CategoryFilter, Expense};
use crate::store::ExpenseStore;
use crate::utils::{bar, fmt_money, maybe_print_json, pretty_table, today};
use anyhow::Result;
use comfy_table::Table;
use rust_decimal::Decimal;

const BAR_WIDTH: usize = 30;

pub fn handle<S: ExpenseStore>(
    ledger: &Ledger<S>,
    settings: &Settings,
    m: &clap::ArgMatches,
) -> Result<()> {
    let records = ledger.records();
    let ccy = settings.currency.as_str();
    let now = today();
    match m.subcommand() {
        Some(("summary", sub)) => {
            let s = summarize(records, now);
            if !json_out(sub, &s)? {
                println!("{}", summary_table(&s, ccy));
                if let Some(cat) = sub.get_one::<String>("category") {
                    let filter = CategoryFilter::parse(cat);
                    println!(
                        "Total for {}: {}",
                        cat,
                        fmt_money(&filtered_total(records, &filter), ccy)
                    );
                }
            }
        }
        Some(("category", sub)) => {
            let b = category_totals(records);
            if !json_out(sub, &b)? {
                println!("{}", category_table(&b, ccy));
            }
        }
        Some(("monthly", sub)) => {
            let months = monthly_totals(records);
            if !json_out(sub, &months)? {
                println!("{}", monthly_table(&months));
            }
        }
        Some(("daily", sub)) => {
            let days = daily_totals(records, now);
            if !json_out(sub, &days)? {
                println!("{}", daily_table(&days));
            }
        }
        _ => {}
    }
    Ok(())
}

fn json_out<T: serde::Serialize>(sub: &clap::ArgMatches, v: &T) -> Result<bool> {
    maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), v)
}

pub fn summary_table(s: &Summary, ccy: &str) -> Table {
    let top = s
        .top_category
        .as_ref()
        .map(|c| c.to_string())
        .unwrap_or_else(|| "-".to_string());
    pretty_table(
        &["Metric", "Value"],
        vec![
            vec!["Total spent".into(), fmt_money(&s.total, ccy)],
            vec!["This month".into(), fmt_money(&s.current_month, ccy)],
            vec!["Expenses".into(), s.count.to_string()],
            vec!["Average".into(), fmt_money(&s.average, ccy)],
            vec!["Top category".into(), top],
        ],
    )
}

pub fn category_table(b: &CategoryBreakdown, ccy: &str) -> Table {
    let max = b
        .entries
        .first()
        .map(|e| e.total)
        .unwrap_or(Decimal::ZERO);
    let mut rows: Vec<Vec<String>> = b
        .entries
        .iter()
        .map(|e| {
            vec![
                e.category.to_string(),
                e.count.to_string(),
                format!("{:.2}", e.total),
                format!("{:.1}%", e.percent),
                bar(e.total, max, BAR_WIDTH),
            ]
        })
        .collect();
    rows.push(vec![
        "Total".into(),
        b.entries.iter().map(|e| e.count).sum::<usize>().to_string(),
        fmt_money(&b.grand_total, ccy),
        String::new(),
        String::new(),
    ]);
    pretty_table(&["Category", "Count", "Spent", "Share", ""], rows)
}

pub fn monthly_table(months: &[MonthlyTotal]) -> Table {
    let max = months.iter().map(|m| m.total).max().unwrap_or(Decimal::ZERO);
    let rows = months
        .iter()
        .map(|m| {
            vec![
                m.month.to_string(),
                m.count.to_string(),
                format!("{:.2}", m.total),
                bar(m.total, max, BAR_WIDTH),
            ]
        })
        .collect();
    pretty_table(&["Month", "Count", "Spent", ""], rows)
}

pub fn daily_table(days: &[DailyTotal]) -> Table {
    let max = days.iter().map(|d| d.total).max().unwrap_or(Decimal::ZERO);
    let rows = days
        .iter()
        .map(|d| {
            vec![
                d.date.to_string(),
                format!("{:.2}", d.total),
                bar(d.total, max, BAR_WIDTH),
            ]
        })
        .collect();
    pretty_table(&["Date", "Spent", ""], rows)
}

/// Print every report for `records`; used by the demo.
pub fn print_all(records: &[Expense], ccy: &str) {
    let now = today();
    println!("{}", summary_table(&summarize(records, now), ccy));
    println!("{}", category_table(&category_totals(records), ccy));
    println!("{}", monthly_table(&monthly_totals(records)));
    println!("{}", daily_table(&daily_totals(records, now)));
}
