// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Settings;
use crate::form::CategoryPolicy;
use crate::models::Category;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    if let Some(("list", _)) = m.subcommand() {
        let data = Category::FIXED
            .iter()
            .map(|c| vec![c.label().to_string()])
            .collect();
        println!("{}", pretty_table(&["Category"], data));
        if settings.categories == CategoryPolicy::Free {
            println!("Free-text categories are enabled; any other label is accepted too.");
        }
    }
    Ok(())
}
