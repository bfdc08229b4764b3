// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::{Backend, Settings};
use crate::form::CategoryPolicy;
use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => {
            let s = Settings::load(conn)?;
            let backend = match s.backend {
                Backend::Local => "local",
                Backend::Remote => "remote",
            };
            let categories = match s.categories {
                CategoryPolicy::Fixed => "fixed",
                CategoryPolicy::Free => "free",
            };
            let rows = vec![
                vec!["backend".into(), backend.into()],
                vec!["remote_url".into(), s.remote_url.clone().unwrap_or_default()],
                vec!["api_key".into(), mask(s.api_key.as_deref())],
                vec!["currency".into(), s.currency.clone()],
                vec!["categories".into(), categories.into()],
            ];
            println!("{}", pretty_table(&["Key", "Value"], rows));
        }
        Some(("set", sub)) => {
            let key = sub.get_one::<String>("key").unwrap();
            let value = sub.get_one::<String>("value").unwrap();
            Settings::set(conn, key, value)?;
            println!("Set {}", key);
        }
        _ => {}
    }
    Ok(())
}

/// Show only the last four characters of a secret.
pub fn mask(secret: Option<&str>) -> String {
    match secret {
        None | Some("") => String::new(),
        Some(s) if s.chars().count() <= 4 => "****".to_string(),
        Some(s) => {
            let n = s.chars().count();
            let tail: String = s.chars().skip(n - 4).collect();
            format!("****{}", tail)
        }
    }
}
