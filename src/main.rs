// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use spendwise::{auth, cli, commands, config::Settings, db};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    if let Some(("demo", _)) = matches.subcommand() {
        return commands::demo::handle();
    }

    let conn = db::open_or_init()?;
    let settings = Settings::load(&conn)?;

    match matches.subcommand() {
        Some(("auth", sub)) => commands::auth::handle(&conn, &settings, sub)?,
        Some(("config", sub)) => commands::config::handle(&conn, sub)?,
        Some(("category", sub)) => commands::categories::handle(&settings, sub)?,
        Some((name @ ("expense" | "report" | "export"), sub)) => {
            let session = auth::require_session(&conn)?;
            let mut ledger = commands::open_ledger(&conn, &settings, &session)?;
            match name {
                "expense" => commands::expenses::handle(&mut ledger, &settings, sub)?,
                "report" => commands::reports::handle(&ledger, &settings, sub)?,
                _ => commands::exporter::handle(&ledger, sub)?,
            }
        }
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
