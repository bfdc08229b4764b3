// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod auth;
pub mod categories;
pub mod config;
pub mod demo;
pub mod expenses;
pub mod exporter;
pub mod reports;

use crate::auth::Session;
use crate::config::{Backend, Settings};
use crate::error::AuthError;
use crate::ledger::Ledger;
use crate::store::{ExpenseStore, RestStore, SqliteStore};
use crate::utils::http_client;
use anyhow::{Context, Result};
use rusqlite::Connection;

pub type DynLedger<'a> = Ledger<Box<dyn ExpenseStore + 'a>>;

/// Pick the store for the configured backend and load the session owner's expenses.
pub fn open_ledger<'a>(
    conn: &'a Connection,
    settings: &Settings,
    session: &Session,
) -> Result<DynLedger<'a>> {
    let store: Box<dyn ExpenseStore + 'a> = match settings.backend {
        Backend::Local => Box::new(SqliteStore::new(conn, session.user_id.clone())),
        Backend::Remote => {
            let (url, key) = settings.remote().ok_or(AuthError::NotConfigured)?;
            Box::new(
                RestStore::new(http_client()?, url, key)
                    .with_access_token(session.access_token.clone()),
            )
        }
    };
    let mut ledger = Ledger::new(store, session.user_id.clone()).with_policy(settings.categories);
    ledger.reload().context("Could not load expenses")?;
    Ok(ledger)
}
