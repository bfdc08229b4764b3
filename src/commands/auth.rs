// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::auth::{
    clear_session, load_session, save_session, Authenticator, MockAuth, RemoteAuth, Session,
};
use crate::config::{Backend, Settings};
use crate::error::AuthError;
use crate::utils::http_client;
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("login", sub)) => {
            let email = sub.get_one::<String>("email").unwrap();
            let password = sub.get_one::<String>("password").unwrap();
            let session = login(conn, settings, email, password)?;
            println!("Logged in as {}", session.email);
        }
        Some(("logout", _)) => {
            clear_session(conn)?;
            println!("Logged out");
        }
        Some(("status", _)) => match load_session(conn)? {
            Some(s) => println!("Logged in as {} ({})", s.email, s.user_id),
            None => println!("Not logged in"),
        },
        _ => {}
    }
    Ok(())
}

/// Sign in with the configured backend and persist the session on success.
pub fn login(conn: &Connection, settings: &Settings, email: &str, password: &str) -> Result<Session> {
    let session = match settings.backend {
        Backend::Local => MockAuth.sign_in(email, password)?,
        Backend::Remote => {
            let (url, key) = settings.remote().ok_or(AuthError::NotConfigured)?;
            RemoteAuth::new(http_client()?, url, key).sign_in(email, password)?
        }
    };
    save_session(conn, &session)?;
    log::info!("session stored for {}", session.user_id);
    Ok(session)
}
