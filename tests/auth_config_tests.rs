// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use spendwise::auth::{
    clear_session, load_session, require_session, save_session, Authenticator, MockAuth,
    RemoteAuth, Session, MOCK_EMAIL, MOCK_PASSWORD, MOCK_USER_ID,
};
use spendwise::commands::config::mask;
use spendwise::commands::{auth as auth_cmd, open_ledger};
use spendwise::config::{Backend, Settings};
use spendwise::db;
use spendwise::error::AuthError;
use spendwise::form::CategoryPolicy;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

#[test]
fn mock_auth_accepts_only_the_demo_pair() {
    let s = MockAuth.sign_in(MOCK_EMAIL, MOCK_PASSWORD).unwrap();
    assert_eq!(s.user_id, MOCK_USER_ID);
    assert!(s.access_token.is_none());
    assert!(MockAuth.sign_in("DEMO@spendwise.local", MOCK_PASSWORD).is_ok());
    assert!(matches!(
        MockAuth.sign_in(MOCK_EMAIL, "wrong"),
        Err(AuthError::InvalidCredentials)
    ));
    assert!(matches!(
        MockAuth.sign_in("someone@else", MOCK_PASSWORD),
        Err(AuthError::InvalidCredentials)
    ));
}

#[test]
fn session_persists_until_cleared() {
    let conn = setup();
    assert!(load_session(&conn).unwrap().is_none());
    assert!(require_session(&conn).is_err());

    let s = Session {
        user_id: "abc".into(),
        email: "a@b.c".into(),
        access_token: Some("tok".into()),
    };
    save_session(&conn, &s).unwrap();
    assert_eq!(load_session(&conn).unwrap(), Some(s.clone()));
    assert_eq!(require_session(&conn).unwrap(), s);

    clear_session(&conn).unwrap();
    assert!(load_session(&conn).unwrap().is_none());
}

#[test]
fn local_login_stores_session_and_bad_login_does_not() {
    let conn = setup();
    let settings = Settings::default();
    assert!(auth_cmd::login(&conn, &settings, MOCK_EMAIL, "nope").is_err());
    assert!(load_session(&conn).unwrap().is_none());

    let s = auth_cmd::login(&conn, &settings, MOCK_EMAIL, MOCK_PASSWORD).unwrap();
    assert_eq!(load_session(&conn).unwrap(), Some(s));
}

#[test]
fn remote_login_requires_configuration() {
    let conn = setup();
    let settings = Settings {
        backend: Backend::Remote,
        remote_url: None,
        api_key: None,
        ..Settings::default()
    };
    let err = auth_cmd::login(&conn, &settings, "a@b.c", "pw").unwrap_err();
    assert!(err.to_string().contains("not configured"));
}

#[test]
fn remote_auth_token_url() {
    let a = RemoteAuth::new(
        reqwest::blocking::Client::new(),
        "https://demo.supabase.co/",
        "anon",
    );
    assert_eq!(
        a.token_url(),
        "https://demo.supabase.co/auth/v1/token?grant_type=password"
    );
}

#[test]
fn settings_defaults_and_updates() {
    let conn = setup();
    let s = Settings::load(&conn).unwrap();
    assert_eq!(s.backend, Backend::Local);
    assert_eq!(s.currency, "USD");
    assert_eq!(s.categories, CategoryPolicy::Fixed);

    Settings::set(&conn, "currency", "eur").unwrap();
    Settings::set(&conn, "categories", "Free").unwrap();
    Settings::set(&conn, "backend", "remote").unwrap();
    let s = Settings::load(&conn).unwrap();
    assert_eq!(s.currency, "EUR");
    assert_eq!(s.categories, CategoryPolicy::Free);
    assert_eq!(s.backend, Backend::Remote);
}

#[test]
fn settings_reject_bad_keys_and_values() {
    let conn = setup();
    assert!(Settings::set(&conn, "colour", "blue").is_err());
    assert!(Settings::set(&conn, "backend", "cloud").is_err());
    assert!(Settings::set(&conn, "currency", "EURO").is_err());
    assert!(Settings::set(&conn, "remote_url", "ftp://x").is_err());
    assert!(Settings::set(&conn, "categories", "some").is_err());
}

#[test]
fn remote_pair_needs_both_values() {
    let mut s = Settings {
        remote_url: Some("https://x.supabase.co".into()),
        ..Settings::default()
    };
    assert!(s.remote().is_none());
    s.api_key = Some("k".into());
    assert_eq!(s.remote(), Some(("https://x.supabase.co", "k")));
}

#[test]
fn open_ledger_uses_local_store_for_session_owner() {
    let conn = setup();
    conn.execute(
        "INSERT INTO expenses(owner, amount, category, description, date) VALUES ('local-demo','5','Food','',  '2024-01-01'), ('other','6','Food','','2024-01-01')",
        [],
    )
    .unwrap();
    let session = MockAuth.sign_in(MOCK_EMAIL, MOCK_PASSWORD).unwrap();
    let ledger = open_ledger(&conn, &Settings::default(), &session).unwrap();
    assert_eq!(ledger.records().len(), 1);
    assert_eq!(ledger.owner(), MOCK_USER_ID);
}

#[test]
fn secrets_are_masked() {
    assert_eq!(mask(None), "");
    assert_eq!(mask(Some("abc")), "****");
    assert_eq!(mask(Some("supersecretkey")), "****tkey");
}
