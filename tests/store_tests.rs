// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use spendwise::db;
use spendwise::error::StoreError;
use spendwise::form::{CategoryPolicy, ExpenseForm};
use spendwise::ledger::Ledger;
use spendwise::models::{Category, ExpenseDraft};
use spendwise::store::{ExpenseStore, ListOrder, MemoryStore, RestStore, SqliteStore};

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

fn draft(amount: &str, category: &str, date: &str) -> ExpenseDraft {
    ExpenseForm {
        amount: amount.into(),
        category: category.into(),
        description: format!("{} on {}", category, date),
        date: date.into(),
    }
    .validate(CategoryPolicy::Free)
    .unwrap()
}

#[test]
fn sqlite_insert_and_list_by_date() {
    let conn = setup();
    let mut store = SqliteStore::new(&conn, "u1");
    let a = store.insert("u1", &draft("10.50", "Food", "2024-01-05")).unwrap();
    let b = store.insert("u1", &draft("3", "Transport", "2024-03-01")).unwrap();
    let c = store.insert("u1", &draft("7", "Food", "2024-03-01")).unwrap();
    assert!(a.id < b.id && b.id < c.id);

    let by_date: Vec<i64> = store
        .list(ListOrder::DateDesc)
        .unwrap()
        .iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(by_date, vec![c.id, b.id, a.id]);

    let created: Vec<i64> = store
        .list(ListOrder::Created)
        .unwrap()
        .iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(created, vec![a.id, b.id, c.id]);

    let first = &store.list(ListOrder::Created).unwrap()[0];
    assert_eq!(first.amount.to_string(), "10.50");
    assert_eq!(first.category, Category::Food);
    assert_eq!(first.description, "Food on 2024-01-05");
}

#[test]
fn sqlite_is_scoped_to_owner() {
    let conn = setup();
    let mut mine = SqliteStore::new(&conn, "u1");
    mine.insert("u1", &draft("1", "Food", "2024-01-01")).unwrap();
    let mut theirs = SqliteStore::new(&conn, "u2");
    let other = theirs.insert("u2", &draft("2", "Food", "2024-01-02")).unwrap();

    assert_eq!(mine.list(ListOrder::DateDesc).unwrap().len(), 1);
    assert!(matches!(
        mine.delete(other.id),
        Err(StoreError::NotFound(id)) if id == other.id
    ));
    assert!(matches!(
        mine.update(other.id, &draft("5", "Food", "2024-01-02")),
        Err(StoreError::NotFound(_))
    ));
    assert_eq!(theirs.list(ListOrder::DateDesc).unwrap().len(), 1);
}

#[test]
fn sqlite_refuses_to_insert_for_another_owner() {
    let conn = setup();
    let mut store = SqliteStore::new(&conn, "u1");
    let err = store
        .insert("u2", &draft("4", "Food", "2024-01-01"))
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::WrongOwner { store: ref s, owner: ref o } if s == "u1" && o == "u2"
    ));
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM expenses", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 0);

    let mut ledger = Ledger::new(SqliteStore::new(&conn, "u1"), "u2");
    assert!(ledger
        .add(&ExpenseForm {
            amount: "4".into(),
            category: "Food".into(),
            description: String::new(),
            date: "2024-01-01".into(),
        })
        .is_err());
    assert!(ledger.records().is_empty());
}

#[test]
fn sqlite_update_replaces_every_field() {
    let conn = setup();
    let mut store = SqliteStore::new(&conn, "u1");
    let e = store.insert("u1", &draft("1", "Food", "2024-01-01")).unwrap();
    let u = store
        .update(e.id, &draft("99.99", "Gym", "2024-02-02"))
        .unwrap();
    assert_eq!(u.id, e.id);
    assert_eq!(u.amount.to_string(), "99.99");
    assert_eq!(u.category, Category::Custom("Gym".into()));
    assert_eq!(u.date.to_string(), "2024-02-02");
    assert_eq!(store.list(ListOrder::Created).unwrap(), vec![u]);
}

#[test]
fn sqlite_delete_missing_is_not_found() {
    let conn = setup();
    let mut store = SqliteStore::new(&conn, "u1");
    assert!(matches!(store.delete(7), Err(StoreError::NotFound(7))));
}

#[test]
fn sqlite_rejects_malformed_rows() {
    let conn = setup();
    conn.execute(
        "INSERT INTO expenses(owner, amount, category, description, date) VALUES ('u1','lots','Food','','2024-01-01')",
        [],
    )
    .unwrap();
    let store = SqliteStore::new(&conn, "u1");
    assert!(matches!(
        store.list(ListOrder::DateDesc),
        Err(StoreError::Malformed(_))
    ));
}

#[test]
fn ledger_over_sqlite_reloads_after_mutation() {
    let conn = setup();
    let mut ledger = Ledger::load(SqliteStore::new(&conn, "u1"), "u1").unwrap();
    assert!(ledger.records().is_empty());
    let form = ExpenseForm {
        amount: "12".into(),
        category: "Food".into(),
        description: String::new(),
        date: "2024-04-01".into(),
    };
    let e = ledger.add(&form).unwrap();
    assert_eq!(ledger.records().len(), 1);
    ledger.remove(e.id).unwrap();
    assert!(ledger.records().is_empty());
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM expenses", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn memory_store_assigns_ids_after_seed() {
    let mut seed = MemoryStore::new();
    let e = seed.insert("u1", &draft("1", "Food", "2024-01-01")).unwrap();
    let records = seed.list(ListOrder::Created).unwrap();
    let mut store = MemoryStore::with_records(records);
    let next = store.insert("u1", &draft("2", "Food", "2024-01-02")).unwrap();
    assert_eq!(next.id, e.id + 1);
    assert_eq!(store.len(), 2);
}

#[test]
fn rest_urls_follow_postgrest_layout() {
    let store = RestStore::new(
        reqwest::blocking::Client::new(),
        "https://demo.supabase.co/",
        "anon",
    );
    assert_eq!(
        store.collection_url(),
        "https://demo.supabase.co/rest/v1/expenses"
    );
    assert_eq!(
        store.list_url(ListOrder::DateDesc),
        "https://demo.supabase.co/rest/v1/expenses?select=*&order=date.desc,id.desc"
    );
    assert_eq!(
        store.row_url(12),
        "https://demo.supabase.co/rest/v1/expenses?id=eq.12"
    );
}

#[test]
fn rest_unreachable_backend_is_transport_error() {
    let client = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(2))
        .build()
        .unwrap();
    let store = RestStore::new(client, "http://127.0.0.1:9", "anon");
    assert!(matches!(
        store.list(ListOrder::DateDesc),
        Err(StoreError::Transport(_))
    ));
}
