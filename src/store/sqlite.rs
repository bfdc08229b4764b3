// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{ExpenseStore, ListOrder};
use crate::error::StoreError;
use crate::models::{Category, Expense, ExpenseDraft, ExpenseId};
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use rust_decimal::Decimal;

/// Expenses kept in the local database, scoped to a single owner.
pub struct SqliteStore<'a> {
    conn: &'a Connection,
    owner: String,
}

impl<'a> SqliteStore<'a> {
    pub fn new(conn: &'a Connection, owner: impl Into<String>) -> Self {
        SqliteStore {
            conn,
            owner: owner.into(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    fn fetch(&self, id: ExpenseId) -> Result<Expense, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, amount, category, description, date FROM expenses WHERE id=?1 AND owner=?2",
        )?;
        let mut rows = stmt.query(params![id, self.owner])?;
        match rows.next()? {
            Some(r) => read_row(r),
            None => Err(StoreError::NotFound(id)),
        }
    }
}

fn read_row(r: &Row<'_>) -> Result<Expense, StoreError> {
    let id: ExpenseId = r.get(0)?;
    let amount_s: String = r.get(1)?;
    let category: String = r.get(2)?;
    let description: String = r.get(3)?;
    let date_s: String = r.get(4)?;
    let amount = amount_s
        .parse::<Decimal>()
        .map_err(|_| StoreError::Malformed(format!("expense {}: amount '{}'", id, amount_s)))?;
    let date = NaiveDate::parse_from_str(&date_s, "%Y-%m-%d")
        .map_err(|_| StoreError::Malformed(format!("expense {}: date '{}'", id, date_s)))?;
    Ok(Expense {
        id,
        amount,
        category: Category::from(category),
        description,
        date,
    })
}

impl ExpenseStore for SqliteStore<'_> {
    fn list(&self, order: ListOrder) -> Result<Vec<Expense>, StoreError> {
        let sql = match order {
            ListOrder::DateDesc => {
                "SELECT id, amount, category, description, date FROM expenses WHERE owner=?1 ORDER BY date DESC, id DESC"
            }
            ListOrder::Created => {
                "SELECT id, amount, category, description, date FROM expenses WHERE owner=?1 ORDER BY id"
            }
        };
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(params![self.owner])?;
        let mut data = Vec::new();
        while let Some(r) = rows.next()? {
            data.push(read_row(r)?);
        }
        log::debug!("sqlite: listed {} expenses for {}", data.len(), self.owner);
        Ok(data)
    }

    fn insert(&mut self, owner: &str, draft: &ExpenseDraft) -> Result<Expense, StoreError> {
        if owner != self.owner {
            return Err(StoreError::WrongOwner {
                store: self.owner.clone(),
                owner: owner.to_string(),
            });
        }
        self.conn.execute(
            "INSERT INTO expenses(owner, amount, category, description, date)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                self.owner,
                draft.amount.to_string(),
                draft.category.label(),
                draft.description,
                draft.date.to_string()
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        log::debug!("sqlite: inserted expense {}", id);
        Ok(Expense::from_draft(id, draft))
    }

    fn update(&mut self, id: ExpenseId, draft: &ExpenseDraft) -> Result<Expense, StoreError> {
        let n = self.conn.execute(
            "UPDATE expenses SET amount=?1, category=?2, description=?3, date=?4
             WHERE id=?5 AND owner=?6",
            params![
                draft.amount.to_string(),
                draft.category.label(),
                draft.description,
                draft.date.to_string(),
                id,
                self.owner
            ],
        )?;
        if n == 0 {
            return Err(StoreError::NotFound(id));
        }
        self.fetch(id)
    }

    fn delete(&mut self, id: ExpenseId) -> Result<(), StoreError> {
        let n = self.conn.execute(
            "DELETE FROM expenses WHERE id=?1 AND owner=?2",
            params![id, self.owner],
        )?;
        if n == 0 {
            return Err(StoreError::NotFound(id));
        }
        log::debug!("sqlite: deleted expense {}", id);
        Ok(())
    }
}
