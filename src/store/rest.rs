// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{ExpenseStore, ListOrder};
use crate::error::StoreError;
use crate::models::{Category, Expense, ExpenseDraft, ExpenseId};
use chrono::NaiveDate;
use reqwest::blocking::{Client, RequestBuilder, Response};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const TABLE: &str = "expenses";

/// PostgREST endpoint of a hosted backend (Supabase layout: `{url}/rest/v1/{table}`).
/// Row-level security on the backend limits every call to the signed-in user.
pub struct RestStore {
    client: Client,
    base_url: String,
    api_key: String,
    access_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RemoteRow {
    id: ExpenseId,
    amount: Decimal,
    category: String,
    #[serde(default)]
    description: Option<String>,
    date: NaiveDate,
}

impl From<RemoteRow> for Expense {
    fn from(r: RemoteRow) -> Self {
        Expense {
            id: r.id,
            amount: r.amount,
            category: Category::from(r.category),
            description: r.description.unwrap_or_default(),
            date: r.date,
        }
    }
}

#[derive(Debug, Serialize)]
struct RemotePayload<'a> {
    amount: Decimal,
    category: &'a str,
    description: &'a str,
    date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<&'a str>,
}

impl<'a> RemotePayload<'a> {
    fn new(draft: &'a ExpenseDraft, owner: Option<&'a str>) -> Self {
        RemotePayload {
            amount: draft.amount,
            category: draft.category.label(),
            description: &draft.description,
            date: draft.date,
            user_id: owner,
        }
    }
}

impl RestStore {
    pub fn new(client: Client, base_url: &str, api_key: &str) -> Self {
        RestStore {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            access_token: None,
        }
    }

    pub fn with_access_token(mut self, token: Option<String>) -> Self {
        self.access_token = token;
        self
    }

    pub fn collection_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, TABLE)
    }

    pub fn list_url(&self, order: ListOrder) -> String {
        let order = match order {
            ListOrder::DateDesc => "date.desc,id.desc",
            ListOrder::Created => "id.asc",
        };
        format!("{}?select=*&order={}", self.collection_url(), order)
    }

    pub fn row_url(&self, id: ExpenseId) -> String {
        format!("{}?id=eq.{}", self.collection_url(), id)
    }

    fn authed(&self, req: RequestBuilder) -> RequestBuilder {
        let bearer = self.access_token.as_deref().unwrap_or(&self.api_key);
        req.header("apikey", &self.api_key)
            .bearer_auth(bearer)
            .header("Prefer", "return=representation")
    }

    fn send(&self, req: RequestBuilder) -> Result<Response, StoreError> {
        let resp = self.authed(req).send()?;
        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().unwrap_or_default();
            log::warn!("backend returned {}: {}", status, message);
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                message,
            });
        }
        Ok(resp)
    }

    fn rows(&self, req: RequestBuilder) -> Result<Vec<Expense>, StoreError> {
        let rows: Vec<RemoteRow> = self.send(req)?.json()?;
        Ok(rows.into_iter().map(Expense::from).collect())
    }
}

impl ExpenseStore for RestStore {
    fn list(&self, order: ListOrder) -> Result<Vec<Expense>, StoreError> {
        let data = self.rows(self.client.get(self.list_url(order)))?;
        log::debug!("rest: listed {} expenses", data.len());
        Ok(data)
    }

    fn insert(&mut self, owner: &str, draft: &ExpenseDraft) -> Result<Expense, StoreError> {
        let body = RemotePayload::new(draft, Some(owner));
        let mut rows = self.rows(self.client.post(self.collection_url()).json(&[body]))?;
        if rows.is_empty() {
            return Err(StoreError::Malformed(
                "insert returned no representation".to_string(),
            ));
        }
        let e = rows.swap_remove(0);
        log::debug!("rest: inserted expense {}", e.id);
        Ok(e)
    }

    fn update(&mut self, id: ExpenseId, draft: &ExpenseDraft) -> Result<Expense, StoreError> {
        let body = RemotePayload::new(draft, None);
        let mut rows = self.rows(self.client.patch(self.row_url(id)).json(&body))?;
        if rows.is_empty() {
            return Err(StoreError::NotFound(id));
        }
        Ok(rows.swap_remove(0))
    }

    fn delete(&mut self, id: ExpenseId) -> Result<(), StoreError> {
        let rows = self.rows(self.client.delete(self.row_url(id)))?;
        if rows.is_empty() {
            return Err(StoreError::NotFound(id));
        }
        log::debug!("rest: deleted expense {}", id);
        Ok(())
    }
}
