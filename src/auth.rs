// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::{delete_setting, get_setting, set_setting};
use crate::error::AuthError;
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

pub const MOCK_EMAIL: &str = "demo@spendwise.local";
pub const MOCK_PASSWORD: &str = "spendwise";
pub const MOCK_USER_ID: &str = "local-demo";

const SESSION_KEY: &str = "session";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

pub trait Authenticator {
    fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError>;
}

/// Accepts exactly one hardcoded credential pair.
#[derive(Debug, Default)]
pub struct MockAuth;

impl Authenticator for MockAuth {
    fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        if email.trim().eq_ignore_ascii_case(MOCK_EMAIL) && password == MOCK_PASSWORD {
            Ok(Session {
                user_id: MOCK_USER_ID.to_string(),
                email: MOCK_EMAIL.to_string(),
                access_token: None,
            })
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

/// Password grant against the hosted backend's auth endpoint.
pub struct RemoteAuth {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    user: TokenUser,
}

#[derive(Debug, Deserialize)]
struct TokenUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

impl RemoteAuth {
    pub fn new(client: Client, base_url: &str, api_key: &str) -> Self {
        RemoteAuth {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub fn token_url(&self) -> String {
        format!("{}/auth/v1/token?grant_type=password", self.base_url)
    }
}

impl Authenticator for RemoteAuth {
    fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let resp = self
            .client
            .post(self.token_url())
            .header("apikey", &self.api_key)
            .json(&serde_json::json!({ "email": email.trim(), "password": password }))
            .send()?;
        let status = resp.status();
        if status.as_u16() == 400 || status.as_u16() == 401 {
            return Err(AuthError::InvalidCredentials);
        }
        if !status.is_success() {
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                message: resp.text().unwrap_or_default(),
            });
        }
        let tok: TokenResponse = resp.json()?;
        Ok(Session {
            user_id: tok.user.id,
            email: tok.user.email.unwrap_or_else(|| email.trim().to_string()),
            access_token: Some(tok.access_token),
        })
    }
}

pub fn load_session(conn: &Connection) -> Result<Option<Session>> {
    match get_setting(conn, SESSION_KEY)? {
        Some(raw) => {
            let s = serde_json::from_str(&raw).context("Stored session is corrupt; log in again")?;
            Ok(Some(s))
        }
        None => Ok(None),
    }
}

pub fn save_session(conn: &Connection, session: &Session) -> Result<()> {
    set_setting(conn, SESSION_KEY, &serde_json::to_string(session)?)
}

pub fn clear_session(conn: &Connection) -> Result<()> {
    delete_setting(conn, SESSION_KEY)
}

pub fn require_session(conn: &Connection) -> Result<Session> {
    Ok(load_session(conn)?.ok_or(AuthError::NotLoggedIn)?)
}
