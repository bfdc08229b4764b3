// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::form::CategoryPolicy;
use anyhow::{bail, Result};
use rusqlite::{params, Connection, OptionalExtension};
use serde::Serialize;

pub const ENV_URL: &str = "SPENDWISE_URL";
pub const ENV_API_KEY: &str = "SPENDWISE_API_KEY";

pub const KEYS: [&str; 5] = ["backend", "remote_url", "api_key", "currency", "categories"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Expenses in the local database, mock sign-in.
    #[default]
    Local,
    /// Expenses and sign-in delegated to the hosted backend.
    Remote,
}

impl Backend {
    pub fn parse(s: &str) -> Result<Backend> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(Backend::Local),
            "remote" => Ok(Backend::Remote),
            other => bail!("Unknown backend '{}' (use local|remote)", other),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    pub backend: Backend,
    pub remote_url: Option<String>,
    pub api_key: Option<String>,
    pub currency: String,
    pub categories: CategoryPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            backend: Backend::Local,
            remote_url: None,
            api_key: None,
            currency: "USD".to_string(),
            categories: CategoryPolicy::Fixed,
        }
    }
}

impl Settings {
    /// Stored settings, with `SPENDWISE_URL` / `SPENDWISE_API_KEY` taking precedence.
    pub fn load(conn: &Connection) -> Result<Settings> {
        let mut s = Settings::default();
        if let Some(v) = get_setting(conn, "backend")? {
            s.backend = Backend::parse(&v)?;
        }
        s.remote_url = env_or(ENV_URL, get_setting(conn, "remote_url")?);
        s.api_key = env_or(ENV_API_KEY, get_setting(conn, "api_key")?);
        if let Some(v) = get_setting(conn, "currency")? {
            s.currency = v;
        }
        if let Some(v) = get_setting(conn, "categories")? {
            s.categories = parse_policy(&v)?;
        }
        Ok(s)
    }

    /// Validate and persist one key.
    pub fn set(conn: &Connection, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        let stored = match key {
            "backend" => {
                Backend::parse(value)?;
                value.to_lowercase()
            }
            "remote_url" => {
                if !(value.starts_with("http://") || value.starts_with("https://")) {
                    bail!("remote_url must start with http:// or https://");
                }
                value.trim_end_matches('/').to_string()
            }
            "api_key" => value.to_string(),
            "currency" => {
                if value.len() != 3 || !value.chars().all(|c| c.is_ascii_alphabetic()) {
                    bail!("Invalid currency '{}', expected a 3-letter code", value);
                }
                value.to_uppercase()
            }
            "categories" => {
                parse_policy(value)?;
                value.to_lowercase()
            }
            other => bail!("Unknown setting '{}' (known: {})", other, KEYS.join(", ")),
        };
        set_setting(conn, key, &stored)
    }

    pub fn remote(&self) -> Option<(&str, &str)> {
        match (&self.remote_url, &self.api_key) {
            (Some(u), Some(k)) if !u.is_empty() && !k.is_empty() => Some((u.as_str(), k.as_str())),
            _ => None,
        }
    }
}

fn parse_policy(s: &str) -> Result<CategoryPolicy> {
    match s.trim().to_lowercase().as_str() {
        "fixed" => Ok(CategoryPolicy::Fixed),
        "free" => Ok(CategoryPolicy::Free),
        other => bail!("Unknown category mode '{}' (use fixed|free)", other),
    }
}

fn env_or(var: &str, stored: Option<String>) -> Option<String> {
    std::env::var(var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or(stored)
}

pub fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>> {
    let v: Option<String> = conn
        .query_row(
            "SELECT value FROM settings WHERE key=?1",
            params![key],
            |r| r.get(0),
        )
        .optional()?;
    Ok(v)
}

pub fn set_setting(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES(?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![key, value],
    )?;
    Ok(())
}

pub fn delete_setting(conn: &Connection, key: &str) -> Result<()> {
    conn.execute("DELETE FROM settings WHERE key=?1", params![key])?;
    Ok(())
}
