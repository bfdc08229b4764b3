// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::ExpenseId;
use thiserror::Error;

/// Form problems caught before any store call is attempted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("Invalid amount '{0}'")]
    InvalidAmount(String),
    #[error("Amount must not be negative (got {0})")]
    NegativeAmount(String),
    #[error("Amount {0} exceeds the maximum of {max}", max = crate::form::MAX_AMOUNT)]
    AmountTooLarge(String),
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Unknown category '{0}'")]
    UnknownCategory(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Expense {0} not found")]
    NotFound(ExpenseId),
    #[error("Backend rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("Malformed record: {0}")]
    Malformed(String),
    #[error("Store belongs to '{store}', cannot write for '{owner}'")]
    WrongOwner { store: String, owner: String },
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => StoreError::Rejected {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None => StoreError::Transport(err.to_string()),
        }
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Not logged in; run `spendwise auth login`")]
    NotLoggedIn,
    #[error("Remote backend is not configured (set remote_url and api_key)")]
    NotConfigured,
    #[error("Auth service rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
