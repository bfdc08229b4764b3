// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! In-memory snapshot of the signed-in user's expenses.
//!
//! The ledger owns the snapshot and is the only thing that mutates it. Forms
//! are validated before the store is touched, and the snapshot is only
//! replaced after a store round trip succeeds.

use crate::error::LedgerError;
use crate::form::{CategoryPolicy, ExpenseForm};
use crate::models::{Expense, ExpenseId};
use crate::store::{ExpenseStore, ListOrder};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncMode {
    /// Reload the full list from the store after every mutation.
    #[default]
    Reload,
    /// Patch the snapshot with the store's answer instead of reloading.
    Local,
}

pub struct Ledger<S> {
    store: S,
    owner: String,
    mode: SyncMode,
    policy: CategoryPolicy,
    records: Vec<Expense>,
}

impl<S: ExpenseStore> Ledger<S> {
    pub fn new(store: S, owner: impl Into<String>) -> Self {
        Ledger {
            store,
            owner: owner.into(),
            mode: SyncMode::Reload,
            policy: CategoryPolicy::Fixed,
            records: Vec::new(),
        }
    }

    pub fn with_mode(mut self, mode: SyncMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_policy(mut self, policy: CategoryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Build a ledger and fetch the initial snapshot.
    pub fn load(store: S, owner: impl Into<String>) -> Result<Self, LedgerError> {
        let mut ledger = Ledger::new(store, owner);
        ledger.reload()?;
        Ok(ledger)
    }

    pub fn records(&self) -> &[Expense] {
        &self.records
    }

    pub fn find(&self, id: ExpenseId) -> Option<&Expense> {
        self.records.iter().find(|e| e.id == id)
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn mode(&self) -> SyncMode {
        self.mode
    }

    pub fn policy(&self) -> CategoryPolicy {
        self.policy
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn reload(&mut self) -> Result<(), LedgerError> {
        let fresh = self.store.list(ListOrder::DateDesc)?;
        log::info!("snapshot replaced: {} expenses", fresh.len());
        self.records = fresh;
        Ok(())
    }

    /// Bring the snapshot in line after a mutation the store accepted.
    ///
    /// In `Reload` mode a failed reload does not fail the mutation: the
    /// change is already persisted, so the snapshot is patched locally.
    fn sync(&mut self, patch: impl FnOnce(&mut Vec<Expense>)) {
        if self.mode == SyncMode::Reload {
            match self.reload() {
                Ok(()) => return,
                Err(e) => log::warn!("reload after save failed, patching snapshot: {}", e),
            }
        }
        patch(&mut self.records);
    }

    pub fn add(&mut self, form: &ExpenseForm) -> Result<Expense, LedgerError> {
        let draft = form.validate(self.policy).inspect_err(|e| {
            log::warn!("add rejected: {}", e);
        })?;
        let created = self.store.insert(&self.owner, &draft)?;
        let row = created.clone();
        self.sync(|records| records.push(row));
        Ok(created)
    }

    /// Replace every field of `id`; its identifier and the position of other
    /// records are untouched.
    pub fn edit(&mut self, id: ExpenseId, form: &ExpenseForm) -> Result<Expense, LedgerError> {
        let draft = form.validate(self.policy).inspect_err(|e| {
            log::warn!("edit of {} rejected: {}", id, e);
        })?;
        let updated = self.store.update(id, &draft)?;
        let row = updated.clone();
        self.sync(|records| {
            if let Some(slot) = records.iter_mut().find(|e| e.id == id) {
                *slot = row;
            }
        });
        Ok(updated)
    }

    pub fn remove(&mut self, id: ExpenseId) -> Result<(), LedgerError> {
        self.store.delete(id)?;
        self.sync(|records| records.retain(|e| e.id != id));
        Ok(())
    }
}
