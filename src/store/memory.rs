// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{sort_expenses, ExpenseStore, ListOrder};
use crate::error::StoreError;
use crate::models::{Expense, ExpenseDraft, ExpenseId};
use std::cell::RefCell;

/// Process-local store with sequential ids. Nothing survives the process.
#[derive(Debug)]
pub struct MemoryStore {
    items: Vec<Expense>,
    next_id: ExpenseId,
    fail_next: RefCell<Option<String>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            items: Vec::new(),
            next_id: 1,
            fail_next: RefCell::new(None),
        }
    }

    pub fn with_records(items: Vec<Expense>) -> Self {
        let next_id = items.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        MemoryStore {
            items,
            next_id,
            fail_next: RefCell::new(None),
        }
    }

    /// Make the next call fail with a transport error.
    pub fn fail_next(&mut self, message: impl Into<String>) {
        *self.fail_next.get_mut() = Some(message.into());
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn check(&self) -> Result<(), StoreError> {
        match self.fail_next.borrow_mut().take() {
            Some(msg) => Err(StoreError::Transport(msg)),
            None => Ok(()),
        }
    }
}

impl ExpenseStore for MemoryStore {
    fn list(&self, order: ListOrder) -> Result<Vec<Expense>, StoreError> {
        self.check()?;
        let mut out = self.items.clone();
        sort_expenses(&mut out, order);
        Ok(out)
    }

    fn insert(&mut self, _owner: &str, draft: &ExpenseDraft) -> Result<Expense, StoreError> {
        self.check()?;
        let e = Expense::from_draft(self.next_id, draft);
        self.next_id += 1;
        self.items.push(e.clone());
        Ok(e)
    }

    fn update(&mut self, id: ExpenseId, draft: &ExpenseDraft) -> Result<Expense, StoreError> {
        self.check()?;
        let slot = self
            .items
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(StoreError::NotFound(id))?;
        *slot = Expense::from_draft(id, draft);
        Ok(slot.clone())
    }

    fn delete(&mut self, id: ExpenseId) -> Result<(), StoreError> {
        self.check()?;
        let before = self.items.len();
        self.items.retain(|e| e.id != id);
        if self.items.len() == before {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}
