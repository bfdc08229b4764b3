// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Persistence collaborators behind a narrow list/insert/update/delete seam.

pub mod memory;
pub mod rest;
pub mod sqlite;

pub use memory::MemoryStore;
pub use rest::RestStore;
pub use sqlite::SqliteStore;

use crate::error::StoreError;
use crate::models::{Expense, ExpenseDraft, ExpenseId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListOrder {
    /// Newest date first, ties broken by id descending.
    #[default]
    DateDesc,
    /// Creation order (id ascending).
    Created,
}

pub trait ExpenseStore {
    fn list(&self, order: ListOrder) -> Result<Vec<Expense>, StoreError>;

    fn insert(&mut self, owner: &str, draft: &ExpenseDraft) -> Result<Expense, StoreError>;

    /// Replace every field of `id` with `draft`.
    fn update(&mut self, id: ExpenseId, draft: &ExpenseDraft) -> Result<Expense, StoreError>;

    fn delete(&mut self, id: ExpenseId) -> Result<(), StoreError>;
}

impl<S: ExpenseStore + ?Sized> ExpenseStore for Box<S> {
    fn list(&self, order: ListOrder) -> Result<Vec<Expense>, StoreError> {
        (**self).list(order)
    }

    fn insert(&mut self, owner: &str, draft: &ExpenseDraft) -> Result<Expense, StoreError> {
        (**self).insert(owner, draft)
    }

    fn update(&mut self, id: ExpenseId, draft: &ExpenseDraft) -> Result<Expense, StoreError> {
        (**self).update(id, draft)
    }

    fn delete(&mut self, id: ExpenseId) -> Result<(), StoreError> {
        (**self).delete(id)
    }
}

pub(crate) fn sort_expenses(items: &mut [Expense], order: ListOrder) {
    match order {
        ListOrder::DateDesc => items.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id))),
        ListOrder::Created => items.sort_by_key(|e| e.id),
    }
}
