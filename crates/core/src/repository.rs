// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Storage behind the appeal store.
//!
//! The store decides *what* changes; a repository only holds the records.
//! Records are kept newest first and every consumer relies on that order.

use appeal_desk_domain::{AppealId, AppealRecord};

/// Storage operations the appeal store needs.
///
/// Implementations must keep `records()` ordered newest first: `prepend`
/// puts a record at index 0 and `replace` keeps the record's position.
pub trait AppealRepository {
    /// Inserts a record ahead of every existing record.
    fn prepend(&mut self, record: AppealRecord);

    /// Looks up a record by id.
    fn find(&self, id: &AppealId) -> Option<&AppealRecord>;

    /// Overwrites the record with the same id in place.
    ///
    /// Returns `false` if no such record exists.
    fn replace(&mut self, record: AppealRecord) -> bool;

    /// All records, newest first.
    fn records(&self) -> &[AppealRecord];
}

/// Process-lifetime storage in a `Vec`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    records: Vec<AppealRecord>,
}

impl InMemoryRepository {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl AppealRepository for InMemoryRepository {
    fn prepend(&mut self, record: AppealRecord) {
        self.records.insert(0, record);
    }

    fn find(&self, id: &AppealId) -> Option<&AppealRecord> {
        self.records.iter().find(|record| &record.id == id)
    }

    fn replace(&mut self, record: AppealRecord) -> bool {
        match self.records.iter_mut().find(|existing| existing.id == record.id) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    fn records(&self) -> &[AppealRecord] {
        &self.records
    }
}
