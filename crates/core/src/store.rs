// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use appeal_desk_domain::{
    AppealId, AppealRecord, AppealStatus, Decision, DraftAppeal, StatusFilter,
};
use time::OffsetDateTime;

use crate::clock::{Clock, IdGenerator, SystemClock, UuidGenerator};
use crate::error::CoreError;
use crate::repository::{AppealRepository, InMemoryRepository};

/// Number of appeals per status, as shown on the review filter tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub all: usize,
    pub pending: usize,
    pub approved: usize,
    pub denied: usize,
}

impl StatusCounts {
    /// The count shown next to a given filter.
    #[must_use]
    pub const fn for_filter(&self, filter: StatusFilter) -> usize {
        match filter {
            StatusFilter::All => self.all,
            StatusFilter::Only(AppealStatus::Pending) => self.pending,
            StatusFilter::Only(AppealStatus::Approved) => self.approved,
            StatusFilter::Only(AppealStatus::Denied) => self.denied,
        }
    }
}

/// Owner of the appeal collection.
///
/// The store is the only component that mutates appeals, and it does so
/// through exactly two operations: [`AppealStore::create`] and
/// [`AppealStore::transition`]. Everything else receives cloned snapshots.
pub struct AppealStore<R = InMemoryRepository> {
    repository: R,
    clock: Box<dyn Clock + Send + Sync>,
    ids: Box<dyn IdGenerator + Send + Sync>,
}

impl AppealStore<InMemoryRepository> {
    /// An empty in-memory store using wall-clock time and random ids.
    #[must_use]
    pub fn new() -> Self {
        Self::with_collaborators(Box::new(SystemClock), Box::new(UuidGenerator))
    }

    /// An empty in-memory store with injected time and id sources.
    #[must_use]
    pub fn with_collaborators(
        clock: Box<dyn Clock + Send + Sync>,
        ids: Box<dyn IdGenerator + Send + Sync>,
    ) -> Self {
        Self::with_repository(InMemoryRepository::new(), clock, ids)
    }
}

impl Default for AppealStore<InMemoryRepository> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: AppealRepository> AppealStore<R> {
    /// A store backed by an arbitrary repository.
    #[must_use]
    pub fn with_repository(
        repository: R,
        clock: Box<dyn Clock + Send + Sync>,
        ids: Box<dyn IdGenerator + Send + Sync>,
    ) -> Self {
        Self {
            repository,
            clock,
            ids,
        }
    }

    /// Stores a new pending appeal at the front of the collection.
    ///
    /// The draft is copied verbatim. It must already have passed
    /// validation; the store does not re-check it.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DuplicateId` if the id generator hands out an id
    /// that is already stored. The collection is left unchanged.
    pub fn create(&mut self, draft: DraftAppeal) -> Result<AppealRecord, CoreError> {
        let id: AppealId = self.ids.next_id();
        if self.repository.find(&id).is_some() {
            return Err(CoreError::DuplicateId { id });
        }

        let record: AppealRecord = AppealRecord::from_draft(id, draft, self.clock.now());
        self.repository.prepend(record.clone());
        Ok(record)
    }

    /// Applies a reviewer's decision to a pending appeal.
    ///
    /// Sets the status, the reviewer notes (blank notes are stored as
    /// absent) and the review time. No other field and no other record
    /// changes.
    ///
    /// # Errors
    ///
    /// - `CoreError::NotFound` if no appeal has this id
    /// - `CoreError::InvalidTransition` if the appeal was already reviewed
    ///
    /// On error the collection is unchanged.
    pub fn transition(
        &mut self,
        id: &AppealId,
        decision: Decision,
        notes: Option<String>,
    ) -> Result<AppealRecord, CoreError> {
        let current: &AppealRecord = self
            .repository
            .find(id)
            .ok_or_else(|| CoreError::NotFound { id: id.clone() })?;

        let target: AppealStatus = decision.status();
        current
            .status
            .validate_transition(target)
            .map_err(|_| CoreError::InvalidTransition {
                id: id.clone(),
                from: current.status,
                to: target,
            })?;

        // A clock running behind must not put the review before the submission.
        let now: OffsetDateTime = self.clock.now();
        let reviewed_at: OffsetDateTime = now.max(current.submitted_at);

        let mut updated: AppealRecord = current.clone();
        updated.status = target;
        updated.admin_notes = notes.filter(|n| !n.trim().is_empty());
        updated.reviewed_at = Some(reviewed_at);

        if !self.repository.replace(updated.clone()) {
            return Err(CoreError::NotFound { id: id.clone() });
        }
        Ok(updated)
    }

    /// Appeals passing `filter`, newest first.
    #[must_use]
    pub fn list(&self, filter: StatusFilter) -> Vec<AppealRecord> {
        self.repository
            .records()
            .iter()
            .filter(|record| filter.matches(record.status))
            .cloned()
            .collect()
    }

    /// Appeals whose player name or Discord tag contains `query`
    /// (case-insensitive), or whose id contains it. Newest first.
    ///
    /// Leading and trailing whitespace is trimmed from `query` before
    /// matching, so `"john "` matches `"John_Smith"`. A blank query returns
    /// every appeal.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<AppealRecord> {
        let needle: String = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.list(StatusFilter::All);
        }
        self.repository
            .records()
            .iter()
            .filter(|record| record.matches_query(&needle))
            .cloned()
            .collect()
    }

    /// A single appeal by id.
    #[must_use]
    pub fn get(&self, id: &AppealId) -> Option<AppealRecord> {
        self.repository.find(id).cloned()
    }

    #[must_use]
    pub fn counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for record in self.repository.records() {
            counts.all += 1;
            match record.status {
                AppealStatus::Pending => counts.pending += 1,
                AppealStatus::Approved => counts.approved += 1,
                AppealStatus::Denied => counts.denied += 1,
            }
        }
        counts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.repository.records().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.repository.records().is_empty()
    }
}

impl<R> std::fmt::Debug for AppealStore<R>
where
    R: AppealRepository,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppealStore")
            .field("appeals", &self.repository.records().len())
            .finish_non_exhaustive()
    }
}
