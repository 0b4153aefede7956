// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use appeal_desk_domain::{AppealId, AppealStatus};
use time::OffsetDateTime;

#[cfg(test)]
mod tests;

/// Represents the entity performing an action.
///
/// For submissions this is the anonymous public submitter; for decisions it
/// is the authenticated reviewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The type of actor (e.g., "public", "admin").
    pub actor_type: String,
}

impl Actor {
    /// Creates a new Actor.
    #[must_use]
    pub const fn new(id: String, actor_type: String) -> Self {
        Self { id, actor_type }
    }

    /// The actor recorded for appeals arriving through the public form.
    #[must_use]
    pub fn public_submitter() -> Self {
        Self::new(String::from("public"), String::from("public"))
    }
}

/// Represents the reason or trigger for an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cause {
    /// A unique identifier for this cause (e.g., request ID).
    pub id: String,
    /// A description of the cause.
    pub description: String,
}

impl Cause {
    #[must_use]
    pub const fn new(id: String, description: String) -> Self {
        Self { id, description }
    }
}

/// Represents the specific action performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// The name of the action (e.g., "`SubmitAppeal`", "`ReviewAppeal`").
    pub name: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
}

impl Action {
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// An immutable record of one change to the appeal collection.
///
/// `before` is `None` for a submission, since the appeal did not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    /// Sequence number, assigned when the event enters an [`AuditLog`].
    pub event_id: Option<u64>,
    /// The actor who initiated this change.
    pub actor: Actor,
    /// The cause or reason for this change.
    pub cause: Cause,
    /// The action that was performed.
    pub action: Action,
    /// The appeal this change applies to.
    pub appeal_id: AppealId,
    /// Status before the change.
    pub before: Option<AppealStatus>,
    /// Status after the change.
    pub after: AppealStatus,
    /// When the change happened.
    pub recorded_at: OffsetDateTime,
}

impl AuditEvent {
    /// Creates a new `AuditEvent` with no sequence number.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        actor: Actor,
        cause: Cause,
        action: Action,
        appeal_id: AppealId,
        before: Option<AppealStatus>,
        after: AppealStatus,
        recorded_at: OffsetDateTime,
    ) -> Self {
        Self {
            event_id: None,
            actor,
            cause,
            action,
            appeal_id,
            before,
            after,
            recorded_at,
        }
    }
}

/// Append-only, in-memory audit trail.
#[derive(Debug, Clone, Default)]
pub struct AuditLog {
    events: Vec<AuditEvent>,
}

impl AuditLog {
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Appends an event and returns the sequence number it was given.
    pub fn record(&mut self, mut event: AuditEvent) -> u64 {
        let event_id: u64 = self.events.len() as u64 + 1;
        event.event_id = Some(event_id);
        self.events.push(event);
        event_id
    }

    /// All events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[AuditEvent] {
        &self.events
    }

    /// Events for a single appeal, oldest first.
    #[must_use]
    pub fn for_appeal(&self, appeal_id: &AppealId) -> Vec<AuditEvent> {
        self.events
            .iter()
            .filter(|event| &event.appeal_id == appeal_id)
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
