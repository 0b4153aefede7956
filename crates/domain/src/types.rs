// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::status::AppealStatus;
use time::OffsetDateTime;

/// Opaque identifier assigned to an appeal when it is stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AppealId(String);

impl AppealId {
    /// Wraps an identifier value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AppealId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Field values of an appeal before it has been validated and stored.
///
/// Every field has an empty default so partially completed forms can be
/// represented and validated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DraftAppeal {
    /// In-game player name.
    pub player_name: String,
    /// Discord handle, either `name#1234` or `@name`.
    pub discord_tag: String,
    /// Steam ID64 of the banned account.
    pub steam_id: String,
    /// Date of the ban in `YYYY-MM-DD` form.
    pub ban_date: String,
    /// Reason given by staff for the ban.
    pub ban_reason: String,
    /// The player's case for lifting the ban.
    pub appeal_reason: String,
    /// Optional supporting context (links, witnesses).
    pub additional_info: String,
    /// Whether the player accepted the rules and appeal policy.
    pub acknowledgment: bool,
}

/// A stored appeal.
///
/// Records are created by the store from a validated draft and mutated at
/// most once, by a reviewer's decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppealRecord {
    /// Unique identifier, immutable after creation.
    pub id: AppealId,
    /// In-game player name.
    pub player_name: String,
    /// Discord handle.
    pub discord_tag: String,
    /// Steam ID64.
    pub steam_id: String,
    /// Date of the ban.
    pub ban_date: String,
    /// Reason given for the ban.
    pub ban_reason: String,
    /// The player's appeal text.
    pub appeal_reason: String,
    /// Optional supporting context; may be empty.
    pub additional_info: String,
    /// Always `true` for stored records.
    pub acknowledgment: bool,
    /// Current review status.
    pub status: AppealStatus,
    /// When the appeal was stored.
    pub submitted_at: OffsetDateTime,
    /// Reviewer notes; only ever set together with a decision.
    pub admin_notes: Option<String>,
    /// When the decision was made; `None` while pending.
    pub reviewed_at: Option<OffsetDateTime>,
}

impl AppealRecord {
    /// Builds a pending record from a draft, copying every field verbatim.
    #[must_use]
    pub fn from_draft(id: AppealId, draft: DraftAppeal, submitted_at: OffsetDateTime) -> Self {
        Self {
            id,
            player_name: draft.player_name,
            discord_tag: draft.discord_tag,
            steam_id: draft.steam_id,
            ban_date: draft.ban_date,
            ban_reason: draft.ban_reason,
            appeal_reason: draft.appeal_reason,
            additional_info: draft.additional_info,
            acknowledgment: draft.acknowledgment,
            status: AppealStatus::Pending,
            submitted_at,
            admin_notes: None,
            reviewed_at: None,
        }
    }

    /// Returns true while no reviewer has decided this appeal.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == AppealStatus::Pending
    }

    /// Case-insensitive match on player name or Discord tag, substring match on id.
    ///
    /// `needle` must already be lower-cased.
    #[must_use]
    pub fn matches_query(&self, needle: &str) -> bool {
        self.player_name.to_lowercase().contains(needle)
            || self.discord_tag.to_lowercase().contains(needle)
            || self.id.as_str().to_lowercase().contains(needle)
    }
}
