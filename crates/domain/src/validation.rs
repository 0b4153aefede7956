// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::DraftAppeal;
use std::collections::BTreeMap;
use time::Date;
use time::macros::format_description;

/// Minimum length of an appeal reason, in characters.
pub const MIN_APPEAL_REASON_CHARS: usize = 50;

/// Draft fields that carry validation rules.
///
/// Ordered the way the submission form presents them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AppealField {
    PlayerName,
    DiscordTag,
    SteamId,
    BanDate,
    BanReason,
    AppealReason,
    Acknowledgment,
}

impl AppealField {
    /// The field name used on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PlayerName => "playerName",
            Self::DiscordTag => "discordTag",
            Self::SteamId => "steamId",
            Self::BanDate => "banDate",
            Self::BanReason => "banReason",
            Self::AppealReason => "appealReason",
            Self::Acknowledgment => "acknowledgment",
        }
    }
}

impl std::fmt::Display for AppealField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Field-level validation failures for a draft.
///
/// An empty set means the draft may be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    errors: BTreeMap<AppealField, String>,
}

impl ValidationErrors {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    fn insert(&mut self, field: AppealField, message: &str) {
        self.errors.insert(field, message.to_string());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The message recorded for `field`, if it failed.
    #[must_use]
    pub fn get(&self, field: AppealField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// The failing fields in form order.
    #[must_use]
    pub fn fields(&self) -> Vec<AppealField> {
        self.errors.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (AppealField, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    /// Converts into a map keyed by wire field name.
    #[must_use]
    pub fn to_wire_map(&self) -> BTreeMap<String, String> {
        self.errors
            .iter()
            .map(|(field, msg)| (field.as_str().to_string(), msg.clone()))
            .collect()
    }
}

/// Parses a ban date in `YYYY-MM-DD` form.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the value is not a calendar date.
pub fn parse_ban_date(value: &str) -> Result<Date, DomainError> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(value.trim(), &format).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Validates a draft appeal against every field rule.
///
/// Rules are independent and all of them run, so the caller sees every
/// offending field at once. This function is pure and never panics on a
/// partially filled draft.
#[must_use]
pub fn validate_draft(draft: &DraftAppeal) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if draft.player_name.trim().is_empty() {
        errors.insert(AppealField::PlayerName, "Player name is required");
    }

    if draft.discord_tag.trim().is_empty() {
        errors.insert(AppealField::DiscordTag, "Discord tag is required");
    } else if !draft.discord_tag.contains('#') && !draft.discord_tag.contains('@') {
        errors.insert(
            AppealField::DiscordTag,
            "Please provide a valid Discord tag (e.g., username#1234 or @username)",
        );
    }

    if draft.steam_id.trim().is_empty() {
        errors.insert(AppealField::SteamId, "Steam ID is required");
    }

    if draft.ban_date.is_empty() {
        errors.insert(AppealField::BanDate, "Ban date is required");
    } else if parse_ban_date(&draft.ban_date).is_err() {
        errors.insert(
            AppealField::BanDate,
            "Ban date must be a valid date (YYYY-MM-DD)",
        );
    }

    if draft.ban_reason.trim().is_empty() {
        errors.insert(AppealField::BanReason, "Ban reason is required");
    }

    // Length is counted on the raw text; only the emptiness check trims.
    if draft.appeal_reason.trim().is_empty() {
        errors.insert(AppealField::AppealReason, "Appeal reason is required");
    } else if draft.appeal_reason.chars().count() < MIN_APPEAL_REASON_CHARS {
        errors.insert(
            AppealField::AppealReason,
            "Appeal reason must be at least 50 characters",
        );
    }

    if !draft.acknowledgment {
        errors.insert(AppealField::Acknowledgment, "You must acknowledge the terms");
    }

    errors
}
