// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use std::collections::BTreeMap;

use appeal_desk::StatusCounts;
use appeal_desk_audit::AuditEvent;
use appeal_desk_domain::{AppealRecord, AppealStatus, DraftAppeal};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Appeal form contents as sent by the client.
///
/// Every field is optional on the wire so that partially completed forms
/// reach the validator instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppealDraftRequest {
    pub player_name: String,
    pub discord_tag: String,
    pub steam_id: String,
    pub ban_date: String,
    pub ban_reason: String,
    pub appeal_reason: String,
    pub additional_info: String,
    pub acknowledgment: bool,
}

impl From<AppealDraftRequest> for DraftAppeal {
    fn from(request: AppealDraftRequest) -> Self {
        Self {
            player_name: request.player_name,
            discord_tag: request.discord_tag,
            steam_id: request.steam_id,
            ban_date: request.ban_date,
            ban_reason: request.ban_reason,
            appeal_reason: request.appeal_reason,
            additional_info: request.additional_info,
            acknowledgment: request.acknowledgment,
        }
    }
}

/// Result of checking a draft without submitting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateAppealResponse {
    /// True when the draft may be submitted.
    pub valid: bool,
    /// Wire field name to message; empty when valid.
    pub errors: BTreeMap<String, String>,
}

/// Full view of a stored appeal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppealResponse {
    pub id: String,
    pub player_name: String,
    pub discord_tag: String,
    pub steam_id: String,
    pub ban_date: String,
    pub ban_reason: String,
    pub appeal_reason: String,
    pub additional_info: String,
    pub status: AppealStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub submitted_at: OffsetDateTime,
    pub admin_notes: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub reviewed_at: Option<OffsetDateTime>,
}

impl From<&AppealRecord> for AppealResponse {
    fn from(record: &AppealRecord) -> Self {
        Self {
            id: record.id.to_string(),
            player_name: record.player_name.clone(),
            discord_tag: record.discord_tag.clone(),
            steam_id: record.steam_id.clone(),
            ban_date: record.ban_date.clone(),
            ban_reason: record.ban_reason.clone(),
            appeal_reason: record.appeal_reason.clone(),
            additional_info: record.additional_info.clone(),
            status: record.status,
            submitted_at: record.submitted_at,
            admin_notes: record.admin_notes.clone(),
            reviewed_at: record.reviewed_at,
        }
    }
}

/// Confirmation returned to the submitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitAppealResponse {
    /// The id to quote when checking status.
    pub id: String,
    pub message: String,
    pub appeal: AppealResponse,
}

/// Public status lookup entry.
///
/// Carries what a player needs to follow their appeal; the appeal text and
/// Steam ID stay admin-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppealStatusView {
    pub id: String,
    pub player_name: String,
    pub discord_tag: String,
    pub ban_date: String,
    pub ban_reason: String,
    pub status: AppealStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub submitted_at: OffsetDateTime,
    pub admin_notes: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub reviewed_at: Option<OffsetDateTime>,
}

impl From<&AppealRecord> for AppealStatusView {
    fn from(record: &AppealRecord) -> Self {
        Self {
            id: record.id.to_string(),
            player_name: record.player_name.clone(),
            discord_tag: record.discord_tag.clone(),
            ban_date: record.ban_date.clone(),
            ban_reason: record.ban_reason.clone(),
            status: record.status,
            submitted_at: record.submitted_at,
            admin_notes: record.admin_notes.clone(),
            reviewed_at: record.reviewed_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchAppealsResponse {
    pub query: String,
    pub results: Vec<AppealStatusView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCountsResponse {
    pub all: usize,
    pub pending: usize,
    pub approved: usize,
    pub denied: usize,
}

impl From<StatusCounts> for StatusCountsResponse {
    fn from(counts: StatusCounts) -> Self {
        Self {
            all: counts.all,
            pending: counts.pending,
            approved: counts.approved,
            denied: counts.denied,
        }
    }
}

/// Review listing with the counts for every filter tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListAppealsResponse {
    /// The filter that was applied.
    pub filter: String,
    pub counts: StatusCountsResponse,
    pub appeals: Vec<AppealResponse>,
}

/// A reviewer's decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewAppealRequest {
    /// `approved` or `denied`.
    pub decision: String,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEventResponse {
    pub event_id: Option<u64>,
    pub actor_id: String,
    pub actor_type: String,
    pub cause_id: String,
    pub cause_description: String,
    pub action: String,
    pub details: Option<String>,
    pub appeal_id: String,
    pub before: Option<AppealStatus>,
    pub after: AppealStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub recorded_at: OffsetDateTime,
}

impl From<&AuditEvent> for AuditEventResponse {
    fn from(event: &AuditEvent) -> Self {
        Self {
            event_id: event.event_id,
            actor_id: event.actor.id.clone(),
            actor_type: event.actor.actor_type.clone(),
            cause_id: event.cause.id.clone(),
            cause_description: event.cause.description.clone(),
            action: event.action.name.clone(),
            details: event.action.details.clone(),
            appeal_id: event.appeal_id.to_string(),
            before: event.before,
            after: event.after,
            recorded_at: event.recorded_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrailResponse {
    pub events: Vec<AuditEventResponse>,
}
