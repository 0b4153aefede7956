// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Discord webhook message body.

use appeal_desk_domain::DraftAppeal;
use serde::Serialize;
use time::OffsetDateTime;

/// Embed accent colour.
pub const EMBED_COLOR: u32 = 0x001e_40af;

pub const DEFAULT_APPEAL_REASON_LIMIT: usize = 1000;
pub const DEFAULT_ADDITIONAL_INFO_LIMIT: usize = 500;
pub const DEFAULT_COMMUNITY_NAME: &str = "Ban Appeal System";

const TRUNCATION_SUFFIX: &str = "...";

/// Character limits applied to free-text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadLimits {
    pub appeal_reason: usize,
    pub additional_info: usize,
}

impl Default for PayloadLimits {
    fn default() -> Self {
        Self {
            appeal_reason: DEFAULT_APPEAL_REASON_LIMIT,
            additional_info: DEFAULT_ADDITIONAL_INFO_LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookPayload {
    pub content: String,
    pub embeds: Vec<Embed>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Embed {
    pub title: String,
    pub color: u32,
    pub fields: Vec<EmbedField>,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub footer: EmbedFooter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedField {
    fn block(name: &str, value: String) -> Self {
        Self {
            name: name.to_string(),
            value,
            inline: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedFooter {
    pub text: String,
}

/// Cuts `text` to at most `limit` characters, appending `...` when cut.
///
/// Counts characters, not bytes, so multi-byte text is never split.
#[must_use]
pub fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_index, _)) => format!("{}{TRUNCATION_SUFFIX}", &text[..byte_index]),
        None => text.to_string(),
    }
}

/// Builds the webhook message announcing `draft`.
#[must_use]
pub fn build_payload(
    draft: &DraftAppeal,
    community_name: &str,
    limits: PayloadLimits,
    generated_at: OffsetDateTime,
) -> WebhookPayload {
    let mut fields = vec![
        EmbedField::block(
            "Player Information",
            format!(
                "**Name:** {}\n**Discord:** {}\n**Steam ID:** {}",
                draft.player_name, draft.discord_tag, draft.steam_id
            ),
        ),
        EmbedField::block(
            "Ban Details",
            format!(
                "**Date:** {}\n**Reason:** {}",
                draft.ban_date, draft.ban_reason
            ),
        ),
        EmbedField::block(
            "Appeal Reason",
            truncate_chars(&draft.appeal_reason, limits.appeal_reason),
        ),
    ];

    if !draft.additional_info.is_empty() {
        fields.push(EmbedField::block(
            "Additional Information",
            truncate_chars(&draft.additional_info, limits.additional_info),
        ));
    }

    WebhookPayload {
        content: format!("@here New ban appeal from **{}**", draft.player_name),
        embeds: vec![Embed {
            title: String::from("New Ban Appeal Submitted"),
            color: EMBED_COLOR,
            fields,
            timestamp: generated_at,
            footer: EmbedFooter {
                text: community_name.to_string(),
            },
        }],
    }
}
