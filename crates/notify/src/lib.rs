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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! Outbound staff notifications for new appeals.
//!
//! A submission is only stored after its notification has been accepted, so
//! every gateway reports a definite success or failure for a single attempt.
//! There is no retry and no queue.

mod discord;
mod error;
mod log_only;
mod payload;

#[cfg(test)]
mod tests;

use appeal_desk_domain::DraftAppeal;
use async_trait::async_trait;

pub use discord::{DiscordWebhookGateway, WebhookConfig};
pub use error::NotificationError;
pub use log_only::LogOnlyGateway;
pub use payload::{
    DEFAULT_ADDITIONAL_INFO_LIMIT, DEFAULT_APPEAL_REASON_LIMIT, DEFAULT_COMMUNITY_NAME, Embed,
    EmbedField, EmbedFooter, PayloadLimits, WebhookPayload, build_payload, truncate_chars,
};

/// Channel used to alert staff about a new appeal.
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    /// Announces a validated draft.
    ///
    /// # Errors
    ///
    /// Returns a `NotificationError` if the announcement was not accepted.
    /// Callers must not store the appeal in that case.
    async fn notify(&self, draft: &DraftAppeal) -> Result<(), NotificationError>;
}
