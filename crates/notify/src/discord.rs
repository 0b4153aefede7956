// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::time::Duration;

use appeal_desk_domain::DraftAppeal;
use async_trait::async_trait;
use time::OffsetDateTime;
use tracing::{debug, error, warn};

use crate::payload::{DEFAULT_COMMUNITY_NAME, PayloadLimits, WebhookPayload, build_payload};
use crate::{NotificationError, NotificationGateway};

/// Settings for [`DiscordWebhookGateway`].
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    /// Full webhook URL including its token.
    pub url: String,
    /// Shown in the embed footer.
    pub community_name: String,
    pub limits: PayloadLimits,
    pub timeout: Duration,
}

impl WebhookConfig {
    /// A config with default limits, footer and a ten second timeout.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            community_name: DEFAULT_COMMUNITY_NAME.to_string(),
            limits: PayloadLimits::default(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Posts each new appeal to a Discord channel webhook.
#[derive(Debug, Clone)]
pub struct DiscordWebhookGateway {
    client: reqwest::Client,
    config: WebhookConfig,
}

impl DiscordWebhookGateway {
    /// # Errors
    ///
    /// Returns `NotificationError::Configuration` if the HTTP client cannot
    /// be built.
    pub fn new(config: WebhookConfig) -> Result<Self, NotificationError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| NotificationError::Configuration(e.to_string()))?;
        Ok(Self { client, config })
    }

    /// The message that would be posted for `draft` right now.
    #[must_use]
    pub fn payload_for(&self, draft: &DraftAppeal) -> WebhookPayload {
        build_payload(
            draft,
            &self.config.community_name,
            self.config.limits,
            OffsetDateTime::now_utc(),
        )
    }
}

#[async_trait]
impl NotificationGateway for DiscordWebhookGateway {
    async fn notify(&self, draft: &DraftAppeal) -> Result<(), NotificationError> {
        let payload: WebhookPayload = self.payload_for(draft);

        let response = self
            .client
            .post(&self.config.url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Webhook request failed");
                NotificationError::Transport(e.to_string())
            })?;

        let status = response.status();
        if status.is_success() {
            debug!(status = status.as_u16(), player = %draft.player_name, "Webhook accepted appeal notification");
            Ok(())
        } else {
            warn!(status = status.as_u16(), player = %draft.player_name, "Webhook rejected appeal notification");
            Err(NotificationError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}
