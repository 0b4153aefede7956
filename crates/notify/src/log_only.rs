// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use appeal_desk_domain::DraftAppeal;
use async_trait::async_trait;
use tracing::info;

use crate::{NotificationError, NotificationGateway};

/// Gateway used when no webhook is configured. Writes the summary to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogOnlyGateway;

#[async_trait]
impl NotificationGateway for LogOnlyGateway {
    async fn notify(&self, draft: &DraftAppeal) -> Result<(), NotificationError> {
        info!(
            player = %draft.player_name,
            discord = %draft.discord_tag,
            steam_id = %draft.steam_id,
            ban_date = %draft.ban_date,
            "New ban appeal submitted (no webhook configured)"
        );
        Ok(())
    }
}
