// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use std::sync::atomic::{AtomicUsize, Ordering};

use appeal_desk::{AppealStore, Clock, IdGenerator};
use appeal_desk_audit::Cause;
use appeal_desk_domain::{AppealId, DraftAppeal};
use appeal_desk_notify::{NotificationError, NotificationGateway};
use async_trait::async_trait;
use time::{OffsetDateTime, macros::datetime};

use crate::{AppealDraftRequest, AuthenticatedActor, Role};

pub fn create_test_admin() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("admin"), Role::Admin)
}

pub fn create_test_public() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("visitor"), Role::Public)
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("api-req-456"), String::from("API request"))
}

pub fn create_valid_request() -> AppealDraftRequest {
    AppealDraftRequest {
        player_name: String::from("John_Smith"),
        discord_tag: String::from("john#1234"),
        steam_id: String::from("76561198000000042"),
        ban_date: String::from("2026-01-20"),
        ban_reason: String::from("Random deathmatch"),
        appeal_reason: String::from(
            "I misunderstood the rules about engaging other players near the spawn area.",
        ),
        additional_info: String::new(),
        acknowledgment: true,
    }
}

struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        datetime!(2026-03-01 12:00 UTC)
    }
}

#[derive(Default)]
struct SequentialIds(u32);

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> AppealId {
        self.0 += 1;
        AppealId::new(format!("appeal-{}", self.0))
    }
}

pub fn create_test_store() -> AppealStore {
    AppealStore::with_collaborators(Box::new(FixedClock), Box::new(SequentialIds::default()))
}

/// Stores a valid appeal for `player_name` and returns its id.
pub fn seed_appeal(store: &mut AppealStore, player_name: &str) -> String {
    let mut request = create_valid_request();
    request.player_name = player_name.to_string();
    let draft: DraftAppeal = request.into();
    store.create(draft).unwrap().id.to_string()
}

/// Accepts every notification and counts them.
#[derive(Default)]
pub struct CountingGateway {
    pub calls: AtomicUsize,
}

#[async_trait]
impl NotificationGateway for CountingGateway {
    async fn notify(&self, _draft: &DraftAppeal) -> Result<(), NotificationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Rejects every notification.
pub struct RejectingGateway;

#[async_trait]
impl NotificationGateway for RejectingGateway {
    async fn notify(&self, _draft: &DraftAppeal) -> Result<(), NotificationError> {
        Err(NotificationError::Rejected { status: 500 })
    }
}
