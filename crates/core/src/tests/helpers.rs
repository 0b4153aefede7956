// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::{Arc, Mutex};

use appeal_desk_domain::{AppealId, DraftAppeal};
use time::{Duration, OffsetDateTime, macros::datetime};

use crate::{AppealStore, Clock, IdGenerator};

/// A clock that only moves when a test tells it to.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<OffsetDateTime>>,
}

impl ManualClock {
    pub fn new(start: OffsetDateTime) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }

    pub fn set(&self, to: OffsetDateTime) {
        *self.now.lock().unwrap() = to;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> OffsetDateTime {
        *self.now.lock().unwrap()
    }
}

/// Hands out `appeal-1`, `appeal-2`, ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: u32,
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> AppealId {
        self.next += 1;
        AppealId::new(format!("appeal-{}", self.next))
    }
}

/// Always hands out the same id.
#[derive(Debug)]
pub struct FixedIds(pub &'static str);

impl IdGenerator for FixedIds {
    fn next_id(&mut self) -> AppealId {
        AppealId::new(self.0)
    }
}

pub const fn test_start() -> OffsetDateTime {
    datetime!(2026-03-01 12:00 UTC)
}

/// A store with a controllable clock and predictable ids.
pub fn create_test_store() -> (AppealStore, ManualClock) {
    let clock = ManualClock::new(test_start());
    let store = AppealStore::with_collaborators(
        Box::new(clock.clone()),
        Box::new(SequentialIds::default()),
    );
    (store, clock)
}

pub fn create_draft(player_name: &str, discord_tag: &str) -> DraftAppeal {
    DraftAppeal {
        player_name: player_name.to_string(),
        discord_tag: discord_tag.to_string(),
        steam_id: String::from("76561198000000001"),
        ban_date: String::from("2026-02-14"),
        ban_reason: String::from("Team killing"),
        appeal_reason: String::from(
            "It was an accident during a chaotic firefight and I apologised right away.",
        ),
        additional_info: String::new(),
        acknowledgment: true,
    }
}
