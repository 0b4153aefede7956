// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Injected time and identity sources for the appeal store.

use appeal_desk_domain::AppealId;
use time::OffsetDateTime;

/// Source of the current time.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> OffsetDateTime;
}

/// Wall-clock time in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// Source of fresh appeal identifiers.
pub trait IdGenerator {
    /// Returns an identifier that has not been handed out before.
    fn next_id(&mut self) -> AppealId;
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> AppealId {
        AppealId::new(uuid::Uuid::new_v4().to_string())
    }
}
