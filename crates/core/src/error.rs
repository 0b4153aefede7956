// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use appeal_desk_domain::{AppealId, AppealStatus};

/// Errors that can occur when mutating the appeal store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// No appeal with this id exists.
    NotFound {
        /// The id that was looked up.
        id: AppealId,
    },
    /// The appeal is not in a state that allows the requested change.
    InvalidTransition {
        /// The appeal that was targeted.
        id: AppealId,
        /// Its current status.
        from: AppealStatus,
        /// The status that was requested.
        to: AppealStatus,
    },
    /// The id generator produced an id that is already taken.
    DuplicateId {
        /// The colliding id.
        id: AppealId,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { id } => write!(f, "Appeal '{id}' not found"),
            Self::InvalidTransition { id, from, to } => {
                write!(
                    f,
                    "Appeal '{id}' cannot move from '{from}' to '{to}': it has already been reviewed"
                )
            }
            Self::DuplicateId { id } => write!(f, "Appeal id '{id}' is already in use"),
        }
    }
}

impl std::error::Error for CoreError {}
