// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Failure to deliver a staff notification.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotificationError {
    /// The endpoint answered with a non-success status.
    #[error("Notification endpoint rejected the request with status {status}")]
    Rejected { status: u16 },

    /// The request never produced a response.
    #[error("Failed to reach notification endpoint: {0}")]
    Transport(String),

    /// The gateway could not be set up.
    #[error("Invalid notification configuration: {0}")]
    Configuration(String),
}
