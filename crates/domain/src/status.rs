// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Appeal status tracking and transition logic.
//!
//! An appeal starts out `pending` and is moved exactly once, by a reviewer,
//! to either `approved` or `denied`. Both of those are terminal.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Review status of an appeal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AppealStatus {
    /// Submitted and waiting for a reviewer.
    #[default]
    Pending,
    /// A reviewer lifted the ban.
    Approved,
    /// A reviewer upheld the ban.
    Denied,
}

impl AppealStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for API serialization and log fields.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Denied => "denied",
        }
    }

    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "denied" => Ok(Self::Denied),
            _ => Err(DomainError::InvalidStatus {
                status: s.to_string(),
            }),
        }
    }

    /// Returns true once a reviewer has decided the appeal.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Denied)
    }

    /// Validates if a transition from this status to another is permitted.
    ///
    /// Only `pending → approved` and `pending → denied` are allowed.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` for every other pair.
    pub fn validate_transition(&self, new_status: Self) -> Result<(), DomainError> {
        if self.is_terminal() {
            return Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "appeal has already been reviewed".to_string(),
            });
        }

        if new_status.is_terminal() {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "an appeal cannot re-enter the pending state".to_string(),
            })
        }
    }
}

impl FromStr for AppealStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for AppealStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A reviewer's verdict on a pending appeal.
///
/// This is the only input accepted by a status transition, so `pending`
/// can never be requested as a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// Lift the ban.
    Approved,
    /// Uphold the ban.
    Denied,
}

impl Decision {
    /// The status an appeal takes on after this decision.
    #[must_use]
    pub const fn status(self) -> AppealStatus {
        match self {
            Self::Approved => AppealStatus::Approved,
            Self::Denied => AppealStatus::Denied,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.status().as_str()
    }
}

impl FromStr for Decision {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "approved" => Ok(Self::Approved),
            "denied" => Ok(Self::Denied),
            _ => Err(DomainError::InvalidDecision {
                decision: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status filter used by the review listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    /// Every appeal regardless of status.
    #[default]
    All,
    /// Only appeals with the given status.
    Only(AppealStatus),
}

impl StatusFilter {
    /// Returns true if an appeal with `status` passes this filter.
    #[must_use]
    pub fn matches(&self, status: AppealStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == status,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(status) => status.as_str(),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }
        AppealStatus::parse_str(s)
            .map(Self::Only)
            .map_err(|_| DomainError::InvalidStatusFilter {
                filter: s.to_string(),
            })
    }
}

impl From<AppealStatus> for StatusFilter {
    fn from(status: AppealStatus) -> Self {
        Self::Only(status)
    }
}
