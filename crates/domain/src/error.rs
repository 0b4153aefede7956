// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while interpreting domain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A status string did not name a known appeal status.
    InvalidStatus {
        /// The rejected value.
        status: String,
    },
    /// A decision string was neither `approved` nor `denied`.
    InvalidDecision {
        /// The rejected value.
        decision: String,
    },
    /// A filter string did not name a known status filter.
    InvalidStatusFilter {
        /// The rejected value.
        filter: String,
    },
    /// The requested status change is not permitted by the appeal lifecycle.
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
        /// Why the transition was refused.
        reason: String,
    },
    /// Failed to parse a date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStatus { status } => {
                write!(
                    f,
                    "Invalid appeal status '{status}'. Must be 'pending', 'approved' or 'denied'"
                )
            }
            Self::InvalidDecision { decision } => {
                write!(
                    f,
                    "Invalid decision '{decision}'. Must be 'approved' or 'denied'"
                )
            }
            Self::InvalidStatusFilter { filter } => {
                write!(
                    f,
                    "Invalid status filter '{filter}'. Must be 'all', 'pending', 'approved' or 'denied'"
                )
            }
            Self::InvalidStatusTransition { from, to, reason } => {
                write!(f, "Cannot move appeal from '{from}' to '{to}': {reason}")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
