// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use std::collections::BTreeMap;

use appeal_desk::CoreError;
use appeal_desk_domain::{DomainError, ValidationErrors};
use appeal_desk_notify::NotificationError;

/// Message shown to a submitter when staff could not be notified.
pub const SUBMISSION_FAILED_MESSAGE: &str =
    "Failed to submit appeal. Please try again or contact an administrator.";

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the actor does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// The draft failed one or more field rules.
    ValidationFailed {
        /// Wire field name to message.
        fields: BTreeMap<String, String>,
    },
    /// Staff could not be notified, so nothing was stored.
    NotificationFailed {
        /// Gateway failure, for logs only.
        reason: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::ValidationFailed { fields } => {
                write!(f, "Appeal has {} invalid field(s)", fields.len())
            }
            Self::NotificationFailed { .. } => write!(f, "{SUBMISSION_FAILED_MESSAGE}"),
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self::ValidationFailed {
            fields: errors.to_wire_map(),
        }
    }
}

impl From<NotificationError> for ApiError {
    fn from(err: NotificationError) -> Self {
        Self::NotificationFailed {
            reason: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidStatus { status } => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Unknown appeal status '{status}'"),
        },
        DomainError::InvalidDecision { decision } => ApiError::InvalidInput {
            field: String::from("decision"),
            message: format!("Invalid decision '{decision}'. Must be 'approved' or 'denied'"),
        },
        DomainError::InvalidStatusFilter { filter } => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!(
                "Invalid status filter '{filter}'. Must be 'all', 'pending', 'approved' or 'denied'"
            ),
        },
        DomainError::InvalidStatusTransition { from, to, reason } => {
            ApiError::DomainRuleViolation {
                rule: String::from("single_review"),
                message: format!("Cannot move appeal from '{from}' to '{to}': {reason}"),
            }
        }
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("banDate"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::NotFound { id } => ApiError::ResourceNotFound {
            resource_type: String::from("Appeal"),
            message: format!("Appeal '{id}' does not exist"),
        },
        CoreError::InvalidTransition { id, from, to } => ApiError::DomainRuleViolation {
            rule: String::from("single_review"),
            message: format!(
                "Appeal '{id}' is already {from} and cannot be marked {to}"
            ),
        },
        CoreError::DuplicateId { id } => ApiError::Internal {
            message: format!("Generated appeal id '{id}' collides with an existing appeal"),
        },
    }
}
