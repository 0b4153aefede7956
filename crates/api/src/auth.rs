// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.

use appeal_desk_audit::Actor;
use subtle::ConstantTimeEq;

use crate::error::AuthError;

/// Identifier recorded for the reviewer holding the admin token.
pub const ADMIN_ACTOR_ID: &str = "admin";

/// Actor roles for authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Reviewer: may list, inspect and decide appeals.
    Admin,
    /// Anyone using the public form or status lookup.
    Public,
}

impl Role {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Public => "public",
        }
    }
}

/// An authenticated actor with an associated role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The role assigned to this actor.
    pub role: Role,
}

impl AuthenticatedActor {
    #[must_use]
    pub const fn new(id: String, role: Role) -> Self {
        Self { id, role }
    }

    /// Converts this authenticated actor into an audit Actor.
    #[must_use]
    pub fn to_audit_actor(&self) -> Actor {
        Actor::new(self.id.clone(), self.role.as_str().to_string())
    }
}

/// Checks a presented bearer token against the configured admin token.
///
/// # Errors
///
/// Returns `AuthError::AuthenticationFailed` if no admin token is configured
/// or the presented token does not match.
pub fn authenticate_admin_token(
    configured: Option<&str>,
    presented: &str,
) -> Result<AuthenticatedActor, AuthError> {
    let Some(expected) = configured else {
        return Err(AuthError::AuthenticationFailed {
            reason: String::from("admin access is not configured"),
        });
    };

    let matches: bool = presented.as_bytes().ct_eq(expected.as_bytes()).into();
    if presented.is_empty() || !matches {
        return Err(AuthError::AuthenticationFailed {
            reason: String::from("invalid admin token"),
        });
    }

    Ok(AuthenticatedActor::new(
        ADMIN_ACTOR_ID.to_string(),
        Role::Admin,
    ))
}

/// Authorization service for enforcing role-based access control.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks if an actor may decide an appeal.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_review(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_admin(actor, "review_appeal")
    }

    /// Checks if an actor may see the full appeal list, detail and audit trail.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_view_admin(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_admin(actor, "view_appeals")
    }

    fn require_admin(actor: &AuthenticatedActor, action: &str) -> Result<(), AuthError> {
        match actor.role {
            Role::Admin => Ok(()),
            Role::Public => Err(AuthError::Unauthorized {
                action: action.to_string(),
                required_role: String::from("Admin"),
            }),
        }
    }
}
