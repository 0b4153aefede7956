// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod auth;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{
    ADMIN_ACTOR_ID, AuthenticatedActor, AuthorizationService, Role, authenticate_admin_token,
};
pub use error::{
    ApiError, AuthError, SUBMISSION_FAILED_MESSAGE, translate_core_error, translate_domain_error,
};
pub use handlers::{
    ApiResult, announce_submission, audit_trail, get_appeal, list_appeals, record_submission,
    review_appeal, search_appeals, validate_appeal, validate_submission,
};
pub use request_response::{
    AppealDraftRequest, AppealResponse, AppealStatusView, AuditEventResponse, AuditTrailResponse,
    ListAppealsResponse, ReviewAppealRequest, SearchAppealsResponse, StatusCountsResponse,
    SubmitAppealResponse, ValidateAppealResponse,
};
