// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API operations over the appeal store.
//!
//! Mutating operations return an [`ApiResult`] carrying the audit event for
//! the change. The caller is responsible for appending it to the audit log.

use std::str::FromStr;

use appeal_desk::{AppealRepository, AppealStore};
use appeal_desk_audit::{Action, Actor, AuditEvent, AuditLog, Cause};
use appeal_desk_domain::{
    AppealId, AppealRecord, AppealStatus, Decision, DraftAppeal, StatusFilter, ValidationErrors,
    validate_draft,
};
use appeal_desk_notify::NotificationGateway;
use tracing::{debug, info, warn};

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    AppealDraftRequest, AppealResponse, AppealStatusView, AuditEventResponse, AuditTrailResponse,
    ListAppealsResponse, ReviewAppealRequest, SearchAppealsResponse, SubmitAppealResponse,
    ValidateAppealResponse,
};

/// The result of an API operation that includes both the response and the audit event.
///
/// This ensures that successful API operations always produce an audit trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResult<T> {
    /// The API response.
    pub response: T,
    /// The audit event generated by this operation.
    pub audit_event: AuditEvent,
}

/// Checks a draft and reports every failing field.
#[must_use]
pub fn validate_appeal(request: AppealDraftRequest) -> ValidateAppealResponse {
    let draft: DraftAppeal = request.into();
    let errors: ValidationErrors = validate_draft(&draft);
    ValidateAppealResponse {
        valid: errors.is_empty(),
        errors: errors.to_wire_map(),
    }
}

/// Turns a submitted form into a draft that is ready to announce and store.
///
/// # Errors
///
/// Returns `ApiError::ValidationFailed` listing every failing field.
pub fn validate_submission(request: AppealDraftRequest) -> Result<DraftAppeal, ApiError> {
    let draft: DraftAppeal = request.into();
    let errors: ValidationErrors = validate_draft(&draft);
    if errors.is_empty() {
        Ok(draft)
    } else {
        debug!(fields = ?errors.fields(), "Appeal draft failed validation");
        Err(errors.into())
    }
}

/// Notifies staff about a validated draft.
///
/// Must complete successfully before [`record_submission`] is called.
///
/// # Errors
///
/// Returns `ApiError::NotificationFailed` if the gateway did not accept the
/// notification.
pub async fn announce_submission(
    gateway: &dyn NotificationGateway,
    draft: &DraftAppeal,
) -> Result<(), ApiError> {
    gateway.notify(draft).await.map_err(|e| {
        warn!(player = %draft.player_name, error = %e, "Appeal notification failed; not storing");
        ApiError::from(e)
    })
}

/// Stores an announced draft as a new pending appeal.
///
/// # Errors
///
/// Returns `ApiError::Internal` if the store could not allocate a fresh id.
pub fn record_submission<R: AppealRepository>(
    store: &mut AppealStore<R>,
    draft: DraftAppeal,
    cause: Cause,
) -> Result<ApiResult<SubmitAppealResponse>, ApiError> {
    let record: AppealRecord = store.create(draft).map_err(translate_core_error)?;

    info!(appeal_id = %record.id, player = %record.player_name, "Appeal stored");

    let audit_event = AuditEvent::new(
        Actor::public_submitter(),
        cause,
        Action::new(String::from("SubmitAppeal"), None),
        record.id.clone(),
        None,
        record.status,
        record.submitted_at,
    );

    Ok(ApiResult {
        response: SubmitAppealResponse {
            id: record.id.to_string(),
            message: format!(
                "Appeal submitted. Use id '{}' to check its status.",
                record.id
            ),
            appeal: AppealResponse::from(&record),
        },
        audit_event,
    })
}

/// Applies a reviewer's decision.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not authorized (not an Admin)
/// - The decision is not `approved` or `denied`
/// - The appeal does not exist
/// - The appeal has already been reviewed
pub fn review_appeal<R: AppealRepository>(
    store: &mut AppealStore<R>,
    appeal_id: &str,
    request: ReviewAppealRequest,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<ApiResult<AppealResponse>, ApiError> {
    AuthorizationService::authorize_review(authenticated_actor)?;

    let decision: Decision =
        Decision::from_str(&request.decision).map_err(translate_domain_error)?;
    let id: AppealId = AppealId::new(appeal_id);

    let before: Option<AppealStatus> = store.get(&id).map(|record| record.status);
    let has_notes: bool = request
        .notes
        .as_deref()
        .is_some_and(|notes| !notes.trim().is_empty());

    let record: AppealRecord = store
        .transition(&id, decision, request.notes)
        .map_err(|e| {
            warn!(appeal_id = %id, decision = %decision, error = %e, "Refused appeal review");
            translate_core_error(e)
        })?;

    info!(appeal_id = %record.id, decision = %decision, actor = %authenticated_actor.id, "Appeal reviewed");

    let audit_event = AuditEvent::new(
        authenticated_actor.to_audit_actor(),
        cause,
        Action::new(
            String::from("ReviewAppeal"),
            Some(format!("decision={decision} notes={has_notes}")),
        ),
        record.id.clone(),
        before,
        record.status,
        record.reviewed_at.unwrap_or(record.submitted_at),
    );

    Ok(ApiResult {
        response: AppealResponse::from(&record),
        audit_event,
    })
}

/// Lists appeals for review, newest first, with per-status counts.
///
/// `status` defaults to `all` when absent.
///
/// # Errors
///
/// Returns an error if the actor is not an Admin or the filter is unknown.
pub fn list_appeals<R: AppealRepository>(
    store: &AppealStore<R>,
    status: Option<&str>,
    authenticated_actor: &AuthenticatedActor,
) -> Result<ListAppealsResponse, ApiError> {
    AuthorizationService::authorize_view_admin(authenticated_actor)?;

    let filter: StatusFilter = match status {
        Some(value) => StatusFilter::from_str(value).map_err(translate_domain_error)?,
        None => StatusFilter::All,
    };

    let appeals: Vec<AppealResponse> = store
        .list(filter)
        .iter()
        .map(AppealResponse::from)
        .collect();

    Ok(ListAppealsResponse {
        filter: filter.as_str().to_string(),
        counts: store.counts().into(),
        appeals,
    })
}

/// Public status lookup by player name, Discord tag or appeal id.
#[must_use]
pub fn search_appeals<R: AppealRepository>(
    store: &AppealStore<R>,
    query: &str,
) -> SearchAppealsResponse {
    let results: Vec<AppealStatusView> = store
        .search(query)
        .iter()
        .map(AppealStatusView::from)
        .collect();

    SearchAppealsResponse {
        query: query.to_string(),
        results,
    }
}

/// Full detail of one appeal.
///
/// # Errors
///
/// Returns an error if the actor is not an Admin or the appeal does not exist.
pub fn get_appeal<R: AppealRepository>(
    store: &AppealStore<R>,
    appeal_id: &str,
    authenticated_actor: &AuthenticatedActor,
) -> Result<AppealResponse, ApiError> {
    AuthorizationService::authorize_view_admin(authenticated_actor)?;

    store
        .get(&AppealId::new(appeal_id))
        .map(|record| AppealResponse::from(&record))
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Appeal"),
            message: format!("Appeal '{appeal_id}' does not exist"),
        })
}

/// The audit trail, oldest first, optionally narrowed to one appeal.
///
/// # Errors
///
/// Returns an error if the actor is not an Admin.
pub fn audit_trail(
    log: &AuditLog,
    appeal_id: Option<&str>,
    authenticated_actor: &AuthenticatedActor,
) -> Result<AuditTrailResponse, ApiError> {
    AuthorizationService::authorize_view_admin(authenticated_actor)?;

    let events: Vec<AuditEventResponse> = match appeal_id {
        Some(id) => log
            .for_appeal(&AppealId::new(id))
            .iter()
            .map(AuditEventResponse::from)
            .collect(),
        None => log.events().iter().map(AuditEventResponse::from).collect(),
    };

    Ok(AuditTrailResponse { events })
}
