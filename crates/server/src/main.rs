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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod live;
mod session;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use appeal_desk::AppealStore;
use appeal_desk_api::{
    ApiError, AppealDraftRequest, AppealResponse, AuditTrailResponse, ListAppealsResponse,
    ReviewAppealRequest, SearchAppealsResponse, SubmitAppealResponse, ValidateAppealResponse,
    announce_submission, audit_trail, get_appeal, list_appeals, record_submission, review_appeal,
    search_appeals, validate_appeal, validate_submission,
};
use appeal_desk_audit::{AuditLog, Cause};
use appeal_desk_notify::{
    DEFAULT_ADDITIONAL_INFO_LIMIT, DEFAULT_APPEAL_REASON_LIMIT, DEFAULT_COMMUNITY_NAME,
    DiscordWebhookGateway, LogOnlyGateway, NotificationGateway, PayloadLimits, WebhookConfig,
};
use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::live::{LiveEvent, LiveEventBroadcaster, live_events_handler};
use crate::session::AdminSession;

/// Appeal Desk Server - ban appeal intake and review over HTTP
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the server to
    #[arg(long, env = "APPEAL_DESK_BIND", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    bind: IpAddr,

    /// Port to bind the server to
    #[arg(short, long, env = "APPEAL_DESK_PORT", default_value_t = 3000)]
    port: u16,

    /// Discord webhook that receives new appeals. If not provided, appeals are only logged.
    #[arg(long, env = "APPEAL_DESK_WEBHOOK_URL")]
    webhook_url: Option<String>,

    /// Bearer token for the review endpoints. If not provided, they are disabled.
    #[arg(long, env = "APPEAL_DESK_ADMIN_TOKEN", hide_env_values = true)]
    admin_token: Option<String>,

    /// Community name shown in the notification footer
    #[arg(long, env = "APPEAL_DESK_COMMUNITY", default_value = DEFAULT_COMMUNITY_NAME)]
    community_name: String,

    /// Appeal reason characters included in a notification
    #[arg(long, env = "APPEAL_DESK_APPEAL_REASON_LIMIT", default_value_t = DEFAULT_APPEAL_REASON_LIMIT)]
    appeal_reason_limit: usize,

    /// Additional information characters included in a notification
    #[arg(long, env = "APPEAL_DESK_ADDITIONAL_INFO_LIMIT", default_value_t = DEFAULT_ADDITIONAL_INFO_LIMIT)]
    additional_info_limit: usize,

    /// Webhook request timeout in seconds
    #[arg(long, env = "APPEAL_DESK_WEBHOOK_TIMEOUT_SECS", default_value_t = 10)]
    webhook_timeout_secs: u64,
}

impl Args {
    /// Builds the notification gateway this configuration asks for.
    fn build_gateway(
        &self,
    ) -> Result<Arc<dyn NotificationGateway>, appeal_desk_notify::NotificationError> {
        match &self.webhook_url {
            Some(url) => {
                let config = WebhookConfig {
                    url: url.clone(),
                    community_name: self.community_name.clone(),
                    limits: PayloadLimits {
                        appeal_reason: self.appeal_reason_limit,
                        additional_info: self.additional_info_limit,
                    },
                    timeout: Duration::from_secs(self.webhook_timeout_secs),
                };
                info!("Appeal notifications go to the configured Discord webhook");
                Ok(Arc::new(DiscordWebhookGateway::new(config)?))
            }
            None => {
                warn!("No webhook URL configured; appeal notifications are only logged");
                Ok(Arc::new(LogOnlyGateway))
            }
        }
    }
}

/// Application state shared across handlers.
///
/// Lock order is store, then audit log. The store lock is never held while
/// a notification is in flight.
#[derive(Clone)]
struct AppState {
    /// The appeal collection.
    store: Arc<Mutex<AppealStore>>,
    /// Record of every stored appeal and review decision.
    audit_log: Arc<Mutex<AuditLog>>,
    /// Staff notification channel.
    gateway: Arc<dyn NotificationGateway>,
    /// Live feed for connected pages.
    live: Arc<LiveEventBroadcaster>,
    /// Configured admin bearer token.
    admin_token: Option<Arc<str>>,
}

impl AppState {
    fn new(gateway: Arc<dyn NotificationGateway>, admin_token: Option<String>) -> Self {
        Self {
            store: Arc::new(Mutex::new(AppealStore::new())),
            audit_log: Arc::new(Mutex::new(AuditLog::new())),
            gateway,
            live: Arc::new(LiveEventBroadcaster::new()),
            admin_token: admin_token.map(Arc::from),
        }
    }
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
    /// Field-level messages, present for validation failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fields: Option<BTreeMap<String, String>>,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
    /// Field-level messages, for validation failures.
    fields: Option<BTreeMap<String, String>>,
}

impl HttpError {
    const fn new(status: StatusCode, message: String) -> Self {
        Self {
            status,
            message,
            fields: None,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
            fields: self.fields,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::ValidationFailed { fields } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: String::from("Please correct the highlighted fields"),
                fields: Some(fields),
            },
            ApiError::NotificationFailed { .. } => {
                Self::new(StatusCode::BAD_GATEWAY, err.to_string())
            }
            ApiError::AuthenticationFailed { .. } => {
                Self::new(StatusCode::UNAUTHORIZED, err.to_string())
            }
            ApiError::Unauthorized { .. } => Self::new(StatusCode::FORBIDDEN, err.to_string()),
            ApiError::DomainRuleViolation { .. } => {
                Self::new(StatusCode::CONFLICT, err.to_string())
            }
            ApiError::InvalidInput { .. } => Self::new(StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::ResourceNotFound { .. } => {
                Self::new(StatusCode::NOT_FOUND, err.to_string())
            }
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    status: String,
}

/// Query string for the public status lookup.
#[derive(Debug, Clone, Default, Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
}

/// Query string for the review listing.
#[derive(Debug, Clone, Default, Deserialize)]
struct ListParams {
    status: Option<String>,
}

/// Query string for the audit trail.
#[derive(Debug, Clone, Default, Deserialize)]
struct AuditParams {
    appeal_id: Option<String>,
}

fn new_cause(description: &str) -> Cause {
    Cause::new(uuid::Uuid::new_v4().to_string(), description.to_string())
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Handler for POST `/appeals/validate`.
async fn handle_validate_appeal(
    Json(req): Json<AppealDraftRequest>,
) -> Json<ValidateAppealResponse> {
    info!(player = %req.player_name, "Handling validate_appeal request");
    Json(validate_appeal(req))
}

/// Handler for POST `/appeals`.
///
/// Validates, notifies staff, then stores. A failed notification stores
/// nothing and the client keeps its draft.
async fn handle_submit_appeal(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<AppealDraftRequest>,
) -> Result<(StatusCode, Json<SubmitAppealResponse>), HttpError> {
    info!(player = %req.player_name, "Handling submit_appeal request");

    let draft = validate_submission(req)?;
    announce_submission(app_state.gateway.as_ref(), &draft).await?;

    let mut store = app_state.store.lock().await;
    let result = record_submission(&mut *store, draft, new_cause("Public appeal form"))?;
    app_state.audit_log.lock().await.record(result.audit_event);
    drop(store);

    app_state.live.broadcast(&LiveEvent::AppealSubmitted {
        appeal_id: result.response.id.clone(),
        player_name: result.response.appeal.player_name.clone(),
    });

    Ok((StatusCode::CREATED, Json(result.response)))
}

/// Handler for GET `/appeals/search`.
async fn handle_search_appeals(
    AxumState(app_state): AxumState<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchAppealsResponse> {
    info!(query = %params.q, "Handling search_appeals request");
    let store = app_state.store.lock().await;
    Json(search_appeals(&*store, &params.q))
}

/// Handler for GET `/appeals`.
async fn handle_list_appeals(
    AxumState(app_state): AxumState<AppState>,
    AdminSession(actor): AdminSession,
    Query(params): Query<ListParams>,
) -> Result<Json<ListAppealsResponse>, HttpError> {
    info!(actor = %actor.id, status = ?params.status, "Handling list_appeals request");
    let store = app_state.store.lock().await;
    let response = list_appeals(&*store, params.status.as_deref(), &actor)?;
    Ok(Json(response))
}

/// Handler for GET `/appeals/{id}`.
async fn handle_get_appeal(
    AxumState(app_state): AxumState<AppState>,
    AdminSession(actor): AdminSession,
    Path(appeal_id): Path<String>,
) -> Result<Json<AppealResponse>, HttpError> {
    info!(actor = %actor.id, appeal_id = %appeal_id, "Handling get_appeal request");
    let store = app_state.store.lock().await;
    let response = get_appeal(&*store, &appeal_id, &actor)?;
    Ok(Json(response))
}

/// Handler for POST `/appeals/{id}/review`.
async fn handle_review_appeal(
    AxumState(app_state): AxumState<AppState>,
    AdminSession(actor): AdminSession,
    Path(appeal_id): Path<String>,
    Json(req): Json<ReviewAppealRequest>,
) -> Result<Json<AppealResponse>, HttpError> {
    info!(
        actor = %actor.id,
        appeal_id = %appeal_id,
        decision = %req.decision,
        "Handling review_appeal request"
    );

    let mut store = app_state.store.lock().await;
    let result = review_appeal(
        &mut *store,
        &appeal_id,
        req,
        &actor,
        new_cause("Admin review"),
    )?;
    app_state.audit_log.lock().await.record(result.audit_event);
    drop(store);

    app_state.live.broadcast(&LiveEvent::AppealReviewed {
        appeal_id: result.response.id.clone(),
        status: result.response.status,
    });

    Ok(Json(result.response))
}

/// Handler for GET `/audit`.
async fn handle_audit_trail(
    AxumState(app_state): AxumState<AppState>,
    AdminSession(actor): AdminSession,
    Query(params): Query<AuditParams>,
) -> Result<Json<AuditTrailResponse>, HttpError> {
    info!(actor = %actor.id, appeal_id = ?params.appeal_id, "Handling audit_trail request");
    let log = app_state.audit_log.lock().await;
    let response = audit_trail(&log, params.appeal_id.as_deref(), &actor)?;
    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/appeals/validate", post(handle_validate_appeal))
        .route("/appeals/search", get(handle_search_appeals))
        .route(
            "/appeals",
            post(handle_submit_appeal).get(handle_list_appeals),
        )
        .route("/appeals/{id}", get(handle_get_appeal))
        .route("/appeals/{id}/review", post(handle_review_appeal))
        .route("/audit", get(handle_audit_trail))
        .route("/live", get(live_events_handler))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Appeal Desk Server");

    let gateway: Arc<dyn NotificationGateway> = args.build_gateway()?;
    if args.admin_token.is_none() {
        warn!("No admin token configured; review endpoints will refuse every request");
    }

    let app_state: AppState = AppState::new(gateway, args.admin_token.clone());
    let app: Router = build_router(app_state);

    let addr: SocketAddr = SocketAddr::new(args.bind, args.port);
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
