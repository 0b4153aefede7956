// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use appeal_desk_api::AppealDraftRequest;
use appeal_desk_domain::DraftAppeal;
use appeal_desk_notify::{NotificationError, NotificationGateway};
use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use crate::{AppState, build_router};

pub const TEST_ADMIN_TOKEN: &str = "test-admin-token";

/// Accepts every notification and counts them.
#[derive(Default)]
pub struct RecordingGateway {
    calls: AtomicUsize,
}

impl RecordingGateway {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NotificationGateway for RecordingGateway {
    async fn notify(&self, _draft: &DraftAppeal) -> Result<(), NotificationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Fails every notification as if the webhook were down.
pub struct FailingGateway;

#[async_trait]
impl NotificationGateway for FailingGateway {
    async fn notify(&self, _draft: &DraftAppeal) -> Result<(), NotificationError> {
        Err(NotificationError::Transport(String::from(
            "connection refused",
        )))
    }
}

/// App state with an admin token and a counting gateway.
pub fn create_test_app_state() -> (AppState, Arc<RecordingGateway>) {
    let gateway = Arc::new(RecordingGateway::default());
    let state = AppState::new(
        Arc::clone(&gateway) as Arc<dyn NotificationGateway>,
        Some(String::from(TEST_ADMIN_TOKEN)),
    );
    (state, gateway)
}

pub fn create_valid_request(player_name: &str) -> AppealDraftRequest {
    AppealDraftRequest {
        player_name: player_name.to_string(),
        discord_tag: format!("{}#1234", player_name.to_lowercase()),
        steam_id: String::from("76561198000000042"),
        ban_date: String::from("2026-01-20"),
        ban_reason: String::from("Random deathmatch"),
        appeal_reason: String::from(
            "I misunderstood the rules about engaging other players near the spawn area.",
        ),
        additional_info: String::new(),
        acknowledgment: true,
    }
}

pub fn json_request(method: &str, uri: &str, body: &impl serde::Serialize) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

pub fn admin_json_request(
    method: &str,
    uri: &str,
    body: &impl serde::Serialize,
) -> Request<Body> {
    let mut request = json_request(method, uri, body);
    request.headers_mut().insert(
        "authorization",
        format!("Bearer {TEST_ADMIN_TOKEN}").parse().unwrap(),
    );
    request
}

pub fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn read_json<T: DeserializeOwned>(response: Response<Body>) -> T {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

/// Submits a valid appeal and returns its id.
pub async fn submit_appeal(app: &Router, player_name: &str) -> String {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/appeals",
            &create_valid_request(player_name),
        ))
        .await
        .unwrap();
    let body: appeal_desk_api::SubmitAppealResponse = read_json(response).await;
    body.id
}

pub fn build_test_router(state: &AppState) -> Router {
    build_router(state.clone())
}
