// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::Arc;

use appeal_desk_domain::DraftAppeal;
use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use tokio::sync::Mutex;

pub fn create_test_draft() -> DraftAppeal {
    DraftAppeal {
        player_name: String::from("John_Smith"),
        discord_tag: String::from("john#1234"),
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

#[derive(Clone)]
struct Capture {
    status: StatusCode,
    bodies: Arc<Mutex<Vec<serde_json::Value>>>,
}

async fn receive(
    State(capture): State<Capture>,
    Json(body): Json<serde_json::Value>,
) -> StatusCode {
    capture.bodies.lock().await.push(body);
    capture.status
}

/// Starts a webhook receiver on a free local port that answers every POST
/// with `status`. Returns its URL and the bodies it received.
pub async fn spawn_webhook(status: StatusCode) -> (String, Arc<Mutex<Vec<serde_json::Value>>>) {
    let bodies = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new().route("/hook", post(receive)).with_state(Capture {
        status,
        bodies: Arc::clone(&bodies),
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/hook"), bodies)
}

/// A URL on a port nothing is listening on.
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/hook")
}
