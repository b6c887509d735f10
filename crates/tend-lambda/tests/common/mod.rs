#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use tend_lambda::config::ServiceConfig;
use tend_lambda::state::AppState;

pub const NOW: &str = "2026-03-10T09:00:00Z";

pub fn app() -> Router {
    app_with(ServiceConfig::default())
}

pub fn app_with(config: ServiceConfig) -> Router {
    tend_lambda::app(AppState::new(config))
}

/// A client seen three weeks ago with nothing new since.
pub fn quiet_client(first_name: &str) -> Value {
    json!({
        "id": Uuid::new_v4(),
        "first_name": first_name,
        "created_at": "2026-01-05T09:00:00Z",
        "schedule": {
            "last_consultation_at": "2026-02-18T09:00:00Z",
            "last_session_note_at": "2026-02-18T10:00:00Z"
        }
    })
}

/// A quiet client with one unread message from yesterday.
pub fn waiting_client(first_name: &str) -> Value {
    let mut client = quiet_client(first_name);
    client["messages"] = json!([
        { "sender": "client", "sent_at": "2026-03-09T18:30:00Z" }
    ]);
    client
}

pub fn caseload(clients: Vec<Value>) -> Value {
    json!({ "clients": clients, "now": NOW })
}

pub async fn post_json(app: Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();
    send(app, request).await
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}
