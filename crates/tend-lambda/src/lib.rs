//! tend-lambda
//!
//! Stateless HTTP front for the morning review. Every request carries the
//! caseload it wants scored; nothing is stored between requests.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Largest request body accepted. API Gateway caps Lambda payloads here.
pub const MAX_BODY_BYTES: usize = 6 * 1024 * 1024;

pub fn app(state: AppState) -> Router {
    let cors = match &state.config.allowed_origin {
        Some(origin) => CorsLayer::new().allow_origin(origin.clone()),
        None => CorsLayer::new().allow_origin(Any),
    }
    .allow_methods(Any)
    .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route(
            "/morning-review",
            post(routes::morning_review::morning_review),
        )
        .route(
            "/attention-queue",
            post(routes::attention_queue::attention_queue),
        )
        .route("/review-queue", post(routes::review_queue::review_queue))
        .layer(
            ServiceBuilder::new()
                .layer(axum_mw::from_fn(middleware::logging::log_request))
                .layer(cors)
                .layer(DefaultBodyLimit::max(MAX_BODY_BYTES)),
        )
        .with_state(state)
}
