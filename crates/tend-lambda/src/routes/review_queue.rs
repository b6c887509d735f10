use axum::Json;
use axum::extract::State;
use serde::Serialize;

use tend_attention::caseload::{ClientSummary, summarize_caseload};
use tend_review::session::{NOTHING_TO_REVIEW, review_queue as queue};

use super::CaseloadRequest;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReviewQueueResponse {
    Ready { clients: Vec<ClientSummary> },
    NothingToReview { message: String },
}

pub async fn review_queue(
    State(state): State<AppState>,
    Json(request): Json<CaseloadRequest>,
) -> Result<Json<ReviewQueueResponse>, ApiError> {
    let (clients, clock) = request.into_parts(&state.config)?;
    let clients = queue(&summarize_caseload(&clients, &clock));

    let response = if clients.is_empty() {
        ReviewQueueResponse::NothingToReview {
            message: NOTHING_TO_REVIEW.to_string(),
        }
    } else {
        ReviewQueueResponse::Ready { clients }
    };
    Ok(Json(response))
}
