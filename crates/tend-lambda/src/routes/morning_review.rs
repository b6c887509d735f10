use axum::Json;
use axum::extract::State;

use tend_attention::caseload::MorningReview;

use super::CaseloadRequest;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn morning_review(
    State(state): State<AppState>,
    Json(request): Json<CaseloadRequest>,
) -> Result<Json<MorningReview>, ApiError> {
    let (clients, clock) = request.into_parts(&state.config)?;
    Ok(Json(MorningReview::from_snapshots(&clients, &clock)))
}
