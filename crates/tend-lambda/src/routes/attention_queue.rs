use axum::Json;
use axum::extract::State;

use tend_attention::caseload::{ClientSummary, attention_queue as queue, summarize_caseload};

use super::CaseloadRequest;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn attention_queue(
    State(state): State<AppState>,
    Json(request): Json<CaseloadRequest>,
) -> Result<Json<Vec<ClientSummary>>, ApiError> {
    let (clients, clock) = request.into_parts(&state.config)?;
    let summaries = summarize_caseload(&clients, &clock);
    Ok(Json(queue(&summaries).into_iter().cloned().collect()))
}
