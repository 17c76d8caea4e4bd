use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::profile::{extract_profile, ProfileOutcome};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRequest {
    pub candidate_id: Option<CandidateId>,
}

/// Form posts send the id as a string, API clients as a number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CandidateId {
    Number(u64),
    Text(String),
}

impl CandidateId {
    fn post_id(&self) -> Option<u64> {
        match self {
            CandidateId::Number(id) => Some(*id),
            CandidateId::Text(text) => text.trim().parse().ok(),
        }
    }
}

/// Pulls the candidate's post id out of a request body. Zero, an empty
/// string or a non-numeric string counts as missing.
pub fn candidate_id(
    payload: Result<Json<CandidateRequest>, JsonRejection>,
) -> Result<u64, AppError> {
    let Json(request) = payload.map_err(|e| {
        warn!("Failed to parse request body: {e}");
        AppError::Validation("Invalid request body".to_string())
    })?;
    request
        .candidate_id
        .as_ref()
        .and_then(CandidateId::post_id)
        .filter(|&id| id > 0)
        .ok_or_else(|| AppError::Validation("Missing 'candidateId' in request body".to_string()))
}

/// POST /api/v1/profile
///
/// Returns the normalized profile, or 422 with `{"error": "..."}`.
pub async fn handle_get_profile(
    State(state): State<AppState>,
    payload: Result<Json<CandidateRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let post_id = candidate_id(payload)?;
    let rows = state.rows.fetch_rows(post_id).await?;
    info!(post_id, rows = rows.len(), "Building candidate profile");

    let outcome = extract_profile(&rows);
    let status = match outcome {
        ProfileOutcome::Profile(_) => StatusCode::OK,
        ProfileOutcome::Error { .. } => StatusCode::UNPROCESSABLE_ENTITY,
    };
    Ok((status, Json(outcome)).into_response())
}
