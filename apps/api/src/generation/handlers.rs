//! Axum route handler for resume generation.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use tracing::{error, info};

use crate::errors::AppError;
use crate::profile::handlers::{candidate_id, CandidateRequest};
use crate::profile::{extract_profile, ProfileOutcome};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ResumeResponse {
    pub version: String,
    pub output: Option<String>,
    pub message: String,
}

/// POST /api/v1/resumes
///
/// Fetch rows → build profile → generate resume text.
/// Only a bad request body is an HTTP error. An incomplete profile, a failed
/// row fetch or a failed generation is reported in `message` with `output: null`.
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    payload: Result<Json<CandidateRequest>, JsonRejection>,
) -> Result<Json<ResumeResponse>, AppError> {
    let post_id = candidate_id(payload)?;
    info!(post_id, "Resume requested");

    let response = match generate(&state, post_id).await {
        Ok(resume) => ResumeResponse {
            version: service_version(),
            output: Some(resume),
            message: "Resume successfully created.".to_string(),
        },
        Err(message) => ResumeResponse {
            version: service_version(),
            output: None,
            message: format!("Error: {message}"),
        },
    };

    Ok(Json(response))
}

async fn generate(state: &AppState, post_id: u64) -> Result<String, String> {
    let rows = state.rows.fetch_rows(post_id).await.map_err(|e| {
        error!(post_id, "Failed to fetch candidate rows: {e}");
        e.to_string()
    })?;

    let profile = match extract_profile(&rows) {
        ProfileOutcome::Profile(profile) => profile,
        ProfileOutcome::Error { error } => return Err(error),
    };

    state.generator.generate(&profile).await.map_err(|e| {
        error!(post_id, "Resume generation failed: {e}");
        e.to_string()
    })
}

fn service_version() -> String {
    format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
