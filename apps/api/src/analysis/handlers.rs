//! Axum route handlers for the Skill Analysis API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header::AUTHORIZATION, HeaderMap},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::analyzer::analyze;
use crate::analysis::models::{MatchBand, SkillMatchResult};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Absent documents deserialize as empty and fail the blank check below.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AnalyzeRequest {
    pub job_description: String,
    pub resume: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub match_band: MatchBand,
    pub result: SkillMatchResult,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/skills/analyze
///
/// Compares a resume against a job description. The OpenAI API key travels in the
/// `Authorization: Bearer` header and is passed straight through, never stored.
pub async fn handle_analyze(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let api_key = bearer_token(&headers)
        .ok_or_else(|| AppError::Unauthorized("Please provide an OpenAI API key".to_string()))?;

    let Json(request) = body.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    if request.resume.trim().is_empty() || request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "Please provide both resume and job description".to_string(),
        ));
    }

    let analysis_id = Uuid::new_v4();
    info!("Starting skill analysis {analysis_id}");

    let result = analyze(
        state.llm.as_ref(),
        &request.job_description,
        &request.resume,
        api_key,
    )
    .await?;

    Ok(Json(AnalyzeResponse {
        analysis_id,
        analyzed_at: Utc::now(),
        match_band: result.band(),
        result: result.sorted(),
    }))
}

/// Extracts a non-blank bearer token from the `Authorization` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
