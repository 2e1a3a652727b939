//! HTTP handlers for the analysis API. All engine calls happen here; the
//! engine itself stays free of storage and transport concerns.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::analysis::engine::{analyze_jd, AnalysisRequest, AnalysisResult};
use crate::analysis::export::render_report;
use crate::errors::AppError;
use crate::state::AppState;
use crate::store::history;

/// Minimum trimmed JD length accepted by the API. The engine itself enforces
/// no minimum; this guard belongs to the caller.
const MIN_JD_CHARS: usize = 200;

/// Rejects JDs whose trimmed length is under [`MIN_JD_CHARS`].
fn validate_jd_length(jd_text: &str) -> Result<(), AppError> {
    if jd_text.trim().chars().count() < MIN_JD_CHARS {
        return Err(AppError::Validation(format!(
            "Please provide a more detailed JD (min {MIN_JD_CHARS} characters)"
        )));
    }
    Ok(())
}

/// POST /api/v1/analyses
///
/// Runs the engine, appends the result to history, and makes it the current
/// analysis.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    validate_jd_length(&request.jd_text)?;

    let result = analyze_jd(&request);
    info!(
        "Analyzed JD for {:?} / {:?}: base score {}",
        request.company, request.role, result.base_score
    );

    history::insert_analysis(&state.db, &result).await?;
    state.slot.put(&result).await?;

    Ok(Json(result))
}

/// GET /api/v1/analyses
pub async fn handle_list_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<AnalysisResult>>, AppError> {
    let analyses = history::list_analyses(&state.db).await?;
    Ok(Json(analyses))
}

/// GET /api/v1/analyses/current
pub async fn handle_current(
    State(state): State<AppState>,
) -> Result<Json<AnalysisResult>, AppError> {
    state
        .slot
        .get()
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No current analysis".to_string()))
}

/// GET /api/v1/analyses/:id
pub async fn handle_get_analysis(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AnalysisResult>, AppError> {
    let result = fetch_or_not_found(&state, id).await?;
    Ok(Json(result))
}

/// POST /api/v1/analyses/:id/open
///
/// Reopens a history item into the current-analysis slot.
pub async fn handle_open(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AnalysisResult>, AppError> {
    let result = fetch_or_not_found(&state, id).await?;
    state.slot.put(&result).await?;
    Ok(Json(result))
}

#[derive(Deserialize)]
pub struct ConfidenceToggle {
    pub skill: String,
}

/// PATCH /api/v1/analyses/:id/confidence
///
/// Flips one skill between know/practice, adjusts the final score, and keeps
/// the current slot in sync when it holds the same analysis.
pub async fn handle_toggle_confidence(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(toggle): Json<ConfidenceToggle>,
) -> Result<Json<AnalysisResult>, AppError> {
    let mut result = fetch_or_not_found(&state, id).await?;
    let seen_updated_at = result.updated_at;

    if result.toggle_skill(&toggle.skill, Utc::now()).is_none() {
        return Err(AppError::UnprocessableEntity(format!(
            "Skill '{}' was not extracted for this analysis",
            toggle.skill
        )));
    }

    // The row may have changed between the fetch and the write; the store
    // only applies the update when it still carries the timestamp we read.
    if !history::update_confidence(&state.db, &result, seen_updated_at).await? {
        return Err(AppError::Conflict(format!(
            "Analysis {id} was modified concurrently, retry the toggle"
        )));
    }

    if state.slot.get().await?.map(|c| c.id) == Some(result.id) {
        state.slot.put(&result).await?;
    }

    Ok(Json(result))
}

/// DELETE /api/v1/analyses/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !history::delete_analysis(&state.db, id).await? {
        return Err(AppError::NotFound(format!("Analysis {id} not found")));
    }

    // Never leave a deleted record sitting in the current slot.
    if state.slot.get().await?.map(|c| c.id) == Some(id) {
        state.slot.clear().await?;
    }

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/analyses/:id/export
///
/// Plain-text readiness report for download.
pub async fn handle_export(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<String, AppError> {
    let result = fetch_or_not_found(&state, id).await?;
    Ok(render_report(&result))
}

async fn fetch_or_not_found(state: &AppState, id: Uuid) -> Result<AnalysisResult, AppError> {
    history::fetch_analysis(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Analysis {id} not found")))
}
