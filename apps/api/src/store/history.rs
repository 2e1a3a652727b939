//! Postgres-backed analysis history.
//!
//! Records are written once by the analyze endpoint and mutated in place only
//! by confidence toggles (`skill_confidence_map`, `final_score`, `updated_at`).

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::analysis::engine::AnalysisResult;
use crate::errors::AppError;
use crate::models::analysis::AnalysisRow;

/// Inserts a freshly computed analysis.
pub async fn insert_analysis(pool: &PgPool, result: &AnalysisResult) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO analyses
            (id, company, role, base_score, final_score, result, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(result.id)
    .bind(&result.company)
    .bind(&result.role)
    .bind(result.base_score as i32)
    .bind(result.final_score as i32)
    .bind(encode_payload(result)?)
    .bind(result.created_at)
    .bind(result.updated_at)
    .execute(pool)
    .await?;

    info!("Stored analysis {} (company: {:?})", result.id, result.company);
    Ok(())
}

/// Returns the full history, newest first. Ties on `created_at` break on id
/// so the ordering is stable.
pub async fn list_analyses(pool: &PgPool) -> Result<Vec<AnalysisResult>, AppError> {
    let rows: Vec<AnalysisRow> =
        sqlx::query_as("SELECT * FROM analyses ORDER BY created_at DESC, id")
            .fetch_all(pool)
            .await?;

    rows.into_iter().map(AnalysisRow::into_result).collect()
}

/// Fetches one analysis by id.
pub async fn fetch_analysis(pool: &PgPool, id: Uuid) -> Result<Option<AnalysisResult>, AppError> {
    let row: Option<AnalysisRow> = sqlx::query_as("SELECT * FROM analyses WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.map(AnalysisRow::into_result).transpose()
}

/// Persists a confidence-toggle mutation: final score, payload, `updated_at`.
///
/// The write only lands when the row still carries `expected_updated_at`, so
/// a toggle racing another writer fails instead of silently overwriting it.
/// Returns false when the row was missing or had already moved on.
pub async fn update_confidence(
    pool: &PgPool,
    result: &AnalysisResult,
    expected_updated_at: DateTime<Utc>,
) -> Result<bool, AppError> {
    let outcome = sqlx::query(
        r#"
        UPDATE analyses
        SET final_score = $2, result = $3, updated_at = $4
        WHERE id = $1 AND updated_at = $5
        "#,
    )
    .bind(result.id)
    .bind(result.final_score as i32)
    .bind(encode_payload(result)?)
    .bind(result.updated_at)
    .bind(expected_updated_at)
    .execute(pool)
    .await?;

    Ok(outcome.rows_affected() > 0)
}

/// Deletes one analysis. Returns false if no row matched.
pub async fn delete_analysis(pool: &PgPool, id: Uuid) -> Result<bool, AppError> {
    let outcome = sqlx::query("DELETE FROM analyses WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if outcome.rows_affected() > 0 {
        info!("Deleted analysis {id}");
        Ok(true)
    } else {
        Ok(false)
    }
}

fn encode_payload(result: &AnalysisResult) -> Result<serde_json::Value, AppError> {
    serde_json::to_value(result).map_err(|e| AppError::Storage(e.to_string()))
}
