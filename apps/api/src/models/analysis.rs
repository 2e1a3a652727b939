use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use crate::analysis::engine::AnalysisResult;
use crate::errors::AppError;

/// One history row. Scores and timestamps are mirrored into columns for
/// ordering and listing; the full record lives in the JSONB payload.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AnalysisRow {
    pub id: Uuid,
    pub company: String,
    pub role: String,
    pub base_score: i32,
    pub final_score: i32,
    pub result: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AnalysisRow {
    /// Rehydrates the full result from the JSONB payload column.
    pub fn into_result(self) -> Result<AnalysisResult, AppError> {
        serde_json::from_value(self.result).map_err(|e| AppError::Storage(e.to_string()))
    }
}
