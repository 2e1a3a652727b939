#![allow(dead_code)]

//! The ephemeral current-analysis slot.
//!
//! Holds the single record a results view is looking at right now, separate
//! from durable history. Abstracted as a trait so handlers never touch Redis
//! directly; carried in `AppState` as `Arc<dyn CurrentSlot>`.

use async_trait::async_trait;
use redis::AsyncCommands;
use tokio::sync::Mutex;

use crate::analysis::engine::AnalysisResult;
use crate::errors::AppError;

const CURRENT_KEY: &str = "prepdeck:current_analysis";

/// Single-record scratch storage for the analysis being viewed.
#[async_trait]
pub trait CurrentSlot: Send + Sync {
    async fn put(&self, result: &AnalysisResult) -> Result<(), AppError>;
    async fn get(&self) -> Result<Option<AnalysisResult>, AppError>;
    async fn clear(&self) -> Result<(), AppError>;
}

/// Redis-backed slot used in production. One well-known key; the service is
/// single-user, matching the session-scoped slot it replaces.
pub struct RedisSlot {
    client: redis::Client,
}

impl RedisSlot {
    pub fn new(client: redis::Client) -> Self {
        Self { client }
    }

    async fn connection(&self) -> Result<redis::aio::MultiplexedConnection, AppError> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| AppError::Storage(e.to_string()))
    }
}

#[async_trait]
impl CurrentSlot for RedisSlot {
    async fn put(&self, result: &AnalysisResult) -> Result<(), AppError> {
        let payload =
            serde_json::to_string(result).map_err(|e| AppError::Storage(e.to_string()))?;
        let mut conn = self.connection().await?;
        conn.set::<_, _, ()>(CURRENT_KEY, payload)
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;
        Ok(())
    }

    async fn get(&self) -> Result<Option<AnalysisResult>, AppError> {
        let mut conn = self.connection().await?;
        let raw: Option<String> = conn
            .get(CURRENT_KEY)
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        raw.map(|payload| serde_json::from_str(&payload))
            .transpose()
            .map_err(|e| AppError::Storage(e.to_string()))
    }

    async fn clear(&self) -> Result<(), AppError> {
        let mut conn = self.connection().await?;
        conn.del::<_, ()>(CURRENT_KEY)
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;
        Ok(())
    }
}

/// In-memory slot backing tests.
#[derive(Default)]
pub struct MemorySlot {
    inner: Mutex<Option<AnalysisResult>>,
}

#[async_trait]
impl CurrentSlot for MemorySlot {
    async fn put(&self, result: &AnalysisResult) -> Result<(), AppError> {
        *self.inner.lock().await = Some(result.clone());
        Ok(())
    }

    async fn get(&self) -> Result<Option<AnalysisResult>, AppError> {
        Ok(self.inner.lock().await.clone())
    }

    async fn clear(&self) -> Result<(), AppError> {
        *self.inner.lock().await = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::engine::{analyze_jd, AnalysisRequest};

    fn sample_result() -> AnalysisResult {
        analyze_jd(&AnalysisRequest {
            company: "Acme".to_string(),
            role: "Backend Engineer".to_string(),
            jd_text: "Python and PostgreSQL experience required".to_string(),
        })
    }

    #[tokio::test]
    async fn test_memory_slot_starts_empty() {
        let slot = MemorySlot::default();
        assert!(slot.get().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_memory_slot_put_then_get_round_trips() {
        let slot = MemorySlot::default();
        let result = sample_result();

        slot.put(&result).await.unwrap();
        let stored = slot.get().await.unwrap().unwrap();
        assert_eq!(stored, result);
    }

    #[tokio::test]
    async fn test_memory_slot_put_overwrites() {
        let slot = MemorySlot::default();
        let first = sample_result();
        let second = sample_result();

        slot.put(&first).await.unwrap();
        slot.put(&second).await.unwrap();
        assert_eq!(slot.get().await.unwrap().unwrap().id, second.id);
    }

    #[tokio::test]
    async fn test_memory_slot_clear_empties() {
        let slot = MemorySlot::default();
        slot.put(&sample_result()).await.unwrap();
        slot.clear().await.unwrap();
        assert!(slot.get().await.unwrap().is_none());
    }
}
