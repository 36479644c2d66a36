use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{AudioAnalysis, ModelOutput, VideoAnalysis};

/// Everything the therapy model sees for one turn.
#[derive(Debug, Clone)]
pub struct TherapyContext<'a> {
    pub audio: &'a AudioAnalysis,
    pub video: &'a VideoAnalysis,
    pub questionnaires: &'a Value,
    pub past_turns: &'a Value,
}

#[async_trait]
pub trait TherapyModel: Send + Sync {
    async fn respond(&self, context: &TherapyContext<'_>) -> Result<ModelOutput, TherapyModelError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TherapyModelError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
