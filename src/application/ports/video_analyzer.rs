use async_trait::async_trait;

use crate::domain::{VideoAnalysis, VideoUrl};

#[async_trait]
pub trait VideoAnalyzer: Send + Sync {
    async fn analyze(&self, video_url: &VideoUrl) -> Result<VideoAnalysis, VideoAnalysisError>;
}

#[derive(Debug, thiserror::Error)]
pub enum VideoAnalysisError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
