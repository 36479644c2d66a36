use async_trait::async_trait;

use crate::domain::{AudioAnalysis, VideoUrl};

#[async_trait]
pub trait AudioAnalyzer: Send + Sync {
    async fn analyze(&self, video_url: &VideoUrl) -> Result<AudioAnalysis, AudioAnalysisError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioAnalysisError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("transcription failed: {0}")]
    TranscriptionFailed(String),
    #[error("transcription did not complete after {0} polls")]
    PollLimitExceeded(u32),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
