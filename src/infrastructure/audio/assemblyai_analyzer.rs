use std::time::Duration;

use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};

use crate::application::ports::{AudioAnalysisError, AudioAnalyzer};
use crate::domain::{AudioAnalysis, VideoUrl};
use crate::infrastructure::observability::redact_transcript;

const DEFAULT_BASE_URL: &str = "https://api.assemblyai.com";

/// Connection and polling parameters for the AssemblyAI transcript API.
#[derive(Debug, Clone)]
pub struct AssemblyAiConfig {
    pub api_key: String,
    pub base_url: Option<String>,
    pub poll_interval: Duration,
    pub max_polls: u32,
    pub request_timeout: Duration,
}

/// Speech-to-text plus sentiment analysis backed by AssemblyAI.
///
/// Submits the media URL as a transcript job, then polls the job until it
/// completes or fails.
pub struct AssemblyAiAnalyzer {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    poll_interval: Duration,
    max_polls: u32,
}

#[derive(Debug, Deserialize)]
struct TranscriptJob {
    id: String,
    status: String,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    confidence: Option<f64>,
    #[serde(default)]
    audio_duration: Option<f64>,
    #[serde(default)]
    sentiment_analysis_results: Option<Value>,
}

impl AssemblyAiAnalyzer {
    pub fn new(config: AssemblyAiConfig) -> Result<Self, AudioAnalysisError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AudioAnalysisError::ApiRequestFailed(format!("client: {}", e)))?;

        Ok(Self {
            client,
            api_key: config.api_key,
            base_url: config
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            poll_interval: config.poll_interval,
            max_polls: config.max_polls,
        })
    }

    async fn submit(&self, video_url: &VideoUrl) -> Result<TranscriptJob, AudioAnalysisError> {
        let url = format!("{}/v2/transcript", self.base_url);
        let body = json!({
            "audio_url": video_url.as_str(),
            "sentiment_analysis": true,
        });

        self.send(self.client.post(&url).json(&body)).await
    }

    async fn fetch(&self, transcript_id: &str) -> Result<TranscriptJob, AudioAnalysisError> {
        let url = format!("{}/v2/transcript/{}", self.base_url, transcript_id);
        self.send(self.client.get(&url)).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, AudioAnalysisError> {
        let response = request
            .header("authorization", &self.api_key)
            .send()
            .await
            .map_err(|e| AudioAnalysisError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(AudioAnalysisError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AudioAnalysisError::InvalidResponse(format!("parse response: {}", e)))
    }
}

fn into_analysis(job: TranscriptJob) -> AudioAnalysis {
    let mut fields = Map::new();
    fields.insert("transcript_id".to_string(), Value::String(job.id));

    if let Some(text) = job.text.filter(|t| !t.is_empty()) {
        fields.insert("transcript".to_string(), Value::String(text));
    }
    if let Some(confidence) = job.confidence {
        fields.insert("confidence".to_string(), json!(confidence));
    }
    if let Some(duration) = job.audio_duration {
        fields.insert("audio_duration".to_string(), json!(duration));
    }
    if let Some(sentiments) = job.sentiment_analysis_results {
        fields.insert("sentiment_analysis_results".to_string(), sentiments);
    }

    AudioAnalysis::new(fields)
}

#[async_trait]
impl AudioAnalyzer for AssemblyAiAnalyzer {
    async fn analyze(&self, video_url: &VideoUrl) -> Result<AudioAnalysis, AudioAnalysisError> {
        tracing::debug!(base_url = %self.base_url, "Submitting media to AssemblyAI");

        let mut job = self.submit(video_url).await?;
        let mut polls = 0;

        loop {
            match job.status.as_str() {
                "completed" => break,
                "error" => {
                    return Err(AudioAnalysisError::TranscriptionFailed(
                        job.error.unwrap_or_else(|| "unknown error".to_string()),
                    ));
                }
                _ => {}
            }

            if polls >= self.max_polls {
                return Err(AudioAnalysisError::PollLimitExceeded(self.max_polls));
            }
            polls += 1;

            tokio::time::sleep(self.poll_interval).await;
            job = self.fetch(&job.id).await?;
        }

        tracing::info!(
            transcript_id = %job.id,
            polls = polls,
            transcript = %redact_transcript(job.text.as_deref().unwrap_or_default()),
            "AssemblyAI transcription completed"
        );

        Ok(into_analysis(job))
    }
}
