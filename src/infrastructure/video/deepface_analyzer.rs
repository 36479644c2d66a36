use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value, json};

use crate::application::ports::{VideoAnalysisError, VideoAnalyzer};
use crate::domain::{VideoAnalysis, VideoUrl};

#[derive(Debug, Clone)]
pub struct DeepFaceConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub request_timeout: Duration,
}

/// Facial-emotion analysis backed by a DeepFace REST server.
pub struct DeepFaceAnalyzer {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    #[serde(default)]
    results: Vec<Value>,
}

impl DeepFaceAnalyzer {
    pub fn new(config: DeepFaceConfig) -> Result<Self, VideoAnalysisError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| VideoAnalysisError::ApiRequestFailed(format!("client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!("{}/analyze", config.base_url.trim_end_matches('/')),
            api_key: config.api_key.filter(|k| !k.is_empty()),
        })
    }
}

#[async_trait]
impl VideoAnalyzer for DeepFaceAnalyzer {
    async fn analyze(&self, video_url: &VideoUrl) -> Result<VideoAnalysis, VideoAnalysisError> {
        let body = json!({
            "img_path": video_url.as_str(),
            "actions": ["emotion"],
            "enforce_detection": false,
        });

        tracing::debug!(endpoint = %self.endpoint, "Sending media to DeepFace");

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| VideoAnalysisError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(VideoAnalysisError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let result: AnalyzeResponse = response
            .json()
            .await
            .map_err(|e| VideoAnalysisError::InvalidResponse(format!("parse response: {}", e)))?;

        tracing::info!(
            frames = result.results.len(),
            "DeepFace emotion analysis completed"
        );

        Ok(summarize_frames(result.results))
    }
}

/// Builds the per-turn summary: raw frames, the most frequent dominant
/// emotion (ties broken alphabetically) and mean score per emotion.
pub fn summarize_frames(frames: Vec<Value>) -> VideoAnalysis {
    let (dominant_emotion, average_emotions) = {
        let mut dominant_counts: BTreeMap<&str, usize> = BTreeMap::new();
        let mut score_totals: BTreeMap<&str, (f64, usize)> = BTreeMap::new();

        for frame in &frames {
            if let Some(dominant) = frame.get("dominant_emotion").and_then(Value::as_str) {
                *dominant_counts.entry(dominant).or_default() += 1;
            }
            if let Some(emotions) = frame.get("emotion").and_then(Value::as_object) {
                for (name, score) in emotions {
                    if let Some(score) = score.as_f64() {
                        let entry = score_totals.entry(name.as_str()).or_default();
                        entry.0 += score;
                        entry.1 += 1;
                    }
                }
            }
        }

        // BTreeMap iterates alphabetically and max_by_key keeps the last of equal counts;
        // reverse first to keep the alphabetically first one instead.
        let dominant_emotion = dominant_counts
            .iter()
            .rev()
            .max_by_key(|(_, count)| **count)
            .map(|(name, _)| Value::String((*name).to_string()))
            .unwrap_or(Value::Null);

        let average_emotions: Map<String, Value> = score_totals
            .iter()
            .map(|(name, (total, count))| ((*name).to_string(), json!(total / *count as f64)))
            .collect();

        (dominant_emotion, average_emotions)
    };

    let mut fields = Map::new();
    fields.insert("frame_count".to_string(), json!(frames.len()));
    fields.insert("dominant_emotion".to_string(), dominant_emotion);
    fields.insert(
        "average_emotions".to_string(),
        Value::Object(average_emotions),
    );
    fields.insert("frames".to_string(), Value::Array(frames));

    VideoAnalysis::new(fields)
}
