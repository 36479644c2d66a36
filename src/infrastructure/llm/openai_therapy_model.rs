use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{TherapyContext, TherapyModel, TherapyModelError};
use crate::domain::ModelOutput;

use super::therapy_prompt::{THERAPY_SYSTEM_PROMPT, build_turn_message};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone)]
pub struct OpenAiTherapyConfig {
    pub api_key: String,
    pub base_url: Option<String>,
    pub chat_model: String,
    pub temperature: f32,
    pub request_timeout: Duration,
}

/// Therapy assistant backed by an OpenAI-compatible chat completions endpoint.
pub struct OpenAiTherapyModel {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ResponseFormat {
    r#type: &'static str,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl OpenAiTherapyModel {
    pub fn new(config: OpenAiTherapyConfig) -> Result<Self, TherapyModelError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| TherapyModelError::ApiRequestFailed(format!("client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            api_key: config.api_key,
            model: config.chat_model,
            temperature: config.temperature,
        })
    }

    fn build_messages(&self, context: &TherapyContext<'_>) -> Vec<ChatMessage> {
        vec![
            ChatMessage {
                role: "system".to_string(),
                content: Some(THERAPY_SYSTEM_PROMPT.to_string()),
            },
            ChatMessage {
                role: "user".to_string(),
                content: Some(build_turn_message(context).to_string()),
            },
        ]
    }
}

#[async_trait]
impl TherapyModel for OpenAiTherapyModel {
    async fn respond(&self, context: &TherapyContext<'_>) -> Result<ModelOutput, TherapyModelError> {
        let url = format!("{}/chat/completions", self.base_url);
        let request_body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: self.build_messages(context),
            temperature: self.temperature,
            response_format: ResponseFormat {
                r#type: "json_object",
            },
        };

        tracing::debug!(
            model = %self.model,
            past_turns = context.past_turns.as_array().map_or(0, Vec::len),
            "Sending turn to therapy model"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| TherapyModelError::ApiRequestFailed(format!("request: {}", e)))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TherapyModelError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TherapyModelError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| TherapyModelError::InvalidResponse(e.to_string()))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| TherapyModelError::InvalidResponse("empty completion".to_string()))?;

        let output = parse_model_output(&content)?;

        tracing::info!(
            reply_chars = output.bot_reply.len(),
            "Therapy model completion received"
        );

        Ok(output)
    }
}

/// Parses the model's JSON reply, tolerating a surrounding markdown code fence.
pub fn parse_model_output(content: &str) -> Result<ModelOutput, TherapyModelError> {
    let trimmed = content.trim();
    let json = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.trim_end().strip_suffix("```"))
        .unwrap_or(trimmed)
        .trim();

    serde_json::from_str(json)
        .map_err(|e| TherapyModelError::InvalidResponse(format!("model output: {}", e)))
}
