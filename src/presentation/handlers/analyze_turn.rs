use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::application::services::TurnError;
use crate::domain::{AudioAnalysis, TurnOutcome, TurnRequest, VideoAnalysis, VideoUrl};
use crate::presentation::state::AppState;

pub const MISSING_VIDEO_URL: &str = "Missing video url";

#[derive(Debug, Default, Deserialize)]
pub struct TurnRequestBody {
    #[serde(default)]
    pub questionnaires: Option<Value>,
    #[serde(default)]
    pub past_turns: Option<Value>,
    #[serde(default)]
    pub video_url: Option<Value>,
}

impl TurnRequestBody {
    /// `None` when the video reference is absent, null, not a string or blank.
    ///
    /// Absent or null `questionnaires` and `past_turns` become `{}` and `[]`;
    /// any other JSON value is forwarded untouched.
    pub fn into_turn_request(self) -> Option<TurnRequest> {
        let video_url = match self.video_url {
            Some(Value::String(raw)) => VideoUrl::parse(raw)?,
            _ => return None,
        };

        Some(TurnRequest::new(
            video_url,
            or_default(self.questionnaires, Value::Object(Map::new())),
            or_default(self.past_turns, Value::Array(Vec::new())),
        ))
    }
}

fn or_default(value: Option<Value>, default: Value) -> Value {
    match value {
        None | Some(Value::Null) => default,
        Some(value) => value,
    }
}

#[derive(Serialize)]
pub struct TurnResponse {
    #[serde(rename = "assemblyAI_output")]
    pub assembly_ai_output: AudioAnalysis,
    pub deepface_output: VideoAnalysis,
    pub bot_reply: String,
    pub diagnostic_match: bool,
    pub conversation_type: String,
    pub diagnostic_mapping: Value,
    pub emergency: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triggered_word: Option<String>,
}

impl From<TurnOutcome> for TurnResponse {
    fn from(outcome: TurnOutcome) -> Self {
        let bot_reply = outcome.bot_reply().to_string();
        let diagnostic_match = outcome.diagnostic_match();
        let conversation_type = outcome.conversation_type().to_string();
        let diagnostic_mapping = outcome.diagnostic_mapping();
        let emergency = outcome.is_emergency();
        let triggered_word = outcome.triggered_word().map(str::to_string);

        let (audio, video) = match outcome {
            TurnOutcome::Emergency { audio, video, .. } | TurnOutcome::Reply { audio, video, .. } => {
                (audio, video)
            }
        };

        Self {
            assembly_ai_output: audio,
            deepface_output: video,
            bot_reply,
            diagnostic_match,
            conversation_type,
            diagnostic_mapping,
            emergency,
            triggered_word,
        }
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Failure of one turn as seen by the client.
pub enum AnalyzeTurnError {
    MissingVideoUrl,
    Turn(TurnError),
}

impl IntoResponse for AnalyzeTurnError {
    fn into_response(self) -> Response {
        match self {
            AnalyzeTurnError::MissingVideoUrl => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(MISSING_VIDEO_URL)),
            )
                .into_response(),
            AnalyzeTurnError::Turn(TurnError::MissingTranscript) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(TurnError::MissingTranscript.to_string())),
            )
                .into_response(),
            AnalyzeTurnError::Turn(e) => {
                tracing::error!(error = %e, "Turn analysis failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("Internal server error")),
                )
                    .into_response()
            }
        }
    }
}

#[tracing::instrument(skip(state, body))]
pub async fn analyze_turn_handler(
    State(state): State<AppState>,
    Json(body): Json<TurnRequestBody>,
) -> Result<Json<TurnResponse>, AnalyzeTurnError> {
    let Some(request) = body.into_turn_request() else {
        tracing::warn!("Turn request without a video url");
        return Err(AnalyzeTurnError::MissingVideoUrl);
    };

    tracing::debug!(
        questionnaires = json_len(&request.questionnaires),
        past_turns = json_len(&request.past_turns),
        "Processing turn"
    );

    let outcome = state
        .turn_service
        .run_turn(&request)
        .await
        .map_err(AnalyzeTurnError::Turn)?;

    if outcome.is_emergency() {
        tracing::warn!("Returning emergency response");
    }

    Ok(Json(TurnResponse::from(outcome)))
}

fn json_len(value: &Value) -> usize {
    match value {
        Value::Object(map) => map.len(),
        Value::Array(items) => items.len(),
        _ => 1,
    }
}
