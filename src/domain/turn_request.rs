use serde_json::Value;

use super::VideoUrl;

/// A validated analysis request for a single conversational turn.
///
/// Questionnaire answers and conversation history are opaque to the service
/// and reach the therapy model exactly as the client sent them.
#[derive(Debug, Clone)]
pub struct TurnRequest {
    pub video_url: VideoUrl,
    pub questionnaires: Value,
    pub past_turns: Value,
}

impl TurnRequest {
    pub fn new(video_url: VideoUrl, questionnaires: Value, past_turns: Value) -> Self {
        Self {
            video_url,
            questionnaires,
            past_turns,
        }
    }
}
