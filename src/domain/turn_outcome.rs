use serde_json::Value;

use super::model_output::EMERGENCY;
use super::{AudioAnalysis, ModelOutput, VideoAnalysis};

pub const EMERGENCY_REPLY: &str = "It sounds like you might be in distress. Please reach out to immediate help or call a trusted person right now. You're not alone.";

/// Result of one turn: either the fixed distress reply or the model's reply, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    Emergency {
        audio: AudioAnalysis,
        video: VideoAnalysis,
        triggered_word: String,
    },
    Reply {
        audio: AudioAnalysis,
        video: VideoAnalysis,
        output: ModelOutput,
    },
}

impl TurnOutcome {
    pub fn is_emergency(&self) -> bool {
        matches!(self, TurnOutcome::Emergency { .. })
    }

    pub fn audio(&self) -> &AudioAnalysis {
        match self {
            TurnOutcome::Emergency { audio, .. } | TurnOutcome::Reply { audio, .. } => audio,
        }
    }

    pub fn video(&self) -> &VideoAnalysis {
        match self {
            TurnOutcome::Emergency { video, .. } | TurnOutcome::Reply { video, .. } => video,
        }
    }

    pub fn bot_reply(&self) -> &str {
        match self {
            TurnOutcome::Emergency { .. } => EMERGENCY_REPLY,
            TurnOutcome::Reply { output, .. } => &output.bot_reply,
        }
    }

    pub fn conversation_type(&self) -> &str {
        match self {
            TurnOutcome::Emergency { .. } => EMERGENCY,
            TurnOutcome::Reply { output, .. } => &output.conversation_type,
        }
    }

    pub fn diagnostic_match(&self) -> bool {
        match self {
            TurnOutcome::Emergency { .. } => false,
            TurnOutcome::Reply { output, .. } => output.has_diagnostic_match(),
        }
    }

    /// Emergencies always report an empty list, matching what the frontend stores.
    pub fn diagnostic_mapping(&self) -> Value {
        match self {
            TurnOutcome::Emergency { .. } => Value::Array(Vec::new()),
            TurnOutcome::Reply { output, .. } => output.diagnostic_mapping.clone(),
        }
    }

    pub fn triggered_word(&self) -> Option<&str> {
        match self {
            TurnOutcome::Emergency { triggered_word, .. } => Some(triggered_word),
            TurnOutcome::Reply { .. } => None,
        }
    }
}
