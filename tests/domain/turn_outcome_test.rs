use serde_json::json;

use turn_analyzer::domain::{
    AudioAnalysis, EMERGENCY_REPLY, ModelOutput, TurnOutcome, VideoAnalysis,
};

fn audio() -> AudioAnalysis {
    AudioAnalysis::from_value(json!({"transcript": "text"}))
}

#[test]
fn given_emergency_outcome_when_reading_fields_then_uses_fixed_values() {
    let outcome = TurnOutcome::Emergency {
        audio: audio(),
        video: VideoAnalysis::default(),
        triggered_word: "end it all".to_string(),
    };

    assert!(outcome.is_emergency());
    assert_eq!(outcome.bot_reply(), EMERGENCY_REPLY);
    assert_eq!(outcome.conversation_type(), "emergency");
    assert_eq!(outcome.diagnostic_mapping(), json!([]));
    assert!(!outcome.diagnostic_match());
    assert_eq!(outcome.triggered_word(), Some("end it all"));
}

#[test]
fn given_reply_outcome_with_mapping_when_reading_fields_then_reports_match() {
    let outcome = TurnOutcome::Reply {
        audio: audio(),
        video: VideoAnalysis::default(),
        output: ModelOutput::new("ok").with_diagnostic_mapping(json!({"GAD-7": ["q1"]})),
    };

    assert!(!outcome.is_emergency());
    assert!(outcome.diagnostic_match());
    assert_eq!(outcome.triggered_word(), None);
    assert_eq!(outcome.audio().transcript(), Some("text"));
}

#[test]
fn given_reply_outcome_with_empty_list_mapping_when_reading_fields_then_no_match() {
    let outcome = TurnOutcome::Reply {
        audio: audio(),
        video: VideoAnalysis::default(),
        output: ModelOutput::new("ok").with_diagnostic_mapping(json!([])),
    };

    assert!(!outcome.diagnostic_match());
}
