use std::sync::Arc;

use crate::application::ports::{
    AudioAnalysisError, AudioAnalyzer, TherapyContext, TherapyModel, TherapyModelError,
    VideoAnalysisError, VideoAnalyzer,
};
use crate::domain::{TriggerPhraseMatcher, TurnOutcome, TurnRequest};

/// Runs one conversational turn: analyze media, screen the transcript, then consult the model.
pub struct TurnService {
    audio_analyzer: Arc<dyn AudioAnalyzer>,
    video_analyzer: Arc<dyn VideoAnalyzer>,
    therapy_model: Arc<dyn TherapyModel>,
    trigger_matcher: TriggerPhraseMatcher,
}

impl TurnService {
    pub fn new(
        audio_analyzer: Arc<dyn AudioAnalyzer>,
        video_analyzer: Arc<dyn VideoAnalyzer>,
        therapy_model: Arc<dyn TherapyModel>,
        trigger_matcher: TriggerPhraseMatcher,
    ) -> Self {
        Self {
            audio_analyzer,
            video_analyzer,
            therapy_model,
            trigger_matcher,
        }
    }

    #[tracing::instrument(skip(self, request), fields(video_host = request.video_url.host().unwrap_or("-")))]
    pub async fn run_turn(&self, request: &TurnRequest) -> Result<TurnOutcome, TurnError> {
        let (audio, video) = tokio::join!(
            self.audio_analyzer.analyze(&request.video_url),
            self.video_analyzer.analyze(&request.video_url),
        );
        let audio = audio?;
        let video = video?;

        let transcript = audio.transcript().ok_or(TurnError::MissingTranscript)?;
        tracing::debug!(transcript_chars = transcript.len(), "Media analysis completed");

        if let Some(trigger) = self.trigger_matcher.find(transcript) {
            tracing::warn!(triggered_word = %trigger.phrase, "Trigger phrase detected, skipping model");
            return Ok(TurnOutcome::Emergency {
                audio,
                video,
                triggered_word: trigger.phrase,
            });
        }

        let output = self
            .therapy_model
            .respond(&TherapyContext {
                audio: &audio,
                video: &video,
                questionnaires: &request.questionnaires,
                past_turns: &request.past_turns,
            })
            .await?;

        tracing::info!(
            conversation_type = %output.conversation_type,
            diagnostic_match = output.has_diagnostic_match(),
            "Therapy model replied"
        );

        Ok(TurnOutcome::Reply {
            audio,
            video,
            output,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TurnError {
    #[error("Missing transcript")]
    MissingTranscript,
    #[error("audio analysis: {0}")]
    AudioAnalysis(#[from] AudioAnalysisError),
    #[error("video analysis: {0}")]
    VideoAnalysis(#[from] VideoAnalysisError),
    #[error("therapy model: {0}")]
    TherapyModel(#[from] TherapyModelError),
}
