use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::Router;
use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use serde_json::{Value, json};

use turn_analyzer::application::ports::{AudioAnalysisError, AudioAnalyzer};
use turn_analyzer::domain::VideoUrl;
use turn_analyzer::infrastructure::audio::{AssemblyAiAnalyzer, AssemblyAiConfig};

use crate::helpers::start_mock_server;

fn analyzer(base_url: &str, max_polls: u32) -> AssemblyAiAnalyzer {
    AssemblyAiAnalyzer::new(AssemblyAiConfig {
        api_key: "test-key".to_string(),
        base_url: Some(base_url.to_string()),
        poll_interval: Duration::from_millis(1),
        max_polls,
        request_timeout: Duration::from_secs(5),
    })
    .unwrap()
}

fn video_url() -> VideoUrl {
    VideoUrl::parse("https://cdn.example.com/turn.webm").unwrap()
}

/// Transcript API that reports `processing` for `pending_polls` fetches, then `final_job`.
fn transcript_api(pending_polls: usize, final_job: Value) -> Router {
    let fetches = Arc::new(AtomicUsize::new(0));

    Router::new()
        .route(
            "/v2/transcript",
            post(|headers: HeaderMap, body: axum::Json<Value>| async move {
                if headers.get("authorization").and_then(|v| v.to_str().ok()) != Some("test-key") {
                    return (StatusCode::UNAUTHORIZED, "bad key").into_response();
                }
                assert_eq!(body["audio_url"], "https://cdn.example.com/turn.webm");
                assert_eq!(body["sentiment_analysis"], true);
                axum::Json(json!({"id": "tr_1", "status": "queued"})).into_response()
            }),
        )
        .route(
            "/v2/transcript/{id}",
            get(move |Path(id): Path<String>| {
                let fetches = Arc::clone(&fetches);
                let final_job = final_job.clone();
                async move {
                    assert_eq!(id, "tr_1");
                    let seen = fetches.fetch_add(1, Ordering::SeqCst);
                    if seen < pending_polls {
                        axum::Json(json!({"id": "tr_1", "status": "processing"}))
                    } else {
                        axum::Json(final_job)
                    }
                }
            }),
        )
}

#[tokio::test]
async fn given_completed_job_when_analyzing_then_returns_transcript_and_metrics() {
    let app = transcript_api(
        2,
        json!({
            "id": "tr_1",
            "status": "completed",
            "text": "I had a good day",
            "confidence": 0.94,
            "audio_duration": 12.5,
            "sentiment_analysis_results": [{"text": "I had a good day", "sentiment": "POSITIVE"}]
        }),
    );
    let (base_url, shutdown_tx) = start_mock_server(app).await;

    let result = analyzer(&base_url, 10).analyze(&video_url()).await.unwrap();

    assert_eq!(result.transcript(), Some("I had a good day"));
    assert_eq!(result.fields()["confidence"], 0.94);
    assert_eq!(result.fields()["audio_duration"], 12.5);
    assert_eq!(
        result.fields()["sentiment_analysis_results"][0]["sentiment"],
        "POSITIVE"
    );
    assert_eq!(result.fields()["transcript_id"], "tr_1");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_completed_job_without_text_when_analyzing_then_omits_transcript() {
    let app = transcript_api(0, json!({"id": "tr_1", "status": "completed", "text": null}));
    let (base_url, shutdown_tx) = start_mock_server(app).await;

    let result = analyzer(&base_url, 10).analyze(&video_url()).await.unwrap();

    assert_eq!(result.transcript(), None);
    assert!(!result.fields().contains_key("transcript"));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_failed_job_when_analyzing_then_returns_transcription_error() {
    let app = transcript_api(
        0,
        json!({"id": "tr_1", "status": "error", "error": "Download error"}),
    );
    let (base_url, shutdown_tx) = start_mock_server(app).await;

    let result = analyzer(&base_url, 10).analyze(&video_url()).await;

    match result {
        Err(AudioAnalysisError::TranscriptionFailed(message)) => {
            assert_eq!(message, "Download error")
        }
        other => panic!("expected transcription failure, got {:?}", other),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_job_that_never_finishes_when_analyzing_then_stops_after_poll_limit() {
    let app = transcript_api(usize::MAX, json!({}));
    let (base_url, shutdown_tx) = start_mock_server(app).await;

    let result = analyzer(&base_url, 3).analyze(&video_url()).await;

    assert!(matches!(result, Err(AudioAnalysisError::PollLimitExceeded(3))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_rejected_api_key_when_analyzing_then_returns_api_error() {
    let app = transcript_api(0, json!({}));
    let (base_url, shutdown_tx) = start_mock_server(app).await;

    let analyzer = AssemblyAiAnalyzer::new(AssemblyAiConfig {
        api_key: "wrong".to_string(),
        base_url: Some(base_url),
        poll_interval: Duration::from_millis(1),
        max_polls: 1,
        request_timeout: Duration::from_secs(5),
    })
    .unwrap();

    let result = analyzer.analyze(&video_url()).await;

    assert!(matches!(result, Err(AudioAnalysisError::ApiRequestFailed(_))));
    shutdown_tx.send(()).ok();
}
