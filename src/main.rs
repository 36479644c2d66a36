use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use turn_analyzer::application::services::TurnService;
use turn_analyzer::domain::TriggerPhraseMatcher;
use turn_analyzer::infrastructure::audio::{AssemblyAiAnalyzer, AssemblyAiConfig};
use turn_analyzer::infrastructure::llm::{OpenAiTherapyConfig, OpenAiTherapyModel};
use turn_analyzer::infrastructure::observability::{TracingConfig, init_tracing};
use turn_analyzer::infrastructure::video::{DeepFaceAnalyzer, DeepFaceConfig};
use turn_analyzer::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(
        TracingConfig::new(
            environment.as_str(),
            settings.logging.json,
            &settings.logging.level,
        )
        .with_env_overrides(),
        settings.server.port,
    );

    if settings.assemblyai.api_key.is_empty() {
        tracing::warn!("ASSEMBLYAI_API_KEY is not set; audio analysis requests will be rejected");
    }
    if settings.openai.api_key.is_empty() {
        tracing::warn!("OPENAI_API_KEY is not set; therapy model requests will be rejected");
    }

    let audio_analyzer = AssemblyAiAnalyzer::new(AssemblyAiConfig {
        api_key: settings.assemblyai.api_key.clone(),
        base_url: Some(settings.assemblyai.base_url.clone()),
        poll_interval: settings.assemblyai.poll_interval(),
        max_polls: settings.assemblyai.max_polls,
        request_timeout: settings.assemblyai.request_timeout(),
    })?;

    let video_analyzer = DeepFaceAnalyzer::new(DeepFaceConfig {
        base_url: settings.deepface.base_url.clone(),
        api_key: settings.deepface.api_key.clone(),
        request_timeout: settings.deepface.request_timeout(),
    })?;

    let therapy_model = OpenAiTherapyModel::new(OpenAiTherapyConfig {
        api_key: settings.openai.api_key.clone(),
        base_url: Some(settings.openai.base_url.clone()),
        chat_model: settings.openai.chat_model.clone(),
        temperature: settings.openai.temperature,
        request_timeout: settings.openai.request_timeout(),
    })?;

    let trigger_matcher = TriggerPhraseMatcher::new(&settings.safety.trigger_phrases);
    tracing::info!(
        trigger_phrases = trigger_matcher.len(),
        "Trigger phrase matcher ready"
    );

    let turn_service = Arc::new(TurnService::new(
        Arc::new(audio_analyzer),
        Arc::new(video_analyzer),
        Arc::new(therapy_model),
        trigger_matcher,
    ));

    let router = create_router(AppState::new(turn_service));

    let host: std::net::IpAddr = settings
        .server
        .host
        .parse()
        .with_context(|| format!("Invalid server host: {}", settings.server.host))?;
    let addr = SocketAddr::new(host, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
