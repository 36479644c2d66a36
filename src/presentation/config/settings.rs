use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::domain::DEFAULT_TRIGGER_PHRASES;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub assemblyai: AssemblyAiSettings,
    pub deepface: DeepFaceSettings,
    pub openai: OpenAiSettings,
    pub safety: SafetySettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssemblyAiSettings {
    pub api_key: String,
    pub base_url: String,
    pub poll_interval_ms: u64,
    pub max_polls: u32,
    pub request_timeout_secs: u64,
}

impl AssemblyAiSettings {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeepFaceSettings {
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    pub request_timeout_secs: u64,
}

impl DeepFaceSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiSettings {
    pub api_key: String,
    pub base_url: String,
    pub chat_model: String,
    pub temperature: f32,
    pub request_timeout_secs: u64,
}

impl OpenAiSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SafetySettings {
    pub trigger_phrases: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Settings {
    /// Layers built-in defaults, `appsettings.{environment}` and `APP__*` variables.
    ///
    /// The plain `ASSEMBLYAI_API_KEY`, `DEEPFACE_API_KEY` and `OPENAI_API_KEY`
    /// variables win over every other source.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let default_phrases: Vec<String> = DEFAULT_TRIGGER_PHRASES
            .iter()
            .map(|p| (*p).to_string())
            .collect();

        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("assemblyai.api_key", "")?
            .set_default("assemblyai.base_url", "https://api.assemblyai.com")?
            .set_default("assemblyai.poll_interval_ms", 3000)?
            .set_default("assemblyai.max_polls", 200)?
            .set_default("assemblyai.request_timeout_secs", 30)?
            .set_default("deepface.base_url", "http://localhost:5005")?
            .set_default("deepface.request_timeout_secs", 120)?
            .set_default("openai.api_key", "")?
            .set_default("openai.base_url", "https://api.openai.com/v1")?
            .set_default("openai.chat_model", "gpt-4o-mini")?
            .set_default("openai.temperature", 0.7)?
            .set_default("openai.request_timeout_secs", 60)?
            .set_default("safety.trigger_phrases", default_phrases)?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("safety.trigger_phrases")
                    .try_parsing(true),
            )
            .set_override_option("assemblyai.api_key", std::env::var("ASSEMBLYAI_API_KEY").ok())?
            .set_override_option("deepface.api_key", std::env::var("DEEPFACE_API_KEY").ok())?
            .set_override_option("openai.api_key", std::env::var("OPENAI_API_KEY").ok())?
            .build()?
            .try_deserialize()
    }
}
