/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    pub default_filter: String,
}

impl TracingConfig {
    pub fn new(environment: impl Into<String>, json_format: bool, level: &str) -> Self {
        Self {
            environment: environment.into(),
            json_format,
            default_filter: format!("{level},turn_analyzer=debug,tower_http=debug"),
        }
    }

    /// `LOG_FORMAT=json` forces JSON output whatever the settings say.
    pub fn with_env_overrides(mut self) -> Self {
        if std::env::var("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false)
        {
            self.json_format = true;
        }
        self
    }
}
