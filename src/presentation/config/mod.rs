mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AssemblyAiSettings, DeepFaceSettings, LoggingSettings, OpenAiSettings, SafetySettings,
    ServerSettings, Settings,
};
