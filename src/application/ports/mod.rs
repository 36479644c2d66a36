mod audio_analyzer;
mod therapy_model;
mod video_analyzer;

pub use audio_analyzer::{AudioAnalysisError, AudioAnalyzer};
pub use therapy_model::{TherapyContext, TherapyModel, TherapyModelError};
pub use video_analyzer::{VideoAnalysisError, VideoAnalyzer};
