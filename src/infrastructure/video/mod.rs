mod deepface_analyzer;

pub use deepface_analyzer::{DeepFaceAnalyzer, DeepFaceConfig, summarize_frames};
