mod assemblyai_analyzer;

pub use assemblyai_analyzer::{AssemblyAiAnalyzer, AssemblyAiConfig};
