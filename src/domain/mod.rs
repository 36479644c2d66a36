mod analysis;
mod model_output;
mod trigger_phrases;
mod turn_outcome;
mod turn_request;
mod video_url;

pub use analysis::{AudioAnalysis, VideoAnalysis};
pub use model_output::{EMERGENCY, FREE_TALK, ModelOutput, is_non_empty};
pub use trigger_phrases::{DEFAULT_TRIGGER_PHRASES, TriggerMatch, TriggerPhraseMatcher};
pub use turn_outcome::{EMERGENCY_REPLY, TurnOutcome};
pub use turn_request::TurnRequest;
pub use video_url::VideoUrl;
