mod analyze_turn;
mod health;

pub use analyze_turn::{
    AnalyzeTurnError, ErrorResponse, MISSING_VIDEO_URL, TurnRequestBody, TurnResponse,
    analyze_turn_handler,
};
pub use health::{HealthResponse, LIVENESS_MESSAGE, health_handler, root_handler};
