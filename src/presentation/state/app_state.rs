use std::sync::Arc;

use crate::application::services::TurnService;

/// Immutable per-process state built once at startup and shared with every handler.
#[derive(Clone)]
pub struct AppState {
    pub turn_service: Arc<TurnService>,
}

impl AppState {
    pub fn new(turn_service: Arc<TurnService>) -> Self {
        Self { turn_service }
    }
}
