mod turn_service;

pub use turn_service::{TurnError, TurnService};
