mod openai_therapy_model;
mod therapy_prompt;

pub use openai_therapy_model::{OpenAiTherapyConfig, OpenAiTherapyModel, parse_model_output};
pub use therapy_prompt::{THERAPY_SYSTEM_PROMPT, build_turn_message};
