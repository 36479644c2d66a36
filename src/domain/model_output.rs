use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

pub const FREE_TALK: &str = "free_talk";
pub const EMERGENCY: &str = "emergency";

/// Reply and classification produced by the therapy model for one turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelOutput {
    #[serde(default)]
    pub bot_reply: String,
    #[serde(default = "default_conversation_type", deserialize_with = "conversation_type_or_default")]
    pub conversation_type: String,
    #[serde(default = "empty_mapping", deserialize_with = "mapping_or_empty")]
    pub diagnostic_mapping: Value,
}

impl ModelOutput {
    pub fn new(bot_reply: impl Into<String>) -> Self {
        Self {
            bot_reply: bot_reply.into(),
            conversation_type: default_conversation_type(),
            diagnostic_mapping: empty_mapping(),
        }
    }

    pub fn with_conversation_type(mut self, conversation_type: impl Into<String>) -> Self {
        self.conversation_type = conversation_type.into();
        self
    }

    pub fn with_diagnostic_mapping(mut self, mapping: Value) -> Self {
        self.diagnostic_mapping = mapping;
        self
    }

    pub fn has_diagnostic_match(&self) -> bool {
        is_non_empty(&self.diagnostic_mapping)
    }
}

/// Truthiness of a classification payload: empty containers, `""`, `false` and `null` are empty.
pub fn is_non_empty(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(_) => true,
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn default_conversation_type() -> String {
    FREE_TALK.to_string()
}

fn empty_mapping() -> Value {
    Value::Object(Map::new())
}

fn conversation_type_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .filter(|s| !s.is_empty())
        .unwrap_or_else(default_conversation_type))
}

fn mapping_or_empty<'de, D>(deserializer: D) -> Result<Value, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(if value.is_null() { empty_mapping() } else { value })
}
