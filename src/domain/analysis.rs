use serde::Serialize;
use serde_json::{Map, Value};

const TRANSCRIPT_KEY: &str = "transcript";
const WRAPPED_VALUE_KEY: &str = "value";

fn into_object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => {
            let mut map = Map::new();
            map.insert(WRAPPED_VALUE_KEY.to_string(), other);
            map
        }
    }
}

/// Speech analysis output. Service-specific fields pass through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AudioAnalysis(Map<String, Value>);

impl AudioAnalysis {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Non-object payloads are wrapped under `"value"`; objects are kept as-is.
    pub fn from_value(value: Value) -> Self {
        Self(into_object(value))
    }

    /// The transcript, if the analyzer produced a non-empty one. Whitespace
    /// counts as content.
    pub fn transcript(&self) -> Option<&str> {
        self.0
            .get(TRANSCRIPT_KEY)
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

/// Facial-emotion analysis output, passed through to the caller unmodified.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct VideoAnalysis(Map<String, Value>);

impl VideoAnalysis {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn from_value(value: Value) -> Self {
        Self(into_object(value))
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}
