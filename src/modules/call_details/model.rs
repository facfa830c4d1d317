use serde_json::{Map, Value};

/// One call record as returned by VAPI. The schema is not fixed: field
/// names vary across API versions by casing convention, and some fields
/// appear either top-level or nested under `analysis`. Lookups therefore
/// go through ordered fallback chains instead of typed deserialization.
#[derive(Debug, Clone)]
pub struct CallRecord {
    fields: Map<String, Value>,
}

impl CallRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    fn analysis_field(&self, key: &str) -> Option<&Value> {
        self.field("analysis")
            .and_then(Value::as_object)
            .and_then(|analysis| analysis.get(key))
    }

    /// The provider's analysis block, passed through verbatim.
    pub fn analysis(&self) -> Value {
        match self.field("analysis") {
            None | Some(Value::Null) => Value::Object(Map::new()),
            Some(value) => value.clone(),
        }
    }

    pub fn summary(&self) -> Option<Value> {
        pick_first([self.field("summary"), self.analysis_field("summary")]).cloned()
    }

    pub fn structured_data(&self) -> Value {
        pick_first([
            self.field("structuredData"),
            self.analysis_field("structuredData"),
            self.analysis_field("structured_data"),
        ])
        .cloned()
        .unwrap_or_else(|| Value::Object(Map::new()))
    }

    pub fn insights(&self) -> Option<Value> {
        pick_first([self.field("insights"), self.analysis_field("insights")]).cloned()
    }

    pub fn transcript(&self) -> Option<Value> {
        pick_first([
            self.field("transcript"),
            self.field("callTranscription"),
            self.field("call_transcription"),
        ])
        .cloned()
    }

    /// The record's own id, or the identifier the caller asked for.
    pub fn call_id(&self, fallback: &str) -> Value {
        pick_first([self.field("id")])
            .cloned()
            .unwrap_or_else(|| Value::String(fallback.to_string()))
    }

    pub fn assistant_id(&self) -> Option<Value> {
        pick_first([self.field("assistantId"), self.field("assistant_id")]).cloned()
    }

    pub fn started_at(&self) -> Option<Value> {
        pick_first([self.field("startedAt"), self.field("createdAt")]).cloned()
    }

    pub fn ended_at(&self) -> Option<Value> {
        pick_first([self.field("endedAt"), self.field("completedAt")]).cloned()
    }

    pub fn duration(&self) -> Option<Value> {
        pick_first([
            self.field("duration"),
            self.field("callDurationSeconds"),
            self.field("call_duration_seconds"),
        ])
        .cloned()
    }
}

/// Returns the first candidate that is present and non-empty. Null, the
/// empty string, and the empty array count as empty; everything else
/// (including `0`, `false`, and `{}`) counts as present.
pub fn pick_first<'a>(
    candidates: impl IntoIterator<Item = Option<&'a Value>>,
) -> Option<&'a Value> {
    candidates
        .into_iter()
        .flatten()
        .find(|value| !is_empty(value))
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}
