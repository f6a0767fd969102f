use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Server-assigned identifier of an answer.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerId(pub String);

impl AnswerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AnswerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AnswerId(\"{}\")", self.0)
    }
}

impl fmt::Display for AnswerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AnswerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// An answer to a question. Pass-through like [`crate::question::Question`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AnswerId>,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Answer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(AnswerId::new(id));
        self
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn body(&self) -> Option<&str> {
        self.text("body")
    }

    /// The `questionId` field when it is a string.
    pub fn question_id(&self) -> Option<&str> {
        self.text("questionId")
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}

/// A page of answers plus the total count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswersEnvelope {
    #[serde(default)]
    pub answers: Vec<Answer>,

    #[serde(default)]
    pub answer_count: u64,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_answer_roundtrips_unknown_fields() {
        let raw = json!({"_id": "a1", "body": "Because.", "votes": 3});
        let answer: Answer = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(answer.id, Some(AnswerId::new("a1")));
        assert_eq!(answer.body(), Some("Because."));
        assert_eq!(serde_json::to_value(&answer).unwrap(), raw);
    }

    #[test]
    fn test_answer_passes_through_numbers_and_nulls() {
        let raw = json!({"_id": "a1", "body": null, "questionId": 42});
        let answer: Answer = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(answer.body(), None);
        assert_eq!(answer.question_id(), None);
        assert_eq!(serde_json::to_value(&answer).unwrap(), raw);
    }

    #[test]
    fn test_envelope_defaults_when_fields_missing() {
        let env: AnswersEnvelope = serde_json::from_value(json!({})).unwrap();
        assert!(env.answers.is_empty());
        assert_eq!(env.answer_count, 0);
    }
}
