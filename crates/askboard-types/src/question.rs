use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Server-assigned identifier of a question (the `_id` field on the wire).
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub String);

impl QuestionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionId(\"{}\")", self.0)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A question posted on the board.
///
/// The client never validates or reshapes questions. Only the identifier is
/// interpreted (it is required by update); every other field the server
/// sends, `null`s included, stays in `fields` exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<QuestionId>,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Question {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(QuestionId::new(id));
        self
    }

    /// Set a wire field, replacing any previous value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.text("title")
    }

    pub fn description(&self) -> Option<&str> {
        self.text("description")
    }

    pub fn category(&self) -> Option<&str> {
        self.text("category")
    }

    /// The `date` field when the server sent it as a string.
    pub fn date(&self) -> Option<&str> {
        self.text("date")
    }

    /// A field's value when it is a JSON string.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}

/// A page of questions plus the total number of matches on the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionsEnvelope {
    #[serde(default)]
    pub questions: Vec<Question>,

    #[serde(default)]
    pub question_count: u64,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
