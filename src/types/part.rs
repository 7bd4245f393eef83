use serde::{Deserialize, Serialize};

/// A single piece of content within a conversation turn.
///
/// Only text parts are used here; inline media and function-call parts are
/// outside this crate's scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    /// The text of this part.
    pub text: String,
}

impl Part {
    /// Create a new text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl From<&str> for Part {
    fn from(text: &str) -> Self {
        Part::text(text)
    }
}

impl From<String> for Part {
    fn from(text: String) -> Self {
        Part::text(text)
    }
}
