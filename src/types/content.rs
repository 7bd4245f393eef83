use serde::{Deserialize, Serialize};

use crate::types::{Part, Role};

/// One turn of a conversation: a role and its parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    /// Who produced this turn.
    pub role: Role,

    /// The parts that make up the turn.
    pub parts: Vec<Part>,
}

impl Content {
    /// Create a user turn from a single text string.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            parts: vec![Part::text(text)],
        }
    }

    /// Create a model turn from a single text string.
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            parts: vec![Part::text(text)],
        }
    }

    /// The concatenated text of every part in this turn.
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .map(|part| part.text.as_str())
            .collect::<String>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn user_turn_wire_shape() {
        let content = Content::user("hello");
        assert_eq!(
            to_value(content).unwrap(),
            json!({
                "role": "user",
                "parts": [{"text": "hello"}]
            })
        );
    }

    #[test]
    fn text_concatenates_parts() {
        let content = Content {
            role: Role::Model,
            parts: vec![Part::text("Latency: "), Part::text("40ms.")],
        };
        assert_eq!(content.text(), "Latency: 40ms.");
    }
}
