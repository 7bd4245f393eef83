use serde::{Deserialize, Serialize};

/// The producer of a conversation turn.
///
/// The Generative Language API recognizes exactly two roles in a
/// conversation: the end user and the model.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A turn supplied by the end user.
    User,

    /// A turn produced by the model.
    Model,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_spelling() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Role::Model).unwrap(), "\"model\"");
    }
}
