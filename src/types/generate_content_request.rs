use serde::{Deserialize, Serialize};

use crate::types::{Content, GenerationConfig, SystemInstruction};

/// Parameters for a single `generateContent` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// The conversation so far, oldest turn first.
    pub contents: Vec<Content>,

    /// Conversation-lifetime instruction for the model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<SystemInstruction>,

    /// Sampling and length configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Create a request carrying the given conversation turns.
    pub fn new(contents: Vec<Content>) -> Self {
        Self {
            contents,
            system_instruction: None,
            generation_config: None,
        }
    }

    /// Set the system instruction.
    pub fn with_system_instruction(mut self, instruction: SystemInstruction) -> Self {
        self.system_instruction = Some(instruction);
        self
    }

    /// Set the generation configuration.
    pub fn with_generation_config(mut self, config: GenerationConfig) -> Self {
        self.generation_config = Some(config);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn request_wire_shape() {
        let request = GenerateContentRequest::new(vec![Content::user("hello")])
            .with_system_instruction(SystemInstruction::from_text("Be terse."))
            .with_generation_config(GenerationConfig::new().with_max_output_tokens(256));

        assert_eq!(
            to_value(request).unwrap(),
            json!({
                "contents": [
                    {"role": "user", "parts": [{"text": "hello"}]}
                ],
                "systemInstruction": {"parts": [{"text": "Be terse."}]},
                "generationConfig": {"maxOutputTokens": 256}
            })
        );
    }

    #[test]
    fn bare_request_omits_optional_fields() {
        let request = GenerateContentRequest::new(vec![]);
        assert_eq!(to_value(request).unwrap(), json!({"contents": []}));
    }
}
