use serde::{Deserialize, Serialize};

use crate::types::Part;

/// A system instruction fixed for the lifetime of a conversation.
///
/// The instruction is sent with every request; the remote model treats it as
/// best-effort guidance, not a locally enforced contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemInstruction {
    /// The parts that make up the instruction.
    pub parts: Vec<Part>,
}

impl SystemInstruction {
    /// Create a system instruction from a single text string.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part::text(text)],
        }
    }
}

impl From<String> for SystemInstruction {
    fn from(text: String) -> Self {
        SystemInstruction::from_text(text)
    }
}

impl From<&str> for SystemInstruction {
    fn from(text: &str) -> Self {
        SystemInstruction::from_text(text)
    }
}
