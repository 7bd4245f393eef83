use serde::{Deserialize, Serialize};

/// Why the model stopped producing tokens for a candidate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinishReason {
    /// The model reached a natural stopping point.
    Stop,

    /// The configured output-token limit was reached.
    MaxTokens,

    /// The candidate was flagged by a safety policy.
    Safety,

    /// The candidate was flagged for reciting training material.
    Recitation,

    /// The candidate used an unsupported language.
    Language,

    /// The candidate matched a blocklist entry.
    Blocklist,

    /// The candidate contained prohibited content.
    ProhibitedContent,

    /// The candidate contained sensitive personal information.
    Spii,

    /// Any reason this crate does not recognize.
    #[serde(other)]
    Unspecified,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_spelling() {
        assert_eq!(
            serde_json::to_string(&FinishReason::MaxTokens).unwrap(),
            "\"MAX_TOKENS\""
        );
        let parsed: FinishReason = serde_json::from_str("\"STOP\"").unwrap();
        assert_eq!(parsed, FinishReason::Stop);
    }

    #[test]
    fn unknown_reason_maps_to_unspecified() {
        let parsed: FinishReason = serde_json::from_str("\"SOME_FUTURE_REASON\"").unwrap();
        assert_eq!(parsed, FinishReason::Unspecified);
    }
}
