use serde::{Deserialize, Serialize};

/// Token accounting for a generation request.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    /// Tokens consumed by the prompt, including history and instructions.
    #[serde(default)]
    pub prompt_token_count: u64,

    /// Tokens produced across all candidates.
    #[serde(default)]
    pub candidates_token_count: u64,

    /// Total tokens for the request.
    #[serde(default)]
    pub total_token_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_candidate_count_defaults_to_zero() {
        let usage: UsageMetadata =
            serde_json::from_str(r#"{"promptTokenCount": 12, "totalTokenCount": 12}"#).unwrap();
        assert_eq!(usage.prompt_token_count, 12);
        assert_eq!(usage.candidates_token_count, 0);
        assert_eq!(usage.total_token_count, 12);
    }
}
