use serde::{Deserialize, Serialize};

use crate::types::{Candidate, UsageMetadata};

/// The response to a `generateContent` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Candidate replies; in practice a single candidate unless more were
    /// requested.
    #[serde(default)]
    pub candidates: Vec<Candidate>,

    /// Token accounting for the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_metadata: Option<UsageMetadata>,
}

impl GenerateContentResponse {
    /// The text of the first candidate.
    ///
    /// Returns `None` when the response carries no candidate, the candidate
    /// carries no content, or the concatenated text is empty. This accessor
    /// decides the success/empty split that callers act on.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text = content.text();
        if text.is_empty() { None } else { Some(text) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_of_ordinary_reply() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    {
                        "content": {"role": "model", "parts": [{"text": "Latency: 40ms."}]},
                        "finishReason": "STOP"
                    }
                ],
                "usageMetadata": {"promptTokenCount": 7, "candidatesTokenCount": 5, "totalTokenCount": 12}
            }"#,
        )
        .unwrap();
        assert_eq!(response.text().as_deref(), Some("Latency: 40ms."));
    }

    #[test]
    fn no_candidates_means_no_text() {
        let response: GenerateContentResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(response.text(), None);
    }

    #[test]
    fn blocked_candidate_means_no_text() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{"finishReason": "SAFETY"}]}"#,
        )
        .unwrap();
        assert_eq!(response.text(), None);
    }

    #[test]
    fn empty_parts_mean_no_text() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"role": "model", "parts": []}}]}"#,
        )
        .unwrap();
        assert_eq!(response.text(), None);
    }
}
