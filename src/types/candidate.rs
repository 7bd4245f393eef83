use serde::{Deserialize, Serialize};

use crate::types::{Content, FinishReason};

/// One candidate reply within a generation response.
///
/// A candidate may arrive without content, e.g. when generation was blocked
/// before any token was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// The content of the candidate, if any was produced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,

    /// Why generation stopped for this candidate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<FinishReason>,
}
