//! Visit transcript persistence.
//!
//! The concierge accumulates the visible exchange (visitor lines and
//! whatever text came back, sentinels included) and can persist it as a
//! versioned JSON file. Sentinel strings are stored as ordinary assistant
//! text; by design they are indistinguishable except by their `Err:` prefix.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{from_reader, to_writer_pretty};
use time::OffsetDateTime;

use crate::error::{Error, Result};

/// Who produced a transcript entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    /// The visitor typing at the prompt.
    Visitor,

    /// The assistant (or a sentinel standing in for it).
    Assistant,
}

/// One displayed line of the visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// Who produced the line.
    pub speaker: Speaker,

    /// The displayed text, verbatim.
    pub text: String,
}

/// A versioned, timestamped record of one visit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transcript {
    version: u8,

    #[serde(with = "crate::utils::time")]
    saved_at: OffsetDateTime,

    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    /// Creates an empty transcript stamped with the current time.
    pub fn new() -> Self {
        Self {
            version: 1,
            saved_at: OffsetDateTime::now_utc(),
            entries: Vec::new(),
        }
    }

    /// Appends a visitor line.
    pub fn push_visitor(&mut self, text: impl Into<String>) {
        self.entries.push(TranscriptEntry {
            speaker: Speaker::Visitor,
            text: text.into(),
        });
    }

    /// Appends an assistant line.
    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.entries.push(TranscriptEntry {
            speaker: Speaker::Assistant,
            text: text.into(),
        });
    }

    /// The recorded entries, oldest first.
    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Saves the transcript to the specified path.
    pub fn save_to<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.saved_at = OffsetDateTime::now_utc();
        let file = File::create(path.as_ref())
            .map_err(|err| Error::io("failed to create transcript file", err))?;
        let writer = BufWriter::new(file);
        to_writer_pretty(writer, self).map_err(|err| {
            Error::serialization("failed to serialize transcript", Some(Box::new(err)))
        })
    }

    /// Loads a transcript from disk.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())
            .map_err(|err| Error::io("failed to open transcript file", err))?;
        let reader = BufReader::new(file);
        from_reader(reader).map_err(|err| {
            Error::serialization("failed to parse transcript", Some(Box::new(err)))
        })
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::chat::CONNECTION_LOST_SENTINEL;

    fn scratch_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("azmth-{}-{}", std::process::id(), name))
    }

    #[test]
    fn records_both_speakers_in_order() {
        let mut transcript = Transcript::new();
        assert!(transcript.is_empty());
        transcript.push_visitor("status?");
        transcript.push_assistant("Latency: 40ms.");
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.entries()[0].speaker, Speaker::Visitor);
        assert_eq!(transcript.entries()[1].text, "Latency: 40ms.");
    }

    #[test]
    fn save_and_load_round_trip() {
        let path = scratch_path("round-trip.json");
        let mut transcript = Transcript::new();
        transcript.push_visitor("hello");
        transcript.push_assistant(CONNECTION_LOST_SENTINEL);
        transcript.save_to(&path).unwrap();

        let loaded = Transcript::load_from(&path).unwrap();
        assert_eq!(loaded.entries(), transcript.entries());
        // The sentinel survives as plain text.
        assert_eq!(loaded.entries()[1].text, CONNECTION_LOST_SENTINEL);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = Transcript::load_from(scratch_path("does-not-exist.json")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
