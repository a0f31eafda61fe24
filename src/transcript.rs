//! Interview conversation transcript
//!
//! The conversation box opens with a canned interviewer question. Sent
//! answers are appended as candidate entries; no reply is ever generated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The interviewer's canned opening question
pub const OPENING_QUESTION: &str =
    "Tell me about yourself and your background in software development.";

/// Shown in the candidate slot until an answer is sent
pub const ANSWER_PLACEHOLDER: &str = "Your answer will appear here...";

/// Who said a transcript line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    Interviewer,
    Candidate,
}

impl Speaker {
    /// Section label used in the conversation box
    pub fn label(self) -> &'static str {
        match self {
            Speaker::Interviewer => "AI Interviewer",
            Speaker::Candidate => "Your Response",
        }
    }
}

/// One line of the interview conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub id: Uuid,
    pub speaker: Speaker,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl TranscriptEntry {
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            speaker,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// The session's conversation transcript
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    /// Create an empty transcript
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transcript seeded with the opening question
    pub fn opening() -> Self {
        let mut transcript = Self::new();
        transcript.push(TranscriptEntry::new(Speaker::Interviewer, OPENING_QUESTION));
        transcript
    }

    pub fn push(&mut self, entry: TranscriptEntry) {
        self.entries.push(entry);
    }

    /// Append a candidate answer
    pub fn add_answer(&mut self, text: impl Into<String>) {
        self.push(TranscriptEntry::new(Speaker::Candidate, text));
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if the candidate has answered anything yet
    pub fn has_answer(&self) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.speaker == Speaker::Candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_transcript() {
        let transcript = Transcript::opening();
        assert_eq!(transcript.len(), 1);
        let entry = &transcript.entries()[0];
        assert_eq!(entry.speaker, Speaker::Interviewer);
        assert_eq!(entry.text, OPENING_QUESTION);
        assert!(!transcript.has_answer());
    }

    #[test]
    fn test_add_answer_appends_candidate_entry() {
        let mut transcript = Transcript::opening();
        transcript.add_answer("I have five years of backend experience.");
        assert_eq!(transcript.len(), 2);
        assert!(transcript.has_answer());
        let entry = &transcript.entries()[1];
        assert_eq!(entry.speaker, Speaker::Candidate);
        assert_eq!(entry.text, "I have five years of backend experience.");
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let mut transcript = Transcript::new();
        transcript.add_answer("first");
        transcript.add_answer("second");
        let texts: Vec<&str> = transcript
            .entries()
            .iter()
            .map(|entry| entry.text.as_str())
            .collect();
        assert_eq!(texts, ["first", "second"]);
    }

    #[test]
    fn test_entry_ids_are_unique() {
        let a = TranscriptEntry::new(Speaker::Candidate, "a");
        let b = TranscriptEntry::new(Speaker::Candidate, "b");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_speaker_labels() {
        assert_eq!(Speaker::Interviewer.label(), "AI Interviewer");
        assert_eq!(Speaker::Candidate.label(), "Your Response");
    }
}
