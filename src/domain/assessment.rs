//! Result contracts the model is instructed to emit
//!
//! Field names here are the wire contract: prompts in `application::prompts`
//! spell out the same camelCase shapes, and the parser deserializes into these
//! types. Keep both sides in sync when changing a field.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Category tag on one correction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackCategory {
    Grammar,
    Vocabulary,
    Pronunciation,
    Coherence,
}

impl FeedbackCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            FeedbackCategory::Grammar => "grammar",
            FeedbackCategory::Vocabulary => "vocabulary",
            FeedbackCategory::Pronunciation => "pronunciation",
            FeedbackCategory::Coherence => "coherence",
        }
    }
}

/// One correction unit: what the student produced, what it should have been,
/// and why. List order is presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackItem {
    pub original: String,
    pub corrected: String,
    pub explanation: String,
    #[serde(rename = "type")]
    pub category: FeedbackCategory,
}

/// Scored result shared by the writing, grading, and pronunciation tasks.
///
/// Constructed fresh per request from parsed model output; never persisted by
/// this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub score: f32,
    /// Named sub-scores, e.g. the four writing rubric criteria
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<BTreeMap<String, f32>>,
    pub feedback: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub detailed_errors: Vec<FeedbackItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub improved_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcription: Option<String>,
}

/// One interviewer turn: the transcription of the student's audio (when audio
/// was sent) and the examiner's next utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnOutcome {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcription: Option<String>,
    pub response: String,
}

/// An interviewer turn paired with its best-effort voice line. `audio` is
/// empty when synthesis failed; the turn itself is still valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpokenTurn {
    pub turn: TurnOutcome,
    pub audio: String,
}

impl SpokenTurn {
    pub fn has_audio(&self) -> bool {
        !self.audio.is_empty()
    }
}
