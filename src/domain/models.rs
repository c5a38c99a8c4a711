/// Domain models for the call analysis pipeline
///
/// These models represent the core entities stitched together by the
/// coordinator: time-aligned speaker turns, transcribed segments, the
/// acoustic feature summary, and the final synthesized report.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A contiguous time interval attributed to one speaker by the
/// segmentation capability.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpeakerTurn {
    /// Speaker label (e.g., "SPEAKER_00")
    pub speaker: String,

    /// Start time in seconds from the beginning of the recording
    pub start: f64,

    /// End time in seconds, exclusive
    pub end: f64,
}

impl SpeakerTurn {
    pub fn new(speaker: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            speaker: speaker.into(),
            start,
            end,
        }
    }

    /// Turn duration in seconds
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// A turn is well-formed when it spans a positive interval
    pub fn is_well_formed(&self) -> bool {
        self.start < self.end && self.start >= 0.0
    }

    /// Whether this turn's time range intersects another's
    pub fn overlaps(&self, other: &SpeakerTurn) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// One transcribed speaker turn. Immutable once created; the serde field
/// names are the persisted transcript document schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TranscriptSegment {
    pub speaker: String,
    pub start: f64,
    pub end: f64,
    pub text: String,
}

impl TranscriptSegment {
    /// Build a segment from the turn it transcribes
    pub fn from_turn(turn: &SpeakerTurn, text: impl Into<String>) -> Self {
        Self {
            speaker: turn.speaker.clone(),
            start: turn.start,
            end: turn.end,
            text: text.into(),
        }
    }
}

/// Ordered sequence of transcript segments, temporal order of the
/// underlying turns. Serializes as a bare JSON array.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Transcript(Vec<TranscriptSegment>);

impl Transcript {
    pub fn new(segments: Vec<TranscriptSegment>) -> Self {
        Self(segments)
    }

    pub fn segments(&self) -> &[TranscriptSegment] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TranscriptSegment> {
        self.0.iter()
    }
}

impl From<Vec<TranscriptSegment>> for Transcript {
    fn from(segments: Vec<TranscriptSegment>) -> Self {
        Self(segments)
    }
}

/// Mapping from semantic feature name to value. A BTreeMap keeps the
/// serialized form key-ordered, so summarizing the same table twice yields
/// byte-identical output.
pub type FeatureSummary = BTreeMap<String, f64>;

/// The terminal artifact: free text from the synthesis capability.
/// No further structure is imposed on it.
pub type AnalysisReport = String;

/// Everything one pipeline run produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineResult {
    pub transcript: Transcript,
    pub feature_summary: FeatureSummary,
    pub report: AnalysisReport,
}
