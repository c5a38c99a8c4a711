//! Prompt template for the final call analysis
//!
//! The synthesizer embeds the feature summary and the transcript into a
//! fixed instructional template; empty inputs are named explicitly so the
//! model degrades gracefully instead of hallucinating content.

use crate::domain::models::{FeatureSummary, Transcript};
use crate::error::Result;

/// Builder for the combined tone-and-content analysis prompt
pub struct AnalysisPrompt;

impl AnalysisPrompt {
    /// The fixed instructional template
    pub fn template() -> &'static str {
        r#"You are an assistant that analyzes sales call performance. First, review the acoustic features (pace, pitch, loudness, voice quality), then review the conversation transcript.

Acoustic Features (JSON):
{features}

Conversation Transcript (JSON list of segments):
{transcript}

Based on both the tone and content, provide a concise summary of strengths, areas for improvement, and actionable recommendations."#
    }

    /// Render the template with both inputs serialized canonically.
    ///
    /// The feature summary is a BTreeMap, so its pretty-printed JSON is
    /// key-ordered and stable across renders of the same inputs.
    pub fn render(features: &FeatureSummary, transcript: &Transcript) -> Result<String> {
        let features_str = if features.is_empty() {
            "(no acoustic signal available)".to_string()
        } else {
            serde_json::to_string_pretty(features)?
        };

        let transcript_str = if transcript.is_empty() {
            "(no speech content detected in this recording)".to_string()
        } else {
            serde_json::to_string_pretty(transcript)?
        };

        Ok(Self::template()
            .replace("{features}", &features_str)
            .replace("{transcript}", &transcript_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::TranscriptSegment;

    #[test]
    fn test_template_has_placeholders() {
        let template = AnalysisPrompt::template();
        assert!(template.contains("{features}"));
        assert!(template.contains("{transcript}"));
    }

    #[test]
    fn test_render_embeds_both_inputs() {
        let mut features = FeatureSummary::new();
        features.insert("mean_loudness".to_string(), 0.42);
        let transcript = Transcript::new(vec![TranscriptSegment {
            speaker: "SPEAKER_00".to_string(),
            start: 0.0,
            end: 2.0,
            text: "good morning".to_string(),
        }]);

        let prompt = AnalysisPrompt::render(&features, &transcript).unwrap();
        assert!(prompt.contains("mean_loudness"));
        assert!(prompt.contains("good morning"));
        assert!(!prompt.contains("{features}"));
        assert!(!prompt.contains("{transcript}"));
    }

    #[test]
    fn test_render_names_empty_inputs() {
        let prompt =
            AnalysisPrompt::render(&FeatureSummary::new(), &Transcript::default()).unwrap();
        assert!(prompt.contains("no acoustic signal"));
        assert!(prompt.contains("no speech content"));
    }
}
