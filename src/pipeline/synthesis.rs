//! Analysis synthesizer
//!
//! Serializes the feature summary and the transcript into the analysis
//! prompt and invokes the synthesis capability exactly once per call.
//! The returned text is opaque; nothing here parses it.

use crate::domain::models::{AnalysisReport, FeatureSummary, Transcript};
use crate::domain::prompts::AnalysisPrompt;
use crate::error::{AppError, Result, Stage};
use crate::ports::synthesis::SynthesizerPort;
use std::sync::Arc;
use std::time::Duration;

pub struct AnalysisSynthesizer {
    synthesizer: Arc<dyn SynthesizerPort>,
    call_timeout: Duration,
}

impl AnalysisSynthesizer {
    pub fn new(synthesizer: Arc<dyn SynthesizerPort>, call_timeout: Duration) -> Self {
        Self {
            synthesizer,
            call_timeout,
        }
    }

    pub async fn synthesize(
        &self,
        features: &FeatureSummary,
        transcript: &Transcript,
    ) -> Result<AnalysisReport> {
        let prompt = AnalysisPrompt::render(features, transcript)?;
        log::info!(
            "Requesting analysis from {} ({} features, {} segments)",
            self.synthesizer.provider_name(),
            features.len(),
            transcript.len()
        );

        let report = tokio::time::timeout(self.call_timeout, self.synthesizer.synthesize(&prompt))
            .await
            .map_err(|_| {
                AppError::stage(
                    Stage::Synthesis,
                    format!("timed out after {:?}", self.call_timeout),
                )
            })?
            .map_err(|e| match e {
                AppError::Cancelled => AppError::Cancelled,
                AppError::Stage {
                    stage: Stage::Synthesis,
                    message,
                } => AppError::stage(Stage::Synthesis, message),
                other => AppError::stage(Stage::Synthesis, other.to_string()),
            })?;

        log::info!("Analysis report generated ({} characters)", report.len());
        Ok(report)
    }
}
