//! Speaker-diarized transcription and tone analysis for recorded calls.
//!
//! One recording goes in; out comes a speaker-labeled transcript, a
//! compact acoustic feature summary, and a synthesized human-readable
//! assessment of how the call went. The pipeline orchestrates four
//! external capabilities behind narrow port traits (segmentation,
//! transcription, functionals extraction, report synthesis), so each can
//! be swapped for another provider or a stub.
//!
//! ```no_run
//! use callsight::{default_pipeline, PipelineConfig};
//!
//! # async fn example() -> callsight::Result<()> {
//! let config = PipelineConfig::new(
//!     "sk-...".to_string(),
//!     "http://localhost:9000".to_string(),
//! );
//! let pipeline = default_pipeline(&config)?;
//! let result = pipeline.run_path("call.wav").await?;
//! println!("{}", result.report);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod audio;
pub mod config;
pub mod domain;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod utils;

pub use audio::AudioClip;
pub use config::PipelineConfig;
pub use domain::models::{
    AnalysisReport, FeatureSummary, PipelineResult, SpeakerTurn, Transcript, TranscriptSegment,
};
pub use error::{AppError, Result, Stage};
pub use pipeline::{CancelFlag, PipelineCoordinator};

use adapters::services::asr::WhisperService;
use adapters::services::diarization::PyannoteService;
use adapters::services::features::OpenSmileExtractor;
use adapters::services::llm::OpenAIService;
use std::sync::Arc;

/// Wire a coordinator over the default production adapters:
/// pyannote diarization, Whisper transcription, openSMILE functionals,
/// and OpenAI chat-completion synthesis.
pub fn default_pipeline(config: &PipelineConfig) -> Result<PipelineCoordinator> {
    config.validate()?;

    let segmenter = PyannoteService::new(
        config.diarization_endpoint.clone(),
        config.diarization_token.clone(),
        &config.device_preference,
        config.call_timeout,
    )?;
    let transcriber = WhisperService::new(
        config.openai_api_key.clone(),
        config.whisper_model.clone(),
        config.call_timeout,
    )?;
    let extractor = OpenSmileExtractor::new(
        config.opensmile_binary.clone(),
        config.opensmile_config.clone(),
    );
    let synthesizer = OpenAIService::new(
        config.openai_api_key.clone(),
        config.analysis_model.clone(),
        config.temperature,
        config.call_timeout,
    )?;

    if !transcriber.is_configured() {
        return Err(AppError::Config(
            "Whisper transcription is not configured".to_string(),
        ));
    }
    if !synthesizer.is_configured() {
        return Err(AppError::Config(
            "OpenAI synthesis is not configured".to_string(),
        ));
    }
    if !extractor.is_configured() {
        // Not fatal at wiring time: the binary may appear on PATH or be
        // mounted later, and only the feature branch needs it.
        log::warn!(
            "SMILExtract binary not found at {}; feature extraction will fail at run time",
            config.opensmile_binary.display()
        );
    }

    PipelineCoordinator::new(
        config,
        Arc::new(segmenter),
        Arc::new(transcriber),
        Arc::new(extractor),
        Arc::new(synthesizer),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pipeline_requires_credentials() {
        assert!(matches!(
            default_pipeline(&PipelineConfig::default()),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_default_pipeline_wires_up() {
        let config = PipelineConfig::new(
            "sk-test".to_string(),
            "http://localhost:9000".to_string(),
        );
        assert!(default_pipeline(&config).is_ok());
    }
}
