//! Pipeline coordinator
//!
//! Owns the end-to-end contract for one recording: diarized transcription
//! and acoustic feature summarization run concurrently (they share only
//! the read-only recording), then report synthesis consumes both. Each
//! stage runs at most once per call and nothing is cached across calls.

use crate::audio::AudioClip;
use crate::config::PipelineConfig;
use crate::domain::models::{FeatureSummary, PipelineResult};
use crate::error::{AppError, Result, Stage};
use crate::pipeline::diarizer::DiarizationOrchestrator;
use crate::pipeline::summarizer::FeatureSummarizer;
use crate::pipeline::synthesis::AnalysisSynthesizer;
use crate::pipeline::CancelFlag;
use crate::ports::features::FeatureExtractorPort;
use crate::ports::segmentation::SegmenterPort;
use crate::ports::synthesis::SynthesizerPort;
use crate::ports::transcription::TranscriberPort;
use crate::utils::transcript_file;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

pub struct PipelineCoordinator {
    config: PipelineConfig,
    diarizer: DiarizationOrchestrator,
    extractor: Arc<dyn FeatureExtractorPort>,
    summarizer: FeatureSummarizer,
    synthesizer: AnalysisSynthesizer,
}

impl PipelineCoordinator {
    /// Build a coordinator over the four capability ports.
    ///
    /// The config is validated here, so a missing credential surfaces
    /// before any stage ever runs.
    pub fn new(
        config: &PipelineConfig,
        segmenter: Arc<dyn SegmenterPort>,
        transcriber: Arc<dyn TranscriberPort>,
        extractor: Arc<dyn FeatureExtractorPort>,
        synthesizer: Arc<dyn SynthesizerPort>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            diarizer: DiarizationOrchestrator::new(
                segmenter,
                transcriber,
                config.max_concurrent_transcriptions,
                config.call_timeout,
            ),
            extractor,
            summarizer: FeatureSummarizer::default(),
            synthesizer: AnalysisSynthesizer::new(synthesizer, config.call_timeout),
            config: config.clone(),
        })
    }

    /// Analyze a recording loaded from a WAV file
    pub async fn run_path<P: AsRef<Path>>(&self, path: P) -> Result<PipelineResult> {
        let audio = AudioClip::from_wav_path(path)?;
        self.run(&audio).await
    }

    /// Analyze a decoded recording
    pub async fn run(&self, audio: &AudioClip) -> Result<PipelineResult> {
        self.run_with_cancel(audio, &CancelFlag::new()).await
    }

    /// Analyze a decoded recording, observing a run-level cancellation flag
    pub async fn run_with_cancel(
        &self,
        audio: &AudioClip,
        cancel: &CancelFlag,
    ) -> Result<PipelineResult> {
        let started = Instant::now();
        log::info!(
            "Pipeline run started ({:.1}s of audio)",
            audio.duration_secs()
        );

        let transcript_branch = self.diarizer.diarize_and_transcribe(audio, cancel);
        let features_branch = self.summarize_features(audio, cancel);

        // The branches are data-independent; the synthesis stage strictly
        // depends on both, and is never invoked with incomplete inputs.
        let (transcript, feature_summary) = tokio::try_join!(transcript_branch, features_branch)?;

        if let Some(path) = &self.config.transcript_output {
            transcript_file::write_transcript_json(&transcript, path)?;
        }

        if cancel.is_cancelled() {
            return Err(AppError::Cancelled);
        }

        let report = match self.synthesizer.synthesize(&feature_summary, &transcript).await {
            Ok(report) => report,
            Err(err) => {
                // The computed artifacts stay available for diagnostics
                // even though the run as a whole fails.
                log::error!(
                    "Synthesis failed after {} transcript segments and {} features: {}; \
                     transcript={} features={}",
                    transcript.len(),
                    feature_summary.len(),
                    err,
                    serde_json::to_string(&transcript).unwrap_or_default(),
                    serde_json::to_string(&feature_summary).unwrap_or_default(),
                );
                return Err(err);
            }
        };

        log::info!(
            "Pipeline run finished in {:.1}s ({} segments, {} features)",
            started.elapsed().as_secs_f64(),
            transcript.len(),
            feature_summary.len()
        );

        Ok(PipelineResult {
            transcript,
            feature_summary,
            report,
        })
    }

    async fn summarize_features(
        &self,
        audio: &AudioClip,
        cancel: &CancelFlag,
    ) -> Result<FeatureSummary> {
        if cancel.is_cancelled() {
            return Err(AppError::Cancelled);
        }

        let table = tokio::time::timeout(self.config.call_timeout, self.extractor.extract(audio))
            .await
            .map_err(|_| {
                AppError::stage(
                    Stage::FeatureExtraction,
                    format!("timed out after {:?}", self.config.call_timeout),
                )
            })?
            .map_err(|e| match e {
                AppError::Cancelled => AppError::Cancelled,
                AppError::Stage {
                    stage: Stage::FeatureExtraction,
                    message,
                } => AppError::stage(Stage::FeatureExtraction, message),
                other => AppError::stage(Stage::FeatureExtraction, other.to_string()),
            })?;

        let summary = self.summarizer.summarize(&table);
        if summary.is_empty() {
            log::info!("No mapped acoustic features available; synthesis will degrade gracefully");
        }
        Ok(summary)
    }
}
