//! Diarization orchestrator
//!
//! Obtains speaker turns from the segmentation capability, slices the
//! recording per turn, and drives the transcriber over the slices with
//! bounded concurrency. Output order always equals turn order: the fan-out
//! runs through `buffered`, which yields results in submission order no
//! matter when each call completes.
//!
//! Failure policy is strict and uniform: the first failing segment aborts
//! the whole transcript, and the surfaced error names the failing turn.
//! Overlapping turns are transcribed as given; the overlap is only logged,
//! since upstream ordering is assumed but not guaranteed.

use crate::audio::AudioClip;
use crate::domain::models::{SpeakerTurn, Transcript, TranscriptSegment};
use crate::error::{AppError, Result, Stage};
use crate::pipeline::CancelFlag;
use crate::ports::segmentation::SegmenterPort;
use crate::ports::transcription::TranscriberPort;
use futures_util::stream::{self, StreamExt, TryStreamExt};
use std::sync::Arc;
use std::time::Duration;

pub struct DiarizationOrchestrator {
    segmenter: Arc<dyn SegmenterPort>,
    transcriber: Arc<dyn TranscriberPort>,
    max_concurrency: usize,
    call_timeout: Duration,
}

impl DiarizationOrchestrator {
    pub fn new(
        segmenter: Arc<dyn SegmenterPort>,
        transcriber: Arc<dyn TranscriberPort>,
        max_concurrency: usize,
        call_timeout: Duration,
    ) -> Self {
        Self {
            segmenter,
            transcriber,
            max_concurrency: max_concurrency.max(1),
            call_timeout,
        }
    }

    /// Diarize the recording and transcribe every speaker turn.
    ///
    /// Zero turns yields an empty transcript, not an error: a silent
    /// recording is valid input.
    pub async fn diarize_and_transcribe(
        &self,
        audio: &AudioClip,
        cancel: &CancelFlag,
    ) -> Result<Transcript> {
        if cancel.is_cancelled() {
            return Err(AppError::Cancelled);
        }

        let turns = tokio::time::timeout(self.call_timeout, self.segmenter.segment(audio))
            .await
            .map_err(|_| {
                AppError::stage(
                    Stage::Segmentation,
                    format!("timed out after {:?}", self.call_timeout),
                )
            })?
            .map_err(|e| attribute(e, Stage::Segmentation, None))?;

        if turns.is_empty() {
            log::info!("Segmentation produced no speaker turns; transcript is empty");
            return Ok(Transcript::default());
        }

        for (index, turn) in turns.iter().enumerate() {
            if !turn.is_well_formed() {
                return Err(AppError::stage(
                    Stage::Segmentation,
                    format!("malformed {}", turn_context(index, turn)),
                ));
            }
        }
        for (index, pair) in turns.windows(2).enumerate() {
            if pair[0].overlaps(&pair[1]) {
                log::warn!(
                    "Overlapping speaker turns: {} and {}",
                    turn_context(index, &pair[0]),
                    turn_context(index + 1, &pair[1])
                );
            }
        }

        log::info!(
            "Transcribing {} speaker turns via {} (concurrency {})",
            turns.len(),
            self.transcriber.provider_name(),
            self.max_concurrency
        );

        let segments: Vec<TranscriptSegment> = stream::iter(turns.iter().enumerate())
            .map(|(index, turn)| self.transcribe_turn(audio, index, turn, cancel))
            .buffered(self.max_concurrency)
            .try_collect()
            .await?;

        Ok(Transcript::new(segments))
    }

    async fn transcribe_turn(
        &self,
        audio: &AudioClip,
        index: usize,
        turn: &SpeakerTurn,
        cancel: &CancelFlag,
    ) -> Result<TranscriptSegment> {
        if cancel.is_cancelled() {
            return Err(AppError::Cancelled);
        }

        // Slice buffer is owned by this call and dropped with it on every
        // exit path.
        let slice = audio.slice(turn.start, turn.end)?;
        log::debug!(
            "Transcribing {} ({} samples)",
            turn_context(index, turn),
            slice.samples.len()
        );

        let text = tokio::time::timeout(self.call_timeout, self.transcriber.transcribe(&slice))
            .await
            .map_err(|_| {
                AppError::stage(
                    Stage::Transcription,
                    format!(
                        "{}: timed out after {:?}",
                        turn_context(index, turn),
                        self.call_timeout
                    ),
                )
            })?
            .map_err(|e| attribute(e, Stage::Transcription, Some(turn_context(index, turn))))?;

        Ok(TranscriptSegment::from_turn(turn, text.trim()))
    }
}

fn turn_context(index: usize, turn: &SpeakerTurn) -> String {
    format!(
        "turn {} ({} {:.2}s-{:.2}s)",
        index, turn.speaker, turn.start, turn.end
    )
}

/// Attribute a capability error to a stage, keeping cancellation intact
/// and folding an already-attributed message into the new context.
fn attribute(err: AppError, stage: Stage, context: Option<String>) -> AppError {
    let message = match err {
        AppError::Cancelled => return AppError::Cancelled,
        AppError::Stage { message, .. } => message,
        other => other.to_string(),
    };
    match context {
        Some(ctx) => AppError::stage(stage, format!("{}: {}", ctx, message)),
        None => AppError::stage(stage, message),
    }
}
