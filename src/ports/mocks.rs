//! Stub capability implementations for testing

use crate::audio::AudioClip;
use crate::domain::models::SpeakerTurn;
use crate::error::{AppError, Result, Stage};
use crate::ports::features::{FeatureExtractorPort, FeatureTable};
use crate::ports::segmentation::SegmenterPort;
use crate::ports::synthesis::SynthesizerPort;
use crate::ports::transcription::TranscriberPort;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Segmenter stub returning a fixed turn list or a canned failure
#[derive(Default)]
pub struct StubSegmenter {
    pub turns: Vec<SpeakerTurn>,
    pub fail_with: Option<String>,
}

impl StubSegmenter {
    pub fn with_turns(turns: Vec<SpeakerTurn>) -> Self {
        Self {
            turns,
            fail_with: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            turns: Vec::new(),
            fail_with: Some(message.to_string()),
        }
    }
}

#[async_trait]
impl SegmenterPort for StubSegmenter {
    async fn segment(&self, _audio: &AudioClip) -> Result<Vec<SpeakerTurn>> {
        match &self.fail_with {
            Some(message) => Err(AppError::stage(Stage::Segmentation, message.clone())),
            None => Ok(self.turns.clone()),
        }
    }

    fn provider_name(&self) -> &str {
        "stub-segmenter"
    }
}

/// Transcriber stub replying from a queue, one entry per call in
/// submission order. An exhausted queue yields empty text.
#[derive(Clone, Default)]
pub struct QueueTranscriber {
    replies: Arc<Mutex<VecDeque<std::result::Result<String, String>>>>,
}

impl QueueTranscriber {
    pub fn with_texts(texts: &[&str]) -> Self {
        Self {
            replies: Arc::new(Mutex::new(
                texts.iter().map(|t| Ok(t.to_string())).collect(),
            )),
        }
    }

    /// Queue an error reply after `ok` successful ones
    pub fn failing_after(ok: &[&str], message: &str) -> Self {
        let mut replies: VecDeque<_> = ok.iter().map(|t| Ok(t.to_string())).collect();
        replies.push_back(Err(message.to_string()));
        Self {
            replies: Arc::new(Mutex::new(replies)),
        }
    }
}

#[async_trait]
impl TranscriberPort for QueueTranscriber {
    async fn transcribe(&self, _clip: &AudioClip) -> Result<String> {
        // Reply is claimed synchronously, so replies pair with calls in
        // submission order even under concurrent dispatch.
        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(AppError::stage(Stage::Transcription, message)),
            None => Ok(String::new()),
        }
    }

    fn provider_name(&self) -> &str {
        "stub-transcriber"
    }
}

/// Extractor stub returning a fixed table or a canned failure
#[derive(Default)]
pub struct StubExtractor {
    pub table: FeatureTable,
    pub fail_with: Option<String>,
}

impl StubExtractor {
    pub fn with_table(table: FeatureTable) -> Self {
        Self {
            table,
            fail_with: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            table: FeatureTable::default(),
            fail_with: Some(message.to_string()),
        }
    }
}

#[async_trait]
impl FeatureExtractorPort for StubExtractor {
    async fn extract(&self, _audio: &AudioClip) -> Result<FeatureTable> {
        match &self.fail_with {
            Some(message) => Err(AppError::stage(Stage::FeatureExtraction, message.clone())),
            None => Ok(self.table.clone()),
        }
    }

    fn provider_name(&self) -> &str {
        "stub-extractor"
    }
}

/// Synthesizer stub capturing the prompt it was handed
#[derive(Clone, Default)]
pub struct StubSynthesizer {
    pub reply: String,
    pub fail_with: Option<String>,
    pub last_prompt: Arc<Mutex<Option<String>>>,
}

impl StubSynthesizer {
    pub fn with_reply(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn captured_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl SynthesizerPort for StubSynthesizer {
    async fn synthesize(&self, prompt: &str) -> Result<String> {
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        match &self.fail_with {
            Some(message) => Err(AppError::stage(Stage::Synthesis, message.clone())),
            None => Ok(self.reply.clone()),
        }
    }

    fn provider_name(&self) -> &str {
        "stub-synthesizer"
    }
}
