//! Pipeline configuration
//!
//! All credentials, endpoints, and tuning knobs live in an explicit struct
//! built once at process start and passed by reference into the coordinator.
//! Core logic never reads the environment.

use crate::error::{AppError, Result};
use crate::ports::segmentation::Device;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for one pipeline instance.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// OpenAI API key, used by both the Whisper and chat-completion adapters
    pub openai_api_key: String,

    /// Base URL of the diarization service
    pub diarization_endpoint: String,

    /// Optional bearer token for the diarization service
    pub diarization_token: Option<String>,

    /// Execution device preference for segmentation, first available wins
    pub device_preference: Vec<Device>,

    /// Speech-to-text model identifier
    pub whisper_model: String,

    /// Chat model used for the final analysis
    pub analysis_model: String,

    /// Sampling temperature for the analysis model
    pub temperature: f32,

    /// Upper bound on in-flight per-segment transcription calls
    pub max_concurrent_transcriptions: usize,

    /// Timeout applied to each external capability call
    pub call_timeout: Duration,

    /// Where to persist the transcript document, if anywhere
    pub transcript_output: Option<PathBuf>,

    /// Path to the SMILExtract binary
    pub opensmile_binary: PathBuf,

    /// Path to the openSMILE functionals configuration
    pub opensmile_config: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            openai_api_key: String::new(),
            diarization_endpoint: String::new(),
            diarization_token: None,
            device_preference: vec![Device::Cuda, Device::Mps, Device::Cpu],
            whisper_model: "whisper-1".to_string(),
            analysis_model: "gpt-4.1-mini".to_string(),
            temperature: 0.8,
            max_concurrent_transcriptions: 4,
            call_timeout: Duration::from_secs(120),
            transcript_output: None,
            opensmile_binary: PathBuf::from("SMILExtract"),
            opensmile_config: PathBuf::from("config/egemaps/v02/eGeMAPSv02.conf"),
        }
    }
}

impl PipelineConfig {
    /// Create a config with the required credentials filled in
    pub fn new(openai_api_key: String, diarization_endpoint: String) -> Self {
        Self {
            openai_api_key,
            diarization_endpoint,
            ..Self::default()
        }
    }

    /// Sets the diarization auth token (builder pattern)
    pub fn with_diarization_token(mut self, token: Option<String>) -> Self {
        self.diarization_token = token;
        self
    }

    /// Sets the transcript output path (builder pattern)
    pub fn with_transcript_output(mut self, path: Option<PathBuf>) -> Self {
        self.transcript_output = path;
        self
    }

    /// Validate that every required credential and endpoint is present.
    ///
    /// Called by the coordinator constructor, so a broken config surfaces
    /// before any stage runs.
    pub fn validate(&self) -> Result<()> {
        if self.openai_api_key.is_empty() {
            return Err(AppError::Config("OpenAI API key is not set".to_string()));
        }
        if self.diarization_endpoint.is_empty() {
            return Err(AppError::Config(
                "Diarization endpoint is not set".to_string(),
            ));
        }
        if self.max_concurrent_transcriptions == 0 {
            return Err(AppError::Config(
                "max_concurrent_transcriptions must be at least 1".to_string(),
            ));
        }
        if self.device_preference.is_empty() {
            return Err(AppError::Config(
                "device_preference must list at least one device".to_string(),
            ));
        }
        Ok(())
    }
}
