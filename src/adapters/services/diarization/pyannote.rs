//! Pyannote diarization service adapter
//!
//! Implements the SegmenterPort against a pyannote-style HTTP service.
//! API flow:
//! 1. Encode the recording as WAV
//! 2. POST it to the /diarize endpoint with the chosen device
//! 3. Parse the ordered speaker turn list
//!
//! The execution device is negotiated once, at construction: the
//! preference list is probed in order and the first available device is
//! sent along with every request. The choice only affects latency.

use crate::audio::AudioClip;
use crate::domain::models::SpeakerTurn;
use crate::error::{AppError, Result, Stage};
use crate::ports::segmentation::{Device, SegmenterPort};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Pyannote HTTP service implementation
pub struct PyannoteService {
    client: Client,
    endpoint: String,
    token: Option<String>,
    device: Device,
}

#[derive(Debug, Deserialize)]
struct DiarizationResponse {
    turns: Vec<SpeakerTurn>,
}

impl PyannoteService {
    /// Create a new diarization client.
    ///
    /// `device_preference` is walked once here; the winner is reused for
    /// the lifetime of the service.
    pub fn new(
        endpoint: String,
        token: Option<String>,
        device_preference: &[Device],
        timeout: Duration,
    ) -> Result<Self> {
        let device = Device::first_available(device_preference);
        log::info!("Diarization device selected: {}", device);

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint,
            token,
            device,
        })
    }

    /// The device the probe settled on
    pub fn device(&self) -> Device {
        self.device
    }
}

#[async_trait]
impl SegmenterPort for PyannoteService {
    async fn segment(&self, audio: &AudioClip) -> Result<Vec<SpeakerTurn>> {
        log::info!(
            "Submitting {:.1}s recording for diarization on {}",
            audio.duration_secs(),
            self.device
        );

        let wav = audio.to_wav_bytes()?;
        let part = reqwest::multipart::Part::bytes(wav)
            .file_name("recording.wav")
            .mime_str("audio/wav")
            .map_err(|e| AppError::stage(Stage::Segmentation, e.to_string()))?;
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("device", self.device.to_string());

        let mut request = self
            .client
            .post(format!("{}/diarize", self.endpoint))
            .multipart(form);
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::stage(Stage::Segmentation, format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::stage(
                Stage::Segmentation,
                format!("service returned {}: {}", status, error_text),
            ));
        }

        let parsed: DiarizationResponse = response.json().await.map_err(|e| {
            AppError::stage(Stage::Segmentation, format!("invalid response: {}", e))
        })?;

        log::info!("Diarization produced {} speaker turns", parsed.turns.len());
        Ok(parsed.turns)
    }

    fn provider_name(&self) -> &str {
        "pyannote"
    }
}
