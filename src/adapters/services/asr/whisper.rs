//! OpenAI Whisper transcription adapter
//!
//! Implements the TranscriberPort against the `audio/transcriptions`
//! endpoint. Each call uploads one in-memory WAV slice as multipart form
//! data and returns the plain transcription text.

use crate::audio::AudioClip;
use crate::error::{AppError, Result, Stage};
use crate::ports::transcription::TranscriberPort;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// Whisper service implementation
pub struct WhisperService {
    client: Client,
    api_key: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: String,
}

impl WhisperService {
    /// Create a new Whisper service with the given API key and model
    pub fn new(api_key: String, model: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            model,
        })
    }

    /// Check if the service is configured (has API key)
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[async_trait]
impl TranscriberPort for WhisperService {
    async fn transcribe(&self, clip: &AudioClip) -> Result<String> {
        let wav = clip.to_wav_bytes()?;
        log::debug!(
            "Uploading {:.2}s slice ({} bytes) to Whisper model {}",
            clip.duration_secs(),
            wav.len(),
            self.model
        );

        let part = reqwest::multipart::Part::bytes(wav)
            .file_name("segment.wav")
            .mime_str("audio/wav")
            .map_err(|e| AppError::stage(Stage::Transcription, e.to_string()))?;
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("model", self.model.clone())
            .text("response_format", "json");

        let response = self
            .client
            .post(format!("{}/audio/transcriptions", OPENAI_API_BASE))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                AppError::stage(Stage::Transcription, format!("request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::stage(
                Stage::Transcription,
                format!("service returned {}: {}", status, error_text),
            ));
        }

        let parsed: TranscriptionResponse = response.json().await.map_err(|e| {
            AppError::stage(Stage::Transcription, format!("invalid response: {}", e))
        })?;

        Ok(parsed.text)
    }

    fn provider_name(&self) -> &str {
        "whisper"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_creation() {
        let service = WhisperService::new(
            "sk-test".to_string(),
            "whisper-1".to_string(),
            Duration::from_secs(60),
        )
        .unwrap();
        assert_eq!(service.provider_name(), "whisper");
        assert!(service.is_configured());
    }

    #[test]
    fn test_service_not_configured() {
        let service = WhisperService::new(
            String::new(),
            "whisper-1".to_string(),
            Duration::from_secs(60),
        )
        .unwrap();
        assert!(!service.is_configured());
    }

    #[test]
    fn test_response_parsing() {
        let parsed: TranscriptionResponse =
            serde_json::from_str(r#"{"text":" hello world "}"#).unwrap();
        assert_eq!(parsed.text, " hello world ");
    }
}
