/// Transcription service port trait
///
/// Defines the interface for ASR (Automatic Speech Recognition) services
/// operating on one audio slice at a time.
use crate::audio::AudioClip;
use crate::error::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// Port trait for transcription services (ASR)
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TranscriberPort: Send + Sync {
    /// Transcribe a single audio slice to plain text
    async fn transcribe(&self, clip: &AudioClip) -> Result<String>;

    /// Get the provider name
    fn provider_name(&self) -> &str;
}
