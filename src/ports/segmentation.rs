/// Speaker segmentation port trait
///
/// Defines the interface for diarization services that partition a
/// recording into speaker-attributed turns.
use crate::audio::AudioClip;
use crate::domain::models::SpeakerTurn;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Execution device for the segmentation model.
///
/// Selection only affects latency, never output content, so it is a
/// construction-time capability probe rather than pipeline logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    Cuda,
    Mps,
    Cpu,
}

impl std::fmt::Display for Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Device::Cuda => write!(f, "cuda"),
            Device::Mps => write!(f, "mps"),
            Device::Cpu => write!(f, "cpu"),
        }
    }
}

impl Device {
    /// Best-effort local availability probe
    pub fn is_available(self) -> bool {
        match self {
            Device::Cuda => {
                Path::new("/dev/nvidia0").exists() || Path::new("/dev/nvidiactl").exists()
            }
            Device::Mps => cfg!(target_os = "macos"),
            Device::Cpu => true,
        }
    }

    /// Walk the preference list once; first available wins, CPU is the
    /// unconditional fallback.
    pub fn first_available(preferences: &[Device]) -> Device {
        preferences
            .iter()
            .copied()
            .find(|d| d.is_available())
            .unwrap_or(Device::Cpu)
    }
}

/// Port trait for speaker segmentation (diarization) services
#[async_trait]
pub trait SegmenterPort: Send + Sync {
    /// Partition the recording into ordered speaker turns.
    ///
    /// Zero turns is a valid outcome for a silent recording.
    async fn segment(&self, audio: &AudioClip) -> Result<Vec<SpeakerTurn>>;

    /// Get the provider name
    fn provider_name(&self) -> &str;
}
