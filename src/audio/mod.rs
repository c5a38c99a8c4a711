//! In-memory audio clips
//!
//! Decoding, millisecond-accurate slicing, and WAV re-encoding using the
//! hound crate. Per-segment slices are plain owned buffers, so a slice
//! never outlives the call that created it and nothing touches the
//! filesystem between diarization and transcription.

use crate::error::{AppError, Result};
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use std::io::Cursor;
use std::path::Path;

/// A decoded audio recording: interleaved f32 samples in [-1.0, 1.0].
#[derive(Debug, Clone)]
pub struct AudioClip {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
    pub channels: u16,
}

impl AudioClip {
    /// Decode a WAV file from disk
    pub fn from_wav_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let reader = WavReader::open(path).map_err(|e| {
            AppError::Input(format!("Failed to decode audio file {}: {}", path.display(), e))
        })?;
        Self::from_reader(reader)
    }

    /// Decode a WAV file already held in memory
    pub fn from_wav_bytes(bytes: &[u8]) -> Result<Self> {
        let reader = WavReader::new(Cursor::new(bytes))
            .map_err(|e| AppError::Input(format!("Failed to decode audio bytes: {}", e)))?;
        Self::from_reader(reader)
    }

    fn from_reader<R: std::io::Read>(mut reader: WavReader<R>) -> Result<Self> {
        let spec = reader.spec();
        let samples: Vec<f32> = match spec.sample_format {
            SampleFormat::Float => reader
                .samples::<f32>()
                .collect::<std::result::Result<_, _>>()
                .map_err(|e| AppError::Input(format!("Corrupt audio samples: {}", e)))?,
            SampleFormat::Int => {
                // Normalize to [-1.0, 1.0] by the full range of the bit depth
                let max = (1i64 << (spec.bits_per_sample - 1)) as f32;
                reader
                    .samples::<i32>()
                    .map(|s| s.map(|v| v as f32 / max))
                    .collect::<std::result::Result<_, _>>()
                    .map_err(|e| AppError::Input(format!("Corrupt audio samples: {}", e)))?
            }
        };

        if samples.is_empty() {
            return Err(AppError::Input("Audio recording is empty".to_string()));
        }

        Ok(Self {
            samples,
            sample_rate: spec.sample_rate,
            channels: spec.channels,
        })
    }

    /// Total duration in seconds
    pub fn duration_secs(&self) -> f64 {
        let frames = self.samples.len() / self.channels as usize;
        frames as f64 / self.sample_rate as f64
    }

    /// Extract the clip covering `[start_secs, end_secs)`.
    ///
    /// Boundaries are resolved at millisecond resolution and clamped to the
    /// clip; an interval entirely past the end yields an empty slice.
    pub fn slice(&self, start_secs: f64, end_secs: f64) -> Result<AudioClip> {
        if start_secs < 0.0 || end_secs < start_secs {
            return Err(AppError::Audio(format!(
                "Invalid slice interval [{:.3}, {:.3})",
                start_secs, end_secs
            )));
        }

        let start_ms = (start_secs * 1000.0).round() as u64;
        let end_ms = (end_secs * 1000.0).round() as u64;
        let start_frame = (start_ms * self.sample_rate as u64 / 1000) as usize;
        let end_frame = (end_ms * self.sample_rate as u64 / 1000) as usize;

        let total_frames = self.samples.len() / self.channels as usize;
        let start_frame = start_frame.min(total_frames);
        let end_frame = end_frame.min(total_frames);

        let start_idx = start_frame * self.channels as usize;
        let end_idx = end_frame * self.channels as usize;

        Ok(AudioClip {
            samples: self.samples[start_idx..end_idx].to_vec(),
            sample_rate: self.sample_rate,
            channels: self.channels,
        })
    }

    /// Encode the clip as a 16-bit PCM WAV held entirely in memory
    pub fn to_wav_bytes(&self) -> Result<Vec<u8>> {
        let spec = WavSpec {
            channels: self.channels,
            sample_rate: self.sample_rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };

        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = WavWriter::new(&mut cursor, spec)
                .map_err(|e| AppError::Audio(format!("Failed to create WAV encoder: {}", e)))?;

            for &sample in &self.samples {
                // Clamp, then scale by 32768.0 so -1.0 maps to i16::MIN;
                // +1.0 saturates to i16::MAX on the cast.
                let clamped = sample.clamp(-1.0, 1.0);
                let i16_sample = (clamped * 32768.0) as i16;
                writer
                    .write_sample(i16_sample)
                    .map_err(|e| AppError::Audio(format!("Failed to write sample: {}", e)))?;
            }

            writer
                .finalize()
                .map_err(|e| AppError::Audio(format!("Failed to finalize WAV data: {}", e)))?;
        }

        Ok(cursor.into_inner())
    }
}
