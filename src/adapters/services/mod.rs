/// External service adapters
pub mod asr;
pub mod diarization;
pub mod features;
pub mod llm;
