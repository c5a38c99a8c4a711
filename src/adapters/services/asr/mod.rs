/// ASR service adapters
pub mod whisper;

pub use whisper::WhisperService;
