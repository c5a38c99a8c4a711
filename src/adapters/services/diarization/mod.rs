/// Speaker diarization adapters
pub mod pyannote;

pub use pyannote::PyannoteService;
