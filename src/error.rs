/// Error types for the call analysis pipeline
///
/// Uses thiserror for ergonomic error handling with proper Display implementations.
use thiserror::Error;

/// Pipeline stage identifiers, used to attribute external-capability failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Segmentation,
    Transcription,
    FeatureExtraction,
    Synthesis,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Segmentation => write!(f, "segmentation"),
            Stage::Transcription => write!(f, "transcription"),
            Stage::FeatureExtraction => write!(f, "feature_extraction"),
            Stage::Synthesis => write!(f, "synthesis"),
        }
    }
}

/// Main error type for the pipeline
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("Stage '{stage}' failed: {message}")]
    Stage { stage: Stage, message: String },

    #[error("Run cancelled")]
    Cancelled,

    #[error("Audio error: {0}")]
    Audio(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
}

impl AppError {
    /// Attribute an error message to a pipeline stage
    pub fn stage(stage: Stage, message: impl Into<String>) -> Self {
        AppError::Stage {
            stage,
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;
