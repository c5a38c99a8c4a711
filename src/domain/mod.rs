/// Domain layer
///
/// Core data model, the versioned acoustic feature-name mapping, and the
/// analysis prompt template. Platform- and provider-agnostic.
pub mod features;
pub mod models;
pub mod prompts;

pub use features::{FeatureMap, FEATURE_MAP_V1};
pub use models::{
    AnalysisReport, FeatureSummary, PipelineResult, SpeakerTurn, Transcript, TranscriptSegment,
};
pub use prompts::AnalysisPrompt;
