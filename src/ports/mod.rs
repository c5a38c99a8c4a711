/// Port trait definitions (interfaces)
///
/// These traits define the contracts for adapters to implement.
/// Following the ports-and-adapters (hexagonal) architecture pattern:
/// the pipeline depends only on these interfaces, so every external
/// capability can be substituted with a stub in tests.
pub mod features;
pub mod segmentation;
pub mod synthesis;
pub mod transcription;

#[cfg(test)]
pub mod mocks;

pub use features::{FeatureExtractorPort, FeatureTable};
pub use segmentation::{Device, SegmenterPort};
pub use synthesis::SynthesizerPort;
pub use transcription::TranscriberPort;
