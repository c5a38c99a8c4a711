/// Synthesis service port trait
///
/// Defines the interface for the natural-language generation capability
/// that turns the structured analysis prompt into the final report.
use crate::error::Result;
use async_trait::async_trait;

/// Port trait for report synthesis services
///
/// Output is free text with non-deterministic, temperature-controlled
/// content; callers never parse or canonicalize it.
#[async_trait]
pub trait SynthesizerPort: Send + Sync {
    /// Generate the report for one structured prompt
    async fn synthesize(&self, prompt: &str) -> Result<String>;

    /// Get the provider name
    fn provider_name(&self) -> &str;
}
