/// Call analysis pipeline
///
/// Sequencing of the four external capabilities: speaker segmentation,
/// per-segment transcription, acoustic functionals summarization, and the
/// final report synthesis.
pub mod coordinator;
pub mod diarizer;
pub mod summarizer;
pub mod synthesis;

pub use coordinator::PipelineCoordinator;
pub use diarizer::DiarizationOrchestrator;
pub use summarizer::FeatureSummarizer;
pub use synthesis::AnalysisSynthesizer;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Run-level cancellation signal, observed at every suspension boundary.
///
/// An in-flight external call that cannot be interrupted is allowed to
/// finish; its result is discarded when the flag is next checked.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}
