/// Acoustic functionals port trait
///
/// Defines the interface for feature extractors that reduce a recording
/// to a single row of scalar functionals (pitch, loudness, jitter, ...)
/// keyed by a large extractor-defined vocabulary.
use crate::audio::AudioClip;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Raw numeric feature table as produced by the extractor.
///
/// One column vocabulary shared by all rows; a functionals extraction
/// normally yields exactly one row, and zero rows is valid output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

impl FeatureTable {
    /// Build a one-row table from (column, value) pairs. Test and adapter
    /// convenience.
    pub fn from_row(pairs: &[(&str, f64)]) -> Self {
        Self {
            columns: pairs.iter().map(|(c, _)| c.to_string()).collect(),
            rows: vec![pairs.iter().map(|(_, v)| *v).collect()],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Look up a value by row index and column name
    pub fn get(&self, row: usize, column: &str) -> Option<f64> {
        let col_idx = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row)?.get(col_idx).copied()
    }
}

/// Port trait for acoustic functionals extraction
#[async_trait]
pub trait FeatureExtractorPort: Send + Sync {
    /// Extract functionals for the whole recording
    async fn extract(&self, audio: &AudioClip) -> Result<FeatureTable>;

    /// Get the provider name
    fn provider_name(&self) -> &str;
}
