//! Feature summarizer
//!
//! Projects the extractor's raw functionals row through the versioned
//! name mapping into the compact summary handed to the analysis model.
//! Pure: no I/O, deterministic, and tolerant of schema drift. A mapped
//! name missing from the input is omitted, never an error.

use crate::domain::features::{FeatureMap, FEATURE_MAP_V1};
use crate::domain::models::FeatureSummary;
use crate::ports::features::FeatureTable;

pub struct FeatureSummarizer {
    feature_map: FeatureMap,
}

impl Default for FeatureSummarizer {
    fn default() -> Self {
        Self {
            feature_map: FEATURE_MAP_V1,
        }
    }
}

impl FeatureSummarizer {
    pub fn new(feature_map: FeatureMap) -> Self {
        Self { feature_map }
    }

    /// Project the first row of the table onto semantic feature names.
    ///
    /// An empty table yields an empty summary, meaning "no acoustic signal
    /// available"; downstream stages degrade rather than fail.
    pub fn summarize(&self, table: &FeatureTable) -> FeatureSummary {
        if table.is_empty() {
            return FeatureSummary::new();
        }
        if table.row_count() > 1 {
            log::warn!(
                "Feature table has {} rows; functionals extraction expects one, using the first",
                table.row_count()
            );
        }

        let mut summary = FeatureSummary::new();
        for &(column, semantic_name) in self.feature_map {
            if let Some(value) = table.get(0, column) {
                summary.insert(semantic_name.to_string(), value);
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmapped_column_dropped() {
        let table = FeatureTable::from_row(&[
            ("loudness_sma3nz_amean", 0.42),
            ("unknown_feature", 9.9),
        ]);
        let summary = FeatureSummarizer::default().summarize(&table);

        assert_eq!(summary.get("mean_loudness"), Some(&0.42));
        assert_eq!(summary.len(), 1);
    }

    #[test]
    fn test_missing_mapped_column_omitted() {
        let table = FeatureTable::from_row(&[("jitterLocal_sma3nz_amean", 0.01)]);
        let summary = FeatureSummarizer::default().summarize(&table);

        assert_eq!(summary.get("jitter_local"), Some(&0.01));
        assert!(!summary.contains_key("mean_loudness"));
    }

    #[test]
    fn test_empty_table_yields_empty_summary() {
        let summary = FeatureSummarizer::default().summarize(&FeatureTable::default());
        assert!(summary.is_empty());
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let table = FeatureTable::from_row(&[
            ("F0semitoneFrom27.5Hz_sma3nz_amean", 27.3),
            ("loudness_sma3nz_amean", 0.5),
            ("HNRdBACF_sma3nz_amean", 12.1),
        ]);
        let summarizer = FeatureSummarizer::default();

        let first = serde_json::to_vec(&summarizer.summarize(&table)).unwrap();
        let second = serde_json::to_vec(&summarizer.summarize(&table)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_extra_rows_ignored() {
        let table = FeatureTable {
            columns: vec!["loudness_sma3nz_amean".to_string()],
            rows: vec![vec![0.1], vec![0.9]],
        };
        let summary = FeatureSummarizer::default().summarize(&table);
        assert_eq!(summary.get("mean_loudness"), Some(&0.1));
    }
}
