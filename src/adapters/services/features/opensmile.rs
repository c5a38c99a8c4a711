//! openSMILE functionals extractor adapter
//!
//! Implements the FeatureExtractorPort by invoking the `SMILExtract`
//! binary with an eGeMAPS functionals configuration and parsing its
//! semicolon-separated CSV output into a FeatureTable.
//!
//! The binary only reads files, so the recording is staged into the OS
//! temp directory for the duration of the call. Staging I/O goes through
//! tokio::fs; cleanup is async on the success path, with sync drop guards
//! covering the error paths.

use crate::audio::AudioClip;
use crate::error::{AppError, Result, Stage};
use crate::ports::features::{FeatureExtractorPort, FeatureTable};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::process::Command;

static SCRATCH_COUNTER: AtomicU64 = AtomicU64::new(0);

/// openSMILE subprocess implementation
pub struct OpenSmileExtractor {
    binary: PathBuf,
    config: PathBuf,
}

/// Scratch file removed when the guard drops
struct TempPath(PathBuf);

impl Drop for TempPath {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

fn scratch_path(suffix: &str) -> TempPath {
    let n = SCRATCH_COUNTER.fetch_add(1, Ordering::Relaxed);
    TempPath(std::env::temp_dir().join(format!(
        "callsight-{}-{}.{}",
        std::process::id(),
        n,
        suffix
    )))
}

impl OpenSmileExtractor {
    /// Create an extractor around a SMILExtract binary and config file
    pub fn new(binary: impl Into<PathBuf>, config: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            config: config.into(),
        }
    }

    /// Whether the configured binary exists on disk
    pub fn is_configured(&self) -> bool {
        Path::new(&self.binary).exists()
    }
}

#[async_trait]
impl FeatureExtractorPort for OpenSmileExtractor {
    async fn extract(&self, audio: &AudioClip) -> Result<FeatureTable> {
        let wav_path = scratch_path("wav");
        let csv_path = scratch_path("csv");

        tokio::fs::write(&wav_path.0, audio.to_wav_bytes()?).await?;
        log::info!(
            "Extracting functionals from {:.1}s recording via {}",
            audio.duration_secs(),
            self.binary.display()
        );

        let output = Command::new(&self.binary)
            .arg("-C")
            .arg(&self.config)
            .arg("-I")
            .arg(&wav_path.0)
            .arg("-csvoutput")
            .arg(&csv_path.0)
            .output()
            .await
            .map_err(|e| {
                AppError::stage(
                    Stage::FeatureExtraction,
                    format!("failed to run {}: {}", self.binary.display(), e),
                )
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::stage(
                Stage::FeatureExtraction,
                format!("SMILExtract exited with {}: {}", output.status, stderr.trim()),
            ));
        }

        let raw = tokio::fs::read_to_string(&csv_path.0).await.map_err(|e| {
            AppError::stage(
                Stage::FeatureExtraction,
                format!("no CSV output produced: {}", e),
            )
        })?;

        // Best-effort async cleanup; the drop guards handle whatever is
        // left on early returns.
        let _ = tokio::fs::remove_file(&wav_path.0).await;
        let _ = tokio::fs::remove_file(&csv_path.0).await;

        let table = parse_functionals_csv(&raw)?;
        if table.is_empty() {
            log::warn!("Functionals extraction produced no rows");
        }
        Ok(table)
    }

    fn provider_name(&self) -> &str {
        "opensmile"
    }
}

/// Parse openSMILE's semicolon-separated CSV output.
///
/// Non-numeric columns (the instance `name` column) are dropped; numeric
/// columns are detected from the first data row.
fn parse_functionals_csv(raw: &str) -> Result<FeatureTable> {
    let mut lines = raw.lines().filter(|l| !l.trim().is_empty());
    let header = match lines.next() {
        Some(h) => h,
        None => return Ok(FeatureTable::default()),
    };
    let names: Vec<&str> = header.split(';').map(str::trim).collect();

    let mut numeric_indices: Option<Vec<usize>> = None;
    let mut columns = Vec::new();
    let mut rows = Vec::new();

    for line in lines {
        let fields: Vec<&str> = line.split(';').map(str::trim).collect();

        let indices = numeric_indices.get_or_insert_with(|| {
            let idx: Vec<usize> = fields
                .iter()
                .enumerate()
                .filter(|(i, field)| *i < names.len() && field.parse::<f64>().is_ok())
                .map(|(i, _)| i)
                .collect();
            columns = idx.iter().map(|&i| names[i].to_string()).collect();
            idx
        });

        let mut row = Vec::with_capacity(indices.len());
        for &i in indices.iter() {
            let value = fields
                .get(i)
                .and_then(|field| field.parse::<f64>().ok())
                .ok_or_else(|| {
                    AppError::stage(
                        Stage::FeatureExtraction,
                        format!("malformed CSV value in column '{}'", names[i]),
                    )
                })?;
            row.push(value);
        }
        rows.push(row);
    }

    Ok(FeatureTable { columns, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_functionals_csv() {
        let raw = "name;frameTime;loudness_sma3nz_amean;HNRdBACF_sma3nz_amean\n\
                   'unknown';0.000000;0.420000;11.500000\n";
        let table = parse_functionals_csv(raw).unwrap();

        assert_eq!(table.row_count(), 1);
        assert_eq!(table.get(0, "loudness_sma3nz_amean"), Some(0.42));
        assert_eq!(table.get(0, "HNRdBACF_sma3nz_amean"), Some(11.5));
        // The instance name column is non-numeric and dropped
        assert_eq!(table.get(0, "name"), None);
        // frameTime is numeric and survives; the summarizer never maps it
        assert_eq!(table.get(0, "frameTime"), Some(0.0));
    }

    #[test]
    fn test_parse_empty_output() {
        let table = parse_functionals_csv("").unwrap();
        assert!(table.is_empty());

        let header_only = parse_functionals_csv("name;loudness_sma3nz_amean\n").unwrap();
        assert!(header_only.is_empty());
    }

    #[test]
    fn test_parse_rejects_corrupt_row() {
        let raw = "a;b\n1.0;2.0\n1.0;oops\n";
        assert!(parse_functionals_csv(raw).is_err());
    }

    // The two scratch-file tests share the temp directory; keep them
    // from interleaving.
    static SCRATCH_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    fn scratch_file_count() -> usize {
        let prefix = format!("callsight-{}-", std::process::id());
        std::fs::read_dir(std::env::temp_dir())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name().to_string_lossy().starts_with(&prefix))
            .count()
    }

    #[tokio::test]
    async fn test_failed_extraction_leaves_no_scratch_files() {
        let _guard = SCRATCH_TEST_LOCK.lock().unwrap();
        let before = scratch_file_count();
        let extractor = OpenSmileExtractor::new("/nonexistent/SMILExtract", "/nonexistent/conf");
        let audio = AudioClip {
            samples: vec![0.1; 8000],
            sample_rate: 8000,
            channels: 1,
        };

        let err = extractor.extract(&audio).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Stage {
                stage: Stage::FeatureExtraction,
                ..
            }
        ));
        assert_eq!(scratch_file_count(), before);
    }

    #[test]
    fn test_scratch_file_removed_on_drop() {
        let _guard = SCRATCH_TEST_LOCK.lock().unwrap();
        let path = {
            let scratch = scratch_path("wav");
            std::fs::write(&scratch.0, b"data").unwrap();
            assert!(scratch.0.exists());
            scratch.0.clone()
        };
        assert!(!path.exists());
    }
}
