//! Persisted transcript documents
//!
//! The transcript artifact is a single UTF-8 JSON array of
//! `{speaker, start, end, text}` objects, the same schema whether it is
//! consumed standalone or fed back into synthesis.

use crate::domain::models::Transcript;
use crate::error::Result;
use std::path::Path;

/// Write the transcript document to disk
pub fn write_transcript_json<P: AsRef<Path>>(transcript: &Transcript, path: P) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(transcript)?;
    std::fs::write(path, json)?;
    log::info!(
        "Saved transcript ({} segments) to {}",
        transcript.len(),
        path.display()
    );
    Ok(())
}

/// Read a previously persisted transcript document
pub fn read_transcript_json<P: AsRef<Path>>(path: P) -> Result<Transcript> {
    let json = std::fs::read_to_string(path)?;
    let transcript = serde_json::from_str(&json)?;
    Ok(transcript)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::TranscriptSegment;
    use tempfile::tempdir;

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("call_diarized.json");

        let transcript = Transcript::new(vec![
            TranscriptSegment {
                speaker: "SPEAKER_00".to_string(),
                start: 0.0,
                end: 4.5,
                text: "hi, thanks for taking the time".to_string(),
            },
            TranscriptSegment {
                speaker: "SPEAKER_01".to_string(),
                start: 4.5,
                end: 6.0,
                text: "of course".to_string(),
            },
        ]);

        write_transcript_json(&transcript, &path).unwrap();
        let loaded = read_transcript_json(&path).unwrap();
        assert_eq!(loaded, transcript);
    }

    #[test]
    fn test_document_is_a_json_array() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.json");

        write_transcript_json(&Transcript::default(), &path).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw.trim(), "[]");
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let err = read_transcript_json("/nonexistent/transcript.json").unwrap_err();
        assert!(matches!(err, crate::error::AppError::Io(_)));
    }
}
