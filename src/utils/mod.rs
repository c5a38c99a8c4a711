/// Shared utilities
pub mod transcript_file;
