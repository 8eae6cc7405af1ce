//! Error types for the harvester.
//!
//! Uses the dual-error pattern: `HarvesterError` for library consumers
//! with detailed error context, and `IngestFailure` values for per-document
//! problems that must not abort a batch.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the harvester library.
#[derive(Debug, Error)]
pub enum HarvesterError {
    /// Invalid regulation id format.
    #[error("Invalid regulation id: '{0}'. Expected REG-NNN (e.g., REG-001)")]
    InvalidRegulationId(String),

    /// Regulation id not present in the corpus.
    #[error("Regulation not found: {0}")]
    RegulationNotFound(String),

    /// Source file is not valid UTF-8.
    #[error("Unreadable encoding in {file}: {source}")]
    Encoding {
        file: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// Corpus directory contains no markup files.
    #[error("No XML files found in {}", .0.display())]
    EmptyCorpus(PathBuf),

    /// Snapshot file does not exist.
    #[error("Corpus snapshot not found: {}. Run `regulation-harvester ingest` first", .0.display())]
    SnapshotMissing(PathBuf),

    /// Process-wide corpus has not been initialized.
    #[error("Corpus is not loaded")]
    CorpusNotLoaded,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for harvester operations.
pub type Result<T> = std::result::Result<T, HarvesterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HarvesterError::InvalidRegulationId("INVALID".to_string());
        assert!(err.to_string().contains("INVALID"));
        assert!(err.to_string().contains("REG-NNN"));
    }

    #[test]
    fn test_snapshot_missing_mentions_ingest() {
        let err = HarvesterError::SnapshotMissing(PathBuf::from("data/regulations.json"));
        assert_eq!(
            err.to_string(),
            "Corpus snapshot not found: data/regulations.json. Run `regulation-harvester ingest` first"
        );
    }
}
