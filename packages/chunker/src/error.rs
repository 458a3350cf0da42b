//! Error types for the chunker.
//!
//! Only an undecodable input document is fatal to the pipeline. Missing
//! metadata fields, empty sections and odd numbering are not errors at all;
//! the remaining variants belong to callers (option validation, output).

use thiserror::Error;

/// Main error type for the chunker library.
#[derive(Debug, Error)]
pub enum ChunkerError {
    /// Input bytes are not valid text in the requested encoding.
    #[error("Document is not valid UTF-8 (first invalid byte at offset {offset})")]
    Encoding { offset: usize },

    /// Maximum chunk size outside the accepted range.
    #[error("Invalid max chunk size: {0}. Expected a value between 100 and 5000")]
    InvalidChunkSize(usize),

    /// Overlap size outside the accepted range.
    #[error("Invalid overlap size: {0}. Expected a value between 0 and 500")]
    InvalidOverlapSize(usize),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

/// Result type alias for chunker operations.
pub type Result<T> = std::result::Result<T, ChunkerError>;
