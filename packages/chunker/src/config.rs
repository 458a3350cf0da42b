//! Configuration constants and validation functions for the chunker.

use serde::{Deserialize, Serialize};

use crate::error::{ChunkerError, Result};

/// Default upper bound on a chunk's content length, in characters.
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 1500;

/// Default overlap budget between consecutive sub-chunks, in characters.
///
/// Only whether this is zero matters to the chunker: a non-zero value
/// enables sentence-tail seeding, it is not a byte-exact window.
pub const DEFAULT_OVERLAP_SIZE: usize = 100;

/// Smallest accepted maximum chunk size.
pub const MIN_CHUNK_SIZE: usize = 100;

/// Largest accepted maximum chunk size.
pub const MAX_CHUNK_SIZE: usize = 5000;

/// Largest accepted overlap size.
pub const MAX_OVERLAP_SIZE: usize = 500;

/// Title of the synthesized level-1 chunk.
pub const METADATA_CHUNK_TITLE: &str = "Metadata Dokumen";

/// Identifier of the synthesized level-1 chunk.
pub const METADATA_CHUNK_ID: &str = "metadata";

/// Size parameters for one chunking run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkingOptions {
    /// Maximum characters per chunk before a section body is re-split.
    pub max_chunk_size: usize,

    /// Overlap budget; zero disables overlap seeding.
    pub overlap_size: usize,
}

impl ChunkingOptions {
    /// Create options with explicit sizes. Does not validate.
    #[must_use]
    pub fn new(max_chunk_size: usize, overlap_size: usize) -> Self {
        Self {
            max_chunk_size,
            overlap_size,
        }
    }

    /// Check both sizes against the accepted ranges.
    ///
    /// The pipeline itself accepts any values; this is for callers that
    /// take sizes from users.
    pub fn validate(&self) -> Result<()> {
        validate_chunk_size(self.max_chunk_size)?;
        validate_overlap_size(self.overlap_size)
    }
}

impl Default for ChunkingOptions {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CHUNK_SIZE, DEFAULT_OVERLAP_SIZE)
    }
}

/// Validate a maximum chunk size.
///
/// # Examples
/// ```
/// use peraturan_chunker::config::validate_chunk_size;
///
/// assert!(validate_chunk_size(1500).is_ok());
/// assert!(validate_chunk_size(99).is_err());
/// ```
pub fn validate_chunk_size(size: usize) -> Result<()> {
    if (MIN_CHUNK_SIZE..=MAX_CHUNK_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(ChunkerError::InvalidChunkSize(size))
    }
}

/// Validate an overlap size.
///
/// # Examples
/// ```
/// use peraturan_chunker::config::validate_overlap_size;
///
/// assert!(validate_overlap_size(0).is_ok());
/// assert!(validate_overlap_size(501).is_err());
/// ```
pub fn validate_overlap_size(size: usize) -> Result<()> {
    if size <= MAX_OVERLAP_SIZE {
        Ok(())
    } else {
        Err(ChunkerError::InvalidOverlapSize(size))
    }
}
