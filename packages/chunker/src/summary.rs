//! Processing report and chunk statistics.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Chunk, MetadataRecord};

/// Outcome of a processing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Completed,
    Failed,
}

/// Aggregate statistics over a chunk sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkSummary {
    /// Number of chunks, metadata chunk included.
    pub total_chunks: usize,

    /// Chunk count per level, keyed by the level as a string.
    pub level_counts: BTreeMap<String, usize>,

    /// Chunk count per chunk type; untyped chunks count as `unknown`.
    pub type_counts: BTreeMap<String, usize>,

    /// Sum of `content_length` over all chunks.
    pub total_characters: usize,
}

impl ChunkSummary {
    /// Compute the summary of a chunk sequence.
    #[must_use]
    pub fn from_chunks(chunks: &[Chunk]) -> Self {
        let mut summary = Self {
            total_chunks: chunks.len(),
            ..Self::default()
        };

        for chunk in chunks {
            *summary
                .level_counts
                .entry(chunk.level().to_string())
                .or_insert(0) += 1;

            let chunk_type = chunk.chunk_type().map_or("unknown", |t| t.as_str());
            *summary
                .type_counts
                .entry(chunk_type.to_string())
                .or_insert(0) += 1;

            summary.total_characters += chunk.content_length();
        }

        summary
    }
}

/// Final record of a processing run.
///
/// A failed run carries only the error description; no partial chunks.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingReport {
    /// Outcome of the run.
    pub status: ReportStatus,

    /// Wall-clock time from decoding to the report.
    pub processing_time_secs: f64,

    /// When the report was produced.
    pub completed_at: DateTime<Utc>,

    /// Header metadata; absent on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MetadataRecord>,

    /// Chunks in document order; empty on failure.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub chunks: Vec<Chunk>,

    /// Counts over `chunks`; absent on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ChunkSummary>,

    /// Error description of a failed run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProcessingReport {
    /// Report for a successful run.
    #[must_use]
    pub fn completed(
        metadata: MetadataRecord,
        chunks: Vec<Chunk>,
        processing_time_secs: f64,
    ) -> Self {
        let summary = ChunkSummary::from_chunks(&chunks);
        Self {
            status: ReportStatus::Completed,
            processing_time_secs,
            completed_at: Utc::now(),
            metadata: Some(metadata),
            chunks,
            summary: Some(summary),
            error: None,
        }
    }

    /// Report for a failed run.
    #[must_use]
    pub fn failed(error: impl Into<String>, processing_time_secs: f64) -> Self {
        Self {
            status: ReportStatus::Failed,
            processing_time_secs,
            completed_at: Utc::now(),
            metadata: None,
            chunks: Vec::new(),
            summary: None,
            error: Some(error.into()),
        }
    }
}
