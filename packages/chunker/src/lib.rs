//! Peraturan Chunker - Split Indonesian legal documents into hierarchical chunks.
//!
//! This crate segments a plain-text regulation (peraturan) into an ordered
//! sequence of chunks for retrieval and indexing: one level-1 chunk that
//! summarizes the document header, then one or more chunks per BAB,
//! BAGIAN, LAMPIRAN (level 2) and Pasal (level 3) section.
//!
//! # Example
//!
//! ```
//! use peraturan_chunker::{segment_and_chunk, ChunkType, ChunkingOptions};
//!
//! let text = "PERATURAN PRESIDEN REPUBLIK INDONESIA\n\
//!             NOMOR 5 TAHUN 2020\n\
//!             BAB I\n\
//!             KETENTUAN UMUM\n\
//!             Pasal 1\n\
//!             Peraturan ini mulai berlaku pada tanggal diundangkan.";
//!
//! let chunks = segment_and_chunk(text, &ChunkingOptions::default());
//!
//! assert_eq!(chunks.len(), 3);
//! assert_eq!(chunks[0].chunk_type(), Some(ChunkType::Metadata));
//! assert_eq!(chunks[2].title(), "Pasal 1");
//! assert_eq!(chunks[2].parent_section(), Some("BAB I"));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Size constants, options and validation
//! - [`types`]: Core data types (MetadataRecord, RawSection, Chunk)
//! - [`error`]: Error types and Result alias
//! - [`document`]: Input decoding
//! - [`structure`]: Ordered heading rules and line classification
//! - [`metadata`]: Header metadata extraction
//! - [`splitting`]: Section splitting, parent assignment and re-chunking
//! - [`assembly`]: Stage API and the full pipeline
//! - [`progress`]: Staged processing with progress events
//! - [`summary`]: Processing report and chunk statistics
//! - [`output`]: JSON and YAML writers
//! - [`cli`]: Command-line interface

pub mod assembly;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod metadata;
pub mod output;
pub mod progress;
pub mod splitting;
pub mod structure;
pub mod summary;
pub mod types;

// Re-export main functions
pub use assembly::{segment_and_chunk, DocumentPipeline};
pub use metadata::extract_metadata;
pub use progress::process_document;

// Re-export commonly used items
pub use config::ChunkingOptions;
pub use error::{ChunkerError, Result};
pub use summary::{ChunkSummary, ProcessingReport};
pub use types::{Chunk, ChunkType, ListItem, MetadataRecord, RawSection};
