//! Section splitting and size-bounded re-chunking.
//!
//! The document is cut into raw sections at structural headings, each
//! section is given its parent by a level stack, and section bodies longer
//! than the size bound are re-split at sentence boundaries.

mod chunker;
mod hierarchy;
mod splitter;
mod strategy;

pub use chunker::{split_sentences, ContentChunker};
pub use hierarchy::assign_parents;
pub use splitter::{split_sections, SectionSplitter};
pub use strategy::{overlap_strategy, NoOverlap, OverlapStrategy, SentenceTailOverlap};
