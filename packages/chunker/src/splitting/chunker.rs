//! Size-bounded re-chunking of section bodies.

use std::sync::LazyLock;

use regex::Regex;

use super::strategy::{overlap_strategy, OverlapStrategy};
use crate::config::ChunkingOptions;
use crate::types::{Chunk, RawSection};

/// Sentence boundary: terminal punctuation followed by whitespace.
///
/// The punctuation stays with the preceding sentence; the whitespace is
/// dropped.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?;]\s+").expect("valid regex"));

/// Split text into sentence-like units.
///
/// Abbreviations are not recognized; any period followed by whitespace
/// ends a sentence.
#[must_use]
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in SENTENCE_BREAK.find_iter(text) {
        // Punctuation is a single ASCII byte
        sentences.push(&text[start..=m.start()]);
        start = m.end();
    }
    sentences.push(&text[start..]);

    sentences.retain(|s| !s.is_empty());
    sentences
}

/// Re-splits section bodies that exceed the size bound.
pub struct ContentChunker {
    max_chunk_size: usize,
    strategy: Box<dyn OverlapStrategy>,
}

impl ContentChunker {
    /// Create a chunker with an explicit overlap strategy.
    #[must_use]
    pub fn new(max_chunk_size: usize, strategy: Box<dyn OverlapStrategy>) -> Self {
        Self {
            max_chunk_size,
            strategy,
        }
    }

    /// Create a chunker from run options.
    #[must_use]
    pub fn from_options(options: &ChunkingOptions) -> Self {
        Self::new(
            options.max_chunk_size,
            overlap_strategy(options.overlap_size),
        )
    }

    /// Turn one section into one or more chunks.
    ///
    /// A body within the bound becomes a single chunk with the section's own
    /// title and no chunk id. Otherwise sentences are packed greedily; when
    /// more than one part results, titles get a `(Bagian N)` suffix and ids
    /// are `{section_number}_{N}` (or `chunk_{N}` for unnumbered sections).
    #[must_use]
    pub fn rechunk(&self, section: &RawSection) -> Vec<Chunk> {
        let body = section.body_text.as_str();

        if body.chars().count() <= self.max_chunk_size {
            return vec![Chunk::for_section(section, &section.title, body)];
        }

        let parts = self.pack_sentences(section, body);

        if parts.len() == 1 {
            return parts
                .into_iter()
                .map(|content| Chunk::for_section(section, &section.title, content))
                .collect();
        }

        let id_prefix = section.section_number.as_deref().unwrap_or("chunk");

        tracing::debug!(
            section = %section.reference(),
            parts = parts.len(),
            "re-chunked oversized section"
        );

        parts
            .into_iter()
            .enumerate()
            .map(|(i, content)| {
                let n = i + 1;
                Chunk::for_section(section, format!("{} (Bagian {n})", section.title), content)
                    .with_chunk_id(format!("{id_prefix}_{n}"))
            })
            .collect()
    }

    fn pack_sentences(&self, section: &RawSection, body: &str) -> Vec<String> {
        let mut parts = Vec::new();
        let mut buffer = String::new();
        let mut buffer_len = 0;

        for sentence in split_sentences(body) {
            let sentence_len = sentence.chars().count();

            if sentence_len > self.max_chunk_size {
                tracing::warn!(
                    section = %section.reference(),
                    length = sentence_len,
                    max = self.max_chunk_size,
                    "sentence exceeds max chunk size, emitting it whole"
                );
            }

            if buffer_len + sentence_len > self.max_chunk_size && !buffer.is_empty() {
                parts.push(buffer.trim().to_string());
                buffer = self.strategy.seed(&buffer, sentence);
                buffer_len = buffer.chars().count();
            } else if buffer.is_empty() {
                buffer.push_str(sentence);
                buffer_len = sentence_len;
            } else {
                buffer.push(' ');
                buffer.push_str(sentence);
                buffer_len += sentence_len + 1;
            }
        }

        let rest = buffer.trim();
        if !rest.is_empty() {
            parts.push(rest.to_string());
        }

        parts
    }
}
