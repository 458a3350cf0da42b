//! Chunk assembly: the pipeline from raw text to an ordered chunk sequence.
//!
//! The stages are exposed individually on [`DocumentPipeline`] so callers
//! can report progress between them; [`segment_and_chunk`] runs them all.
//! Metadata is returned as a value and passed into [`DocumentPipeline::metadata_chunk`]
//! explicitly, so one pipeline can serve many documents.

use crate::config::{ChunkingOptions, METADATA_CHUNK_ID, METADATA_CHUNK_TITLE};
use crate::metadata;
use crate::splitting::{assign_parents, ContentChunker, SectionSplitter};
use crate::structure::StructureClassifier;
use crate::types::{Chunk, ChunkType, ListItem, MetadataRecord, RawSection, LEVEL_METADATA};

/// Stage-by-stage document pipeline.
pub struct DocumentPipeline {
    splitter: SectionSplitter,
    chunker: ContentChunker,
}

impl DocumentPipeline {
    /// Create a pipeline with the Indonesian rule table.
    #[must_use]
    pub fn new(options: &ChunkingOptions) -> Self {
        Self::with_classifier(options, StructureClassifier::default())
    }

    /// Create a pipeline with a custom structure classifier.
    #[must_use]
    pub fn with_classifier(options: &ChunkingOptions, classifier: StructureClassifier) -> Self {
        Self {
            splitter: SectionSplitter::new(classifier),
            chunker: ContentChunker::from_options(options),
        }
    }

    /// Stage 1: scan the header.
    #[must_use]
    pub fn extract_metadata(&self, text: &str) -> MetadataRecord {
        metadata::extract_metadata(text)
    }

    /// Stage 2: cut the text into flat sections.
    #[must_use]
    pub fn split(&self, text: &str) -> Vec<RawSection> {
        self.splitter.split(text)
    }

    /// Stage 3: assign parents in place.
    pub fn build_hierarchy(&self, sections: &mut [RawSection]) {
        assign_parents(sections);
    }

    /// Stage 4: chunk one section. Empty bodies yield nothing.
    #[must_use]
    pub fn chunk_section(&self, section: &RawSection) -> Vec<Chunk> {
        if section.body_text.trim().is_empty() {
            tracing::debug!(section = %section.reference(), "skipping section without body");
            return Vec::new();
        }
        self.chunker.rechunk(section)
    }

    /// Build the level-1 chunk for a metadata record.
    #[must_use]
    pub fn metadata_chunk(&self, metadata: &MetadataRecord) -> Chunk {
        metadata_chunk(metadata)
    }

    /// Run every stage and return the chunks in document order.
    #[must_use]
    pub fn run(&self, text: &str) -> Vec<Chunk> {
        let metadata = self.extract_metadata(text);
        let mut chunks = vec![self.metadata_chunk(&metadata)];

        let mut sections = self.split(text);
        self.build_hierarchy(&mut sections);

        for section in &sections {
            chunks.extend(self.chunk_section(section));
        }

        tracing::debug!(
            sections = sections.len(),
            chunks = chunks.len(),
            "assembled document chunks"
        );

        chunks
    }
}

/// Segment a document into its ordered chunk sequence.
///
/// The first chunk is always the level-1 metadata chunk, even when no
/// header field was found. Sizes are not validated here; see
/// [`ChunkingOptions::validate`].
///
/// # Examples
/// ```
/// use peraturan_chunker::{segment_and_chunk, ChunkingOptions};
///
/// let text = "BAB I\nPasal 1\nIsi pasal satu.";
/// let chunks = segment_and_chunk(text, &ChunkingOptions::default());
///
/// assert_eq!(chunks.len(), 2);
/// assert_eq!(chunks[0].level(), 1);
/// assert_eq!(chunks[1].parent_section(), Some("BAB I"));
/// ```
#[must_use]
pub fn segment_and_chunk(text: &str, options: &ChunkingOptions) -> Vec<Chunk> {
    DocumentPipeline::new(options).run(text)
}

/// Render a metadata record as the level-1 chunk.
///
/// Present scalar fields become `Label: value` lines; the Menimbang and
/// Mengingat lists follow under their own headers as indented
/// `  {point}. {text}` lines. The full record is attached to the chunk.
#[must_use]
pub fn metadata_chunk(metadata: &MetadataRecord) -> Chunk {
    let mut lines: Vec<String> = Vec::new();

    let fields = [
        ("Judul", &metadata.judul),
        ("Nomor", &metadata.nomor),
        ("Tahun", &metadata.tahun),
        ("Tentang", &metadata.tentang),
    ];
    for (label, value) in fields {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            lines.push(format!("{label}: {value}"));
        }
    }

    push_list(&mut lines, "Menimbang", metadata.menimbang.as_deref());
    push_list(&mut lines, "Mengingat", metadata.mengingat.as_deref());

    Chunk::new(LEVEL_METADATA, METADATA_CHUNK_TITLE, lines.join("\n"))
        .with_chunk_id(METADATA_CHUNK_ID)
        .with_chunk_type(ChunkType::Metadata)
        .with_metadata(metadata.clone())
}

fn push_list(lines: &mut Vec<String>, header: &str, items: Option<&[ListItem]>) {
    let Some(items) = items.filter(|items| !items.is_empty()) else {
        return;
    };
    lines.push(format!("\n{header}:"));
    lines.extend(
        items
            .iter()
            .map(|item| format!("  {}. {}", item.point, item.text)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LEVEL_MAJOR_SECTION, LEVEL_PASAL};
    use pretty_assertions::assert_eq;

    const SCENARIO: &str =
        "BAB I\nKETENTUAN UMUM\nPasal 1\nIsi pasal satu.\nPasal 2\nIsi pasal dua.";

    fn chunk(text: &str) -> Vec<Chunk> {
        segment_and_chunk(text, &ChunkingOptions::default())
    }

    #[test]
    fn test_bab_with_articles() {
        let chunks = chunk(SCENARIO);

        let titles: Vec<&str> = chunks.iter().map(|c| c.title()).collect();
        assert_eq!(titles, vec!["Metadata Dokumen", "BAB I", "Pasal 1", "Pasal 2"]);

        assert_eq!(chunks[1].level(), LEVEL_MAJOR_SECTION);
        assert_eq!(chunks[1].content(), "KETENTUAN UMUM");
        assert_eq!(chunks[2].level(), LEVEL_PASAL);
        assert_eq!(chunks[2].parent_section(), Some("BAB I"));
        assert_eq!(chunks[3].parent_section(), Some("BAB I"));
    }

    #[test]
    fn test_empty_chapter_is_dropped() {
        let chunks = chunk("BAB I\nPasal 1\nIsi pasal satu.\nPasal 2\nIsi pasal dua.");

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].chunk_type(), Some(ChunkType::Metadata));
        assert_eq!(chunks[1].title(), "Pasal 1");
        assert_eq!(chunks[1].parent_section(), Some("BAB I"));
        assert_eq!(chunks[2].title(), "Pasal 2");
        assert_eq!(chunks[2].parent_section(), Some("BAB I"));
    }

    #[test]
    fn test_text_without_structure_yields_metadata_only() {
        let chunks = chunk("Ini hanya paragraf biasa.\nTanpa judul atau pasal.");

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].level(), LEVEL_METADATA);
        assert_eq!(chunks[0].content(), "");
        assert_eq!(chunks[0].content_length(), 0);
        assert_eq!(chunks[0].chunk_id(), Some("metadata"));
    }

    #[test]
    fn test_n_headings_yield_n_plus_one_chunks() {
        let text = (1..=6)
            .map(|i| format!("Pasal {i}\nIsi pasal nomor {i}."))
            .collect::<Vec<_>>()
            .join("\n");
        let chunks = chunk(&text);

        assert_eq!(chunks.len(), 7);
        assert_eq!(chunks[0].level(), LEVEL_METADATA);
        assert!(chunks[1..].iter().all(|c| c.level() == LEVEL_PASAL));
    }

    #[test]
    fn test_chunks_follow_document_order() {
        let pipeline = DocumentPipeline::new(&ChunkingOptions::default());
        let mut sections = pipeline.split(SCENARIO);
        pipeline.build_hierarchy(&mut sections);

        let starts: Vec<usize> = sections.iter().map(|s| s.start_line).collect();
        let mut sorted = starts.clone();
        sorted.sort_unstable();
        assert_eq!(starts, sorted);

        let section_titles: Vec<String> = sections
            .iter()
            .filter(|s| !s.body_text.is_empty())
            .map(|s| s.title.clone())
            .collect();
        let chunk_titles: Vec<String> =
            pipeline.run(SCENARIO)[1..].iter().map(|c| c.title().to_string()).collect();
        assert_eq!(chunk_titles, section_titles);
    }

    #[test]
    fn test_only_first_chunk_carries_metadata() {
        let text = "PERATURAN PRESIDEN REPUBLIK INDONESIA\nNOMOR 5 TAHUN 2021\nPasal 1\nIsi.";
        let chunks = chunk(text);

        assert!(chunks[0].metadata().is_some());
        assert!(chunks[1..].iter().all(|c| c.metadata().is_none()));
    }

    #[test]
    fn test_metadata_chunk_rendering() {
        let metadata = MetadataRecord {
            judul: Some("PERATURAN MENTERI KEUANGAN".to_string()),
            nomor: Some("10 TAHUN 2023".to_string()),
            tahun: Some("2023".to_string()),
            menimbang: Some(vec![
                ListItem::new("a", "bahwa perlu diatur"),
                ListItem::new("b", "bahwa berdasarkan pertimbangan"),
            ]),
            mengingat: Some(vec![ListItem::new("1", "Undang-Undang Nomor 17 Tahun 2003")]),
            ..MetadataRecord::default()
        };

        let chunk = metadata_chunk(&metadata);
        assert_eq!(
            chunk.content(),
            "Judul: PERATURAN MENTERI KEUANGAN\n\
             Nomor: 10 TAHUN 2023\n\
             Tahun: 2023\n\
             \n\
             Menimbang:\n\
             \x20 a. bahwa perlu diatur\n\
             \x20 b. bahwa berdasarkan pertimbangan\n\
             \n\
             Mengingat:\n\
             \x20 1. Undang-Undang Nomor 17 Tahun 2003"
        );
        assert_eq!(chunk.title(), "Metadata Dokumen");
        assert_eq!(chunk.level(), 1);
        assert_eq!(chunk.content_length(), chunk.content().chars().count());
        assert_eq!(chunk.metadata(), Some(&metadata));
    }

    #[test]
    fn test_metadata_chunk_skips_empty_lists() {
        let metadata = MetadataRecord {
            tentang: Some("PENGELOLAAN SAMPAH".to_string()),
            menimbang: Some(Vec::new()),
            ..MetadataRecord::default()
        };
        assert_eq!(metadata_chunk(&metadata).content(), "Tentang: PENGELOLAAN SAMPAH");
    }

    #[test]
    fn test_pipeline_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DocumentPipeline>();
    }
}
