//! Core data types for the chunker.
//!
//! These types represent an Indonesian legal document (peraturan) as it
//! moves through the pipeline: the header metadata record, the raw sections
//! found by the splitter, and the final chunks.

use serde::{Deserialize, Serialize};

/// Level of the synthesized metadata chunk.
pub const LEVEL_METADATA: u8 = 1;

/// Level of major sections (LAMPIRAN, BAB, BAGIAN).
pub const LEVEL_MAJOR_SECTION: u8 = 2;

/// Level of articles (Pasal).
pub const LEVEL_PASAL: u8 = 3;

/// Kind of structural unit a chunk was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkType {
    /// Synthesized document header summary.
    Metadata,

    /// Attachment, chapter or subdivision (LAMPIRAN, BAB, BAGIAN).
    MajorSection,

    /// Article (Pasal).
    Pasal,
}

impl ChunkType {
    /// Get the string value used in serialized output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Metadata => "metadata",
            Self::MajorSection => "major_section",
            Self::Pasal => "pasal",
        }
    }
}

impl std::fmt::Display for ChunkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Document type derived from the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentType {
    /// Ministerial regulation.
    #[serde(rename = "Peraturan Menteri")]
    PeraturanMenteri,

    /// Any other regulation.
    #[serde(rename = "Peraturan")]
    Peraturan,
}

impl DocumentType {
    /// Get the human-readable name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PeraturanMenteri => "Peraturan Menteri",
            Self::Peraturan => "Peraturan",
        }
    }
}

/// One item of the Menimbang (lettered) or Mengingat (numbered) list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    /// Item marker without its period (e.g. "a", "2").
    pub point: String,

    /// Item text, whitespace collapsed.
    pub text: String,
}

impl ListItem {
    /// Create a new list item.
    #[must_use]
    pub fn new(point: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            point: point.into(),
            text: text.into(),
        }
    }
}

/// Header metadata of a document.
///
/// Every field is independently optional; `None` means the scan for that
/// field found nothing. Field names follow the Indonesian header labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    /// Full title, e.g. "PERATURAN MENTERI LINGKUNGAN HIDUP DAN KEHUTANAN".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub judul: Option<String>,

    /// Registration number as written, e.g. "14 TAHUN 2024".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nomor: Option<String>,

    /// Year of enactment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tahun: Option<String>,

    /// Purpose line (TENTANG).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tentang: Option<String>,

    /// Justifications (Menimbang), lettered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menimbang: Option<Vec<ListItem>>,

    /// Legal bases (Mengingat), numbered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mengingat: Option<Vec<ListItem>>,

    /// Decision marker literal, present when the header contains "MEMUTUSKAN:".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memutuskan: Option<String>,

    /// Enactment subject (Menetapkan).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menetapkan: Option<String>,

    /// Document type heuristic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type: Option<DocumentType>,

    /// Place of signing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tempat_penetapan: Option<String>,

    /// Date of signing, as written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tanggal_penetapan: Option<String>,

    /// Title of the signatory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jabatan_penandatangan: Option<String>,

    /// Name of the signatory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nama_penandatangan: Option<String>,
}

/// A structural heading recognized on a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// 2 for major sections, 3 for articles.
    pub level: u8,

    /// Article number text (e.g. "Pasal 5a"); `None` for major sections.
    pub section_number: Option<String>,

    /// Heading title as matched (e.g. "BAB I").
    pub title: String,

    /// Structural kind.
    pub chunk_type: ChunkType,
}

/// A section as produced by the splitter, before re-chunking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawSection {
    /// 2 for major sections, 3 for articles.
    pub level: u8,

    /// Heading title as matched.
    pub title: String,

    /// Article number text; `None` for major sections.
    pub section_number: Option<String>,

    /// Structural kind.
    pub chunk_type: ChunkType,

    /// Zero-based line index of the heading.
    pub start_line: usize,

    /// Zero-based index of the last line belonging to this section.
    pub end_line: usize,

    /// Non-blank lines after the heading, joined with newlines and trimmed.
    pub body_text: String,

    /// Parent's section number, or its title when it has none.
    pub parent_section: Option<String>,

    /// Title of the enclosing section.
    pub parent_title: Option<String>,

    /// Structural kind of the enclosing section.
    pub parent_type: Option<ChunkType>,
}

impl RawSection {
    /// Open a section at a heading line. Body and parent are filled later.
    #[must_use]
    pub fn from_heading(heading: Heading, start_line: usize) -> Self {
        Self {
            level: heading.level,
            title: heading.title,
            section_number: heading.section_number,
            chunk_type: heading.chunk_type,
            start_line,
            end_line: start_line,
            body_text: String::new(),
            parent_section: None,
            parent_title: None,
            parent_type: None,
        }
    }

    /// Section number, or the title for unnumbered sections.
    #[must_use]
    pub fn reference(&self) -> &str {
        self.section_number.as_deref().unwrap_or(&self.title)
    }
}

/// The unit of final output.
///
/// Chunks are immutable once built, so `content_length` always matches
/// `content`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chunk {
    level: u8,
    title: String,
    content: String,
    section_number: Option<String>,
    parent_section: Option<String>,
    chunk_type: Option<ChunkType>,
    chunk_id: Option<String>,
    content_length: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<MetadataRecord>,
}

impl Chunk {
    /// Create a chunk; `content_length` is computed from `content`.
    #[must_use]
    pub fn new(level: u8, title: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        let content_length = content.chars().count();
        Self {
            level,
            title: title.into(),
            content,
            section_number: None,
            parent_section: None,
            chunk_type: None,
            chunk_id: None,
            content_length,
            metadata: None,
        }
    }

    /// Create a chunk carrying a section's identity, without a chunk id.
    #[must_use]
    pub fn for_section(
        section: &RawSection,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            section_number: section.section_number.clone(),
            parent_section: section.parent_section.clone(),
            chunk_type: Some(section.chunk_type),
            ..Self::new(section.level, title, content)
        }
    }

    /// Set the chunk id.
    #[must_use]
    pub fn with_chunk_id(mut self, chunk_id: impl Into<String>) -> Self {
        self.chunk_id = Some(chunk_id.into());
        self
    }

    /// Set the structural kind.
    #[must_use]
    pub fn with_chunk_type(mut self, chunk_type: ChunkType) -> Self {
        self.chunk_type = Some(chunk_type);
        self
    }

    /// Attach the document metadata record.
    #[must_use]
    pub fn with_metadata(mut self, metadata: MetadataRecord) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// 1 for the metadata chunk, 2 for major sections, 3 for articles.
    #[must_use]
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Section title, with a `(Bagian N)` suffix on split parts.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Chunk text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Article number of the source section, if any.
    #[must_use]
    pub fn section_number(&self) -> Option<&str> {
        self.section_number.as_deref()
    }

    /// Reference of the enclosing section.
    #[must_use]
    pub fn parent_section(&self) -> Option<&str> {
        self.parent_section.as_deref()
    }

    /// Structural kind; `None` only for hand-built chunks.
    #[must_use]
    pub fn chunk_type(&self) -> Option<ChunkType> {
        self.chunk_type
    }

    /// Set for the metadata chunk and for sub-chunks of a split section.
    #[must_use]
    pub fn chunk_id(&self) -> Option<&str> {
        self.chunk_id.as_deref()
    }

    /// Character count of the content.
    #[must_use]
    pub fn content_length(&self) -> usize {
        self.content_length
    }

    /// Document metadata, attached to the level-1 chunk only.
    #[must_use]
    pub fn metadata(&self) -> Option<&MetadataRecord> {
        self.metadata.as_ref()
    }
}
