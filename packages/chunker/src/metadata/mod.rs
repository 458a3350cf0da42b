//! Header metadata extraction.
//!
//! Each field is found by its own scan over the whole document. Scans are
//! independent of each other: a field that cannot be found is left out of
//! the record and never stops the others.

mod lists;

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{DocumentType, MetadataRecord};

pub use lists::{parse_considerations, parse_legal_bases};

/// Title: a line opening with a regulation authority, cut before NOMOR/TAHUN.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TITLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)^(PERATURAN\s+(?:MENTERI|PEMERINTAH|PRESIDEN|DAERAH)[^\n]+?)(?:\s+NOMOR|\s+TAHUN|$)",
    )
    .expect("valid regex")
});

/// Registration number, kept as one literal ("14 TAHUN 2024").
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)NOMOR\s+(\d+\s+TAHUN\s+\d{4})").expect("valid regex")
});

/// First four-digit year after a TAHUN marker.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static YEAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)TAHUN\s+(\d{4})").expect("valid regex"));

/// Purpose: lines after TENTANG up to the Menimbang, Mengingat or decision marker.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PURPOSE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)TENTANG\s*\n(.+?)(?:\nMenimbang|\nMengingat|MEMUTUSKAN:|\z)")
        .expect("valid regex")
});

/// Decision marker.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DECISION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)MEMUTUSKAN:").expect("valid regex"));

/// Enactment subject: after Menetapkan up to a blank line or the first Pasal.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ENACTMENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)Menetapkan\s*:\s*(.+?)(?:\n[ \t\r]*\n|Pasal\s+\d+)").expect("valid regex")
});

/// Signing block: place, date, signatory title and name succeed together.
///
/// The date runs to the first four-digit year.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SIGNING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)Ditetapkan di (.+?)\s+pada tanggal (.+?\d{4})\s+(.+?),\s*ttd\s+(.+?)\n")
        .expect("valid regex")
});

/// Token whose presence marks a ministerial regulation.
const MINISTRY_MARKER: &str = "MENTERI";

/// Literal stored when the decision marker is present.
const DECISION_LITERAL: &str = "MEMUTUSKAN:";

/// Extract the header metadata of a document.
///
/// # Examples
/// ```
/// use peraturan_chunker::metadata::extract_metadata;
///
/// let record = extract_metadata("PERATURAN PRESIDEN REPUBLIK INDONESIA\nNOMOR 5 TAHUN 2020\n");
/// assert_eq!(record.nomor.as_deref(), Some("5 TAHUN 2020"));
/// assert_eq!(record.tahun.as_deref(), Some("2020"));
/// ```
#[must_use]
pub fn extract_metadata(text: &str) -> MetadataRecord {
    let mut record = MetadataRecord {
        judul: capture_trimmed(&TITLE_PATTERN, text),
        nomor: capture_trimmed(&NUMBER_PATTERN, text),
        tahun: capture_trimmed(&YEAR_PATTERN, text),
        tentang: capture_trimmed(&PURPOSE_PATTERN, text).map(|s| join_lines(&s)),
        menimbang: parse_considerations(text),
        mengingat: parse_legal_bases(text),
        memutuskan: DECISION_PATTERN
            .is_match(text)
            .then(|| DECISION_LITERAL.to_string()),
        menetapkan: capture_trimmed(&ENACTMENT_PATTERN, text).map(|s| join_lines(&s)),
        document_type: Some(detect_document_type(text)),
        ..MetadataRecord::default()
    };

    if let Some(caps) = SIGNING_PATTERN.captures(text) {
        let field = |i: usize| caps.get(i).map(|m| m.as_str().trim().to_string());
        record.tempat_penetapan = field(1);
        record.tanggal_penetapan = field(2);
        record.jabatan_penandatangan = field(3);
        record.nama_penandatangan = field(4);
    }

    tracing::debug!(
        has_title = record.judul.is_some(),
        considerations = record.menimbang.as_ref().map_or(0, Vec::len),
        legal_bases = record.mengingat.as_ref().map_or(0, Vec::len),
        signed = record.nama_penandatangan.is_some(),
        "extracted document metadata"
    );

    record
}

/// Classify the document as a ministerial regulation or a plain one.
#[must_use]
pub fn detect_document_type(text: &str) -> DocumentType {
    if text.contains(MINISTRY_MARKER) {
        DocumentType::PeraturanMenteri
    } else {
        DocumentType::Peraturan
    }
}

/// First capture group of the first match, trimmed.
fn capture_trimmed(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Join the non-blank lines of a capture with single spaces.
fn join_lines(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Join a multi-line capture into one line, keeping inner indentation.
pub(crate) fn flatten_lines(text: &str) -> String {
    text.trim().replace("\r\n", "\n").replace('\n', " ")
}
