//! End-to-end integration tests for the chunking pipeline.
//!
//! Tests the complete pipeline from raw text to chunks and reports using
//! Peraturan Menteri LHK Nomor 14 Tahun 2024 as fixture data.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;

use peraturan_chunker::document::InputEncoding;
use peraturan_chunker::progress::{process_document, ProgressEvent, ProcessingStage};
use peraturan_chunker::summary::ReportStatus;
use peraturan_chunker::types::{DocumentType, LEVEL_MAJOR_SECTION, LEVEL_METADATA, LEVEL_PASAL};
use peraturan_chunker::{
    extract_metadata, segment_and_chunk, Chunk, ChunkType, ChunkingOptions, ListItem,
};

/// Load fixture file content.
fn load_fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

fn permen() -> String {
    load_fixture("permen_lhk_14_2024.txt")
}

fn run_pipeline(max_chunk_size: usize, overlap_size: usize) -> Vec<Chunk> {
    segment_and_chunk(
        &permen(),
        &ChunkingOptions::new(max_chunk_size, overlap_size),
    )
}

#[test]
fn test_pipeline_chunk_sequence() {
    let chunks = run_pipeline(1500, 100);

    let outline: Vec<(u8, &str)> = chunks.iter().map(|c| (c.level(), c.title())).collect();
    assert_eq!(
        outline,
        vec![
            (LEVEL_METADATA, "Metadata Dokumen"),
            (LEVEL_MAJOR_SECTION, "BAB I"),
            (LEVEL_PASAL, "Pasal 1"),
            (LEVEL_PASAL, "Pasal 2"),
            (LEVEL_MAJOR_SECTION, "BAB II"),
            (LEVEL_PASAL, "Pasal 3"),
        ]
    );
}

#[test]
fn test_pipeline_parents() {
    let chunks = run_pipeline(1500, 100);

    let parents: Vec<(&str, Option<&str>)> = chunks[1..]
        .iter()
        .map(|c| (c.title(), c.parent_section()))
        .collect();
    assert_eq!(
        parents,
        vec![
            ("BAB I", None),
            ("Pasal 1", Some("BAB I")),
            ("Pasal 2", Some("BAB I")),
            ("BAB II", None),
            ("Pasal 3", Some("BAB II")),
        ]
    );
}

#[test]
fn test_pipeline_metadata() {
    let metadata = extract_metadata(&permen());

    assert_eq!(
        metadata.judul.as_deref(),
        Some("PERATURAN MENTERI LINGKUNGAN HIDUP DAN KEHUTANAN")
    );
    assert_eq!(metadata.nomor.as_deref(), Some("14 TAHUN 2024"));
    assert_eq!(metadata.tahun.as_deref(), Some("2024"));
    assert_eq!(
        metadata.tentang.as_deref(),
        Some(
            "PENYELENGGARAAN PENGAWASAN DAN SANKSI ADMINISTRATIF DI BIDANG LINGKUNGAN HIDUP \
             DENGAN RAHMAT TUHAN YANG MAHA ESA \
             MENTERI LINGKUNGAN HIDUP DAN KEHUTANAN REPUBLIK INDONESIA,"
        )
    );
    assert_eq!(metadata.memutuskan.as_deref(), Some("MEMUTUSKAN:"));
    assert_eq!(metadata.document_type, Some(DocumentType::PeraturanMenteri));
    assert_eq!(metadata.tempat_penetapan.as_deref(), Some("Jakarta"));
    assert_eq!(metadata.tanggal_penetapan.as_deref(), Some("2 Mei 2024"));
    assert_eq!(
        metadata.jabatan_penandatangan.as_deref(),
        Some("MENTERI LINGKUNGAN HIDUP DAN KEHUTANAN REPUBLIK INDONESIA")
    );
    assert_eq!(metadata.nama_penandatangan.as_deref(), Some("SITI NURBAYA"));
}

#[test]
fn test_pipeline_considerations() {
    let menimbang = extract_metadata(&permen()).menimbang.unwrap_or_default();

    let points: Vec<&str> = menimbang.iter().map(|item| item.point.as_str()).collect();
    assert_eq!(points, vec!["a", "b", "c"]);
    assert!(menimbang[0].text.starts_with("bahwa untuk menjamin pelaksanaan"));
    assert!(menimbang[1].text.ends_with("yang tegas dan proporsional;"));
}

#[test]
fn test_pipeline_legal_bases() {
    let mengingat = extract_metadata(&permen()).mengingat.unwrap_or_default();

    assert_eq!(
        mengingat,
        vec![
            ListItem::new(
                "1",
                "Undang-Undang Nomor 32 Tahun 2009 tentang Perlindungan dan Pengelolaan Lingkungan Hidup"
            ),
            ListItem::new(
                "2",
                "Peraturan Pemerintah Nomor 22 Tahun 2021 tentang Penyelenggaraan Perlindungan dan Pengelolaan Lingkungan Hidup"
            ),
        ]
    );
}

#[test]
fn test_legal_bases_block_scenario() {
    let metadata = extract_metadata("Mengingat:\n1. First ref;\n2. Second ref;\nMEMUTUSKAN:");

    assert_eq!(
        metadata.mengingat,
        Some(vec![
            ListItem::new("1", "First ref"),
            ListItem::new("2", "Second ref"),
        ])
    );
}

#[test]
fn test_metadata_chunk_content() {
    let chunks = run_pipeline(1500, 100);
    let metadata_chunk = &chunks[0];

    assert_eq!(metadata_chunk.chunk_type(), Some(ChunkType::Metadata));
    assert_eq!(metadata_chunk.chunk_id(), Some("metadata"));
    assert!(metadata_chunk
        .content()
        .starts_with("Judul: PERATURAN MENTERI LINGKUNGAN HIDUP DAN KEHUTANAN\nNomor: 14 TAHUN 2024\nTahun: 2024\nTentang: "));
    assert!(metadata_chunk.content().contains("\n\nMenimbang:\n  a. bahwa"));
    assert!(metadata_chunk
        .content()
        .contains("\n\nMengingat:\n  1. Undang-Undang Nomor 32 Tahun 2009"));
    assert!(metadata_chunk.metadata().is_some());
    assert!(chunks[1..].iter().all(|c| c.metadata().is_none()));
}

#[test]
fn test_content_length_matches_content() {
    for (max, overlap) in [(1500, 100), (100, 0), (100, 500)] {
        for chunk in run_pipeline(max, overlap) {
            assert_eq!(chunk.content_length(), chunk.content().chars().count());
        }
    }
}

#[test]
fn test_small_bound_splits_long_articles() {
    let chunks = run_pipeline(100, 0);

    let pasal_1: Vec<&Chunk> = chunks
        .iter()
        .filter(|c| c.section_number() == Some("Pasal 1"))
        .collect();
    assert!(pasal_1.len() > 1);

    for (i, chunk) in pasal_1.iter().enumerate() {
        let n = i + 1;
        assert_eq!(chunk.title(), format!("Pasal 1 (Bagian {n})"));
        assert_eq!(chunk.chunk_id(), Some(format!("Pasal 1_{n}").as_str()));
        assert_eq!(chunk.parent_section(), Some("BAB I"));
        assert!(!chunk.content().is_empty());
    }

    // Short sections are untouched by the small bound
    let bab_1 = chunks.iter().find(|c| c.title() == "BAB I").unwrap();
    assert_eq!(bab_1.content(), "KETENTUAN UMUM");
    assert_eq!(bab_1.chunk_id(), None);
}

#[test]
fn test_overlap_increases_or_keeps_chunk_count() {
    let without = run_pipeline(100, 0);
    let with = run_pipeline(100, 100);
    assert!(with.len() >= without.len());

    // Each overlapped sub-chunk opens with text carried over from its predecessor
    let pasal_1: Vec<&Chunk> = with
        .iter()
        .filter(|c| c.section_number() == Some("Pasal 1"))
        .collect();
    for pair in pasal_1.windows(2) {
        let carried = pair[0].content().split(". ").last().unwrap_or_default();
        assert!(pair[1].content().contains(carried.trim_end_matches('.')));
    }
}

#[test]
fn test_chunks_in_document_order() {
    let text = permen();
    let chunks = run_pipeline(1500, 100);

    let mut last_offset = 0;
    for chunk in &chunks[1..] {
        let offset = text[last_offset..]
            .find(chunk.title())
            .map(|i| i + last_offset)
            .unwrap();
        assert!(offset >= last_offset);
        last_offset = offset;
    }
}

#[test]
fn test_processing_report() {
    let mut events: Vec<ProgressEvent> = Vec::new();
    let report = process_document(
        permen().as_bytes(),
        InputEncoding::Utf8,
        &ChunkingOptions::default(),
        &mut |event: &ProgressEvent| events.push(event.clone()),
    )
    .unwrap();

    assert_eq!(report.status, ReportStatus::Completed);
    let summary = report.summary.as_ref().unwrap();
    assert_eq!(summary.total_chunks, 6);
    assert_eq!(summary.level_counts.get("1"), Some(&1));
    assert_eq!(summary.level_counts.get("2"), Some(&2));
    assert_eq!(summary.level_counts.get("3"), Some(&3));
    assert_eq!(summary.type_counts.get("pasal"), Some(&3));
    assert_eq!(summary.type_counts.get("major_section"), Some(&2));
    assert_eq!(
        summary.total_characters,
        report.chunks.iter().map(|c| c.content_length()).sum::<usize>()
    );

    assert_eq!(events.first().map(|e| e.stage), Some(ProcessingStage::Queued));
    assert_eq!(events.last().map(|e| e.stage), Some(ProcessingStage::Completed));
}

#[test]
fn test_report_serialization() {
    let report = process_document(
        permen().as_bytes(),
        InputEncoding::Utf8,
        &ChunkingOptions::default(),
        &mut |_: &ProgressEvent| {},
    )
    .unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["status"], "completed");
    assert_eq!(json["metadata"]["nomor"], "14 TAHUN 2024");
    assert_eq!(json["chunks"][0]["chunk_type"], "metadata");
    assert!(json["chunks"][0].get("metadata").is_some());
    assert!(json["chunks"][2].get("metadata").is_none());
    assert_eq!(json["chunks"][2]["section_number"], "Pasal 1");
    assert_eq!(json["chunks"][2]["parent_section"], "BAB I");
    assert!(json["chunks"][2]["chunk_id"].is_null());
}

#[test]
fn test_latin1_document() {
    let bytes: Vec<u8> = b"Pasal 1\nKeadaan darurat \xE9pid\xE9mique.\n".to_vec();

    assert!(process_document(
        &bytes,
        InputEncoding::Utf8,
        &ChunkingOptions::default(),
        &mut |_: &ProgressEvent| {},
    )
    .is_err());

    let report = process_document(
        &bytes,
        InputEncoding::Latin1,
        &ChunkingOptions::default(),
        &mut |_: &ProgressEvent| {},
    )
    .unwrap();
    assert_eq!(report.chunks[1].content(), "Keadaan darurat \u{e9}pid\u{e9}mique.");
}
