//! Heading rules for Indonesian legal documents.

use super::rules::{StructureRule, StructureRules};
use crate::types::{ChunkType, LEVEL_MAJOR_SECTION, LEVEL_PASAL};

/// Create the rule table for Indonesian legal document structure.
///
/// ```text
/// LAMPIRAN I            level 2, attachment
/// BAB II                level 2, chapter
/// BAGIAN KEDUA          level 2, subdivision
/// Pasal 5 / Pasal 5a    level 3, article
/// ```
///
/// Major sections are registered before articles so they take precedence.
#[must_use]
#[allow(clippy::expect_used)] // Static patterns that are guaranteed to be valid
pub fn create_indonesian_rules() -> StructureRules {
    let mut rules = StructureRules::new();

    // Lampiran: attachment marker, must stand alone on its line
    rules.register(
        StructureRule::new(
            "lampiran",
            r"^(LAMPIRAN\s+[IVX]+)\s*$",
            LEVEL_MAJOR_SECTION,
            ChunkType::MajorSection,
        )
        .expect("valid regex"),
    );

    // Bab: chapter marker, may be followed by its title on the same line
    rules.register(
        StructureRule::new(
            "bab",
            r"^(BAB\s+[IVX]+)\s*",
            LEVEL_MAJOR_SECTION,
            ChunkType::MajorSection,
        )
        .expect("valid regex"),
    );

    // Bagian: subdivision marker ("BAGIAN KESATU"). Any line opening with
    // "Bagian <word>" matches, prose included.
    rules.register(
        StructureRule::new(
            "bagian",
            r"^(BAGIAN\s+[A-Z]+)\s*",
            LEVEL_MAJOR_SECTION,
            ChunkType::MajorSection,
        )
        .expect("valid regex"),
    );

    // Pasal: article, optionally lettered ("Pasal 5a")
    rules.register(
        StructureRule::new(
            "pasal",
            r"^(Pasal\s+\d+[a-z]?)\s*$",
            LEVEL_PASAL,
            ChunkType::Pasal,
        )
        .expect("valid regex")
        .with_numbered(true),
    );

    rules
}
