//! Flat section splitting over document lines.

use crate::structure::StructureClassifier;
use crate::types::RawSection;

/// Cuts a document into raw sections at structural headings.
#[derive(Debug, Clone, Default)]
pub struct SectionSplitter {
    classifier: StructureClassifier,
}

impl SectionSplitter {
    /// Create a splitter using a specific classifier.
    #[must_use]
    pub fn new(classifier: StructureClassifier) -> Self {
        Self { classifier }
    }

    /// Split text into sections in document order.
    ///
    /// Text before the first heading belongs to no section and is dropped;
    /// the header is covered by metadata extraction instead. Blank lines
    /// are not kept in section bodies.
    #[must_use]
    pub fn split(&self, text: &str) -> Vec<RawSection> {
        let lines: Vec<&str> = text.split('\n').collect();
        let mut sections = Vec::new();
        let mut current: Option<RawSection> = None;
        let mut body: Vec<&str> = Vec::new();

        for (i, line) in lines.iter().enumerate() {
            if let Some(heading) = self.classifier.classify(line) {
                if let Some(mut section) = current.take() {
                    section.body_text = body.join("\n").trim().to_string();
                    section.end_line = i.saturating_sub(1);
                    sections.push(section);
                }
                current = Some(RawSection::from_heading(heading, i));
                body.clear();
            } else if !line.trim().is_empty() {
                body.push(line.trim_end_matches('\r'));
            }
        }

        if let Some(mut section) = current {
            section.body_text = body.join("\n").trim().to_string();
            section.end_line = lines.len() - 1;
            sections.push(section);
        }

        tracing::debug!(
            lines = lines.len(),
            sections = sections.len(),
            "split document into sections"
        );

        sections
    }
}

/// Split text with the Indonesian rule table.
#[must_use]
pub fn split_sections(text: &str) -> Vec<RawSection> {
    SectionSplitter::default().split(text)
}
