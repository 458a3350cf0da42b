//! Line classifier built on the structure rule table.

use super::config::create_indonesian_rules;
use super::rules::StructureRules;
use crate::types::Heading;

/// Decides whether a line opens a new structural unit.
#[derive(Debug, Clone)]
pub struct StructureClassifier {
    rules: StructureRules,
}

impl StructureClassifier {
    /// Create a classifier over a custom rule table.
    #[must_use]
    pub fn new(rules: StructureRules) -> Self {
        Self { rules }
    }

    /// Classify one line of text.
    ///
    /// Returns `None` for content lines (blank lines included), which the
    /// splitter accumulates into the open section.
    #[must_use]
    pub fn classify(&self, line: &str) -> Option<Heading> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (rule, heading) = self.rules.first_match(line)?;
        tracing::trace!(rule = %rule.name, title = %heading.title, "structural heading");
        Some(heading)
    }

    /// Structural level of a line; 0 means content.
    #[must_use]
    pub fn level(&self, line: &str) -> u8 {
        self.classify(line).map_or(0, |heading| heading.level)
    }
}

impl Default for StructureClassifier {
    fn default() -> Self {
        Self::new(create_indonesian_rules())
    }
}
