//! Rule types for structural classification.

use regex::{Regex, RegexBuilder};

use crate::types::{ChunkType, Heading};

/// Declarative specification of one kind of heading line.
///
/// The pattern runs against the trimmed line, case-insensitively, and its
/// first capture group (or the whole match) becomes the heading title.
#[derive(Debug, Clone)]
pub struct StructureRule {
    /// Short name used in logs (e.g. "bab").
    pub name: String,

    /// Anchored pattern matched against a trimmed line.
    pub pattern: Regex,

    /// Nesting level produced by this rule.
    pub level: u8,

    /// Structural kind produced by this rule.
    pub chunk_type: ChunkType,

    /// Whether the captured title doubles as the section number.
    pub numbered: bool,
}

impl StructureRule {
    /// Create a rule from a pattern. Matching is always case-insensitive.
    pub fn new(
        name: impl Into<String>,
        pattern: &str,
        level: u8,
        chunk_type: ChunkType,
    ) -> Result<Self, regex::Error> {
        let pattern = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self {
            name: name.into(),
            pattern,
            level,
            chunk_type,
            numbered: false,
        })
    }

    /// Set whether the title is also the section number.
    #[must_use]
    pub fn with_numbered(mut self, numbered: bool) -> Self {
        self.numbered = numbered;
        self
    }

    /// Try to match a trimmed line.
    #[must_use]
    pub fn apply(&self, line: &str) -> Option<Heading> {
        let caps = self.pattern.captures(line)?;
        let title = caps.get(1).or_else(|| caps.get(0))?.as_str().to_string();
        Some(Heading {
            level: self.level,
            section_number: self.numbered.then(|| title.clone()),
            title,
            chunk_type: self.chunk_type,
        })
    }
}

/// Ordered table of structure rules.
///
/// Unlike a lookup map, order matters here: rules are tried top to bottom
/// and the first match wins.
#[derive(Debug, Clone, Default)]
pub struct StructureRules {
    rules: Vec<StructureRule>,
}

impl StructureRules {
    /// Create a new empty table.
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule with the lowest precedence so far.
    pub fn register(&mut self, rule: StructureRule) {
        self.rules.push(rule);
    }

    /// Find the first rule matching the trimmed line.
    #[must_use]
    pub fn first_match(&self, line: &str) -> Option<(&StructureRule, Heading)> {
        self.rules
            .iter()
            .find_map(|rule| rule.apply(line).map(|heading| (rule, heading)))
    }

    /// Rules in precedence order.
    pub fn iter(&self) -> impl Iterator<Item = &StructureRule> {
        self.rules.iter()
    }

    /// Number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
