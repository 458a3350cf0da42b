//! Overlap strategies for re-chunking long sections.

/// Trait for configurable overlap seeding.
///
/// When the chunker closes a buffer, the strategy decides what text the
/// next buffer starts with. `trigger` is the sentence that did not fit.
pub trait OverlapStrategy: Send + Sync {
    /// Build the opening text of the next buffer.
    fn seed(&self, closed: &str, trigger: &str) -> String;
}

/// Seeds the next buffer with the last two `". "`-delimited fragments of the
/// closed buffer, then the triggering sentence.
///
/// This is an approximate semantic overlap, not a character window.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceTailOverlap;

impl OverlapStrategy for SentenceTailOverlap {
    fn seed(&self, closed: &str, trigger: &str) -> String {
        let fragments: Vec<&str> = closed.split(". ").collect();
        let tail = &fragments[fragments.len().saturating_sub(2)..];
        format!("{}. {}", tail.join(". "), trigger)
    }
}

/// Starts the next buffer with the triggering sentence only.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverlap;

impl OverlapStrategy for NoOverlap {
    fn seed(&self, _closed: &str, trigger: &str) -> String {
        trigger.to_string()
    }
}

/// Pick the strategy for an overlap size; only zero versus non-zero matters.
#[must_use]
pub fn overlap_strategy(overlap_size: usize) -> Box<dyn OverlapStrategy> {
    if overlap_size > 0 {
        Box::new(SentenceTailOverlap)
    } else {
        Box::new(NoOverlap)
    }
}
