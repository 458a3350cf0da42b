//! Structural line classification for Indonesian legal documents.
//!
//! A document's skeleton is carried by heading lines: LAMPIRAN, BAB and
//! BAGIAN open major sections, Pasal opens an article. Headings are matched
//! by an ordered rule table where the first matching rule wins.

mod classifier;
mod config;
mod rules;

pub use classifier::StructureClassifier;
pub use config::create_indonesian_rules;
pub use rules::{StructureRule, StructureRules};
