//! Serialized output of reports and metadata.

mod writer;

pub use writer::{render, write_output, OutputFormat};
