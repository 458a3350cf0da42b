//! Staged processing with progress events.
//!
//! [`process_document`] drives the [`DocumentPipeline`] stage by stage and
//! reports to a [`ProgressObserver`] between stages, so a caller can show
//! progress without the pipeline knowing how it is displayed.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::assembly::DocumentPipeline;
use crate::config::ChunkingOptions;
use crate::document::{decode_document, InputEncoding};
use crate::error::Result;
use crate::summary::ProcessingReport;

/// Stage of a processing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProcessingStage {
    /// Accepted, not yet started.
    Queued,

    /// Decoding and checking the input bytes.
    Validating,

    /// Scanning the header for metadata fields.
    ExtractingMetadata,

    /// Finding headings and building the section hierarchy.
    Splitting,

    /// Building the metadata chunk and re-chunking sections.
    Chunking,

    /// Assembling the report.
    Finalizing,

    /// Report ready.
    Completed,

    /// Input rejected; no chunks were produced.
    Failed,
}

impl ProcessingStage {
    /// Get the stage name as it appears in serialized events.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Queued => "queued",
            Self::Validating => "validating",
            Self::ExtractingMetadata => "extracting-metadata",
            Self::Splitting => "splitting",
            Self::Chunking => "chunking",
            Self::Finalizing => "finalizing",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for ProcessingStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One progress notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEvent {
    /// Stage that emitted the event.
    pub stage: ProcessingStage,

    /// Percentage in 0..=100.
    pub progress: f64,

    /// Human-readable description of the step.
    pub message: String,

    /// Sections processed so far, during chunking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<usize>,

    /// Total sections, during chunking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl ProgressEvent {
    /// Create an event without section counters.
    #[must_use]
    pub fn new(stage: ProcessingStage, progress: f64, message: impl Into<String>) -> Self {
        Self {
            stage,
            progress,
            message: message.into(),
            current: None,
            total: None,
        }
    }

    /// Attach section counters.
    #[must_use]
    pub fn with_counts(mut self, current: usize, total: usize) -> Self {
        self.current = Some(current);
        self.total = Some(total);
        self
    }
}

/// Receiver of progress events.
///
/// Closures taking `&ProgressEvent` implement this trait.
pub trait ProgressObserver {
    fn on_progress(&mut self, event: &ProgressEvent);
}

impl<F> ProgressObserver for F
where
    F: FnMut(&ProgressEvent),
{
    fn on_progress(&mut self, event: &ProgressEvent) {
        self(event);
    }
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ProgressObserver for NoopObserver {
    fn on_progress(&mut self, _event: &ProgressEvent) {}
}

fn emit(observer: &mut impl ProgressObserver, event: ProgressEvent) {
    tracing::info!(
        stage = %event.stage,
        progress = event.progress,
        "{}",
        event.message
    );
    observer.on_progress(&event);
}

/// Decode and process a document, reporting each stage.
///
/// Decoding is the only step that can fail; on failure a `failed` event is
/// emitted and the error is returned with no partial output.
pub fn process_document(
    bytes: &[u8],
    encoding: InputEncoding,
    options: &ChunkingOptions,
    observer: &mut impl ProgressObserver,
) -> Result<ProcessingReport> {
    let start = Instant::now();

    emit(
        observer,
        ProgressEvent::new(ProcessingStage::Queued, 0.0, "Document queued for processing"),
    );
    emit(
        observer,
        ProgressEvent::new(ProcessingStage::Validating, 5.0, "Validating document encoding"),
    );

    let text = match decode_document(bytes, encoding) {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(error = %e, "document processing failed");
            emit(
                observer,
                ProgressEvent::new(
                    ProcessingStage::Failed,
                    0.0,
                    format!("Processing failed: {e}"),
                ),
            );
            return Err(e);
        }
    };

    Ok(run_stages(&text, options, observer, start))
}

/// Process already-decoded text, reporting each stage.
pub fn process_text(
    text: &str,
    options: &ChunkingOptions,
    observer: &mut impl ProgressObserver,
) -> ProcessingReport {
    run_stages(text, options, observer, Instant::now())
}

fn run_stages(
    text: &str,
    options: &ChunkingOptions,
    observer: &mut impl ProgressObserver,
    start: Instant,
) -> ProcessingReport {
    let pipeline = DocumentPipeline::new(options);

    emit(
        observer,
        ProgressEvent::new(
            ProcessingStage::ExtractingMetadata,
            15.0,
            "Extracting document metadata",
        ),
    );
    let metadata = pipeline.extract_metadata(text);

    emit(
        observer,
        ProgressEvent::new(ProcessingStage::Splitting, 25.0, "Analyzing document structure"),
    );
    let mut sections = pipeline.split(text);
    pipeline.build_hierarchy(&mut sections);

    emit(
        observer,
        ProgressEvent::new(ProcessingStage::Chunking, 35.0, "Creating metadata chunk"),
    );
    let mut chunks = vec![pipeline.metadata_chunk(&metadata)];

    let total = sections.len();
    emit(
        observer,
        ProgressEvent::new(
            ProcessingStage::Chunking,
            40.0,
            format!("Processing {total} sections"),
        )
        .with_counts(0, total),
    );

    for (i, section) in sections.iter().enumerate() {
        chunks.extend(pipeline.chunk_section(section));

        let progress = 40.0 + 50.0 * (i + 1) as f64 / total as f64;
        emit(
            observer,
            ProgressEvent::new(
                ProcessingStage::Chunking,
                progress,
                format!("Processed section: {}", section.title),
            )
            .with_counts(i + 1, total),
        );
    }

    emit(
        observer,
        ProgressEvent::new(ProcessingStage::Finalizing, 95.0, "Preparing report"),
    );

    let elapsed = start.elapsed().as_secs_f64();
    let report = ProcessingReport::completed(metadata, chunks, elapsed);

    emit(
        observer,
        ProgressEvent::new(
            ProcessingStage::Completed,
            100.0,
            format!("Processing completed in {elapsed:.1}s"),
        ),
    );

    report
}
