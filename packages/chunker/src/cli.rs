//! Command-line interface for the chunker.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{ChunkingOptions, DEFAULT_MAX_CHUNK_SIZE, DEFAULT_OVERLAP_SIZE};
use crate::document::{read_document, InputEncoding};
use crate::error::Result;
use crate::metadata::extract_metadata;
use crate::output::{write_output, OutputFormat};
use crate::progress::{process_document, ProgressEvent};
use crate::summary::{ProcessingReport, ReportStatus};

/// Peraturan Chunker - Split Indonesian legal documents into hierarchical chunks.
#[derive(Parser)]
#[command(name = "peraturan-chunker")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Chunk a document and write the processing report.
    Chunk {
        /// Plain-text document to chunk
        file: PathBuf,

        /// Maximum characters per chunk (100-5000)
        #[arg(short, long, default_value_t = DEFAULT_MAX_CHUNK_SIZE)]
        max_chunk_size: usize,

        /// Overlap between sub-chunks; 0 disables it (0-500)
        #[arg(long, default_value_t = DEFAULT_OVERLAP_SIZE)]
        overlap_size: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Input encoding
        #[arg(short, long, value_enum, default_value_t = InputEncoding::Utf8)]
        encoding: InputEncoding,
    },

    /// Print the header metadata of a document.
    Metadata {
        /// Plain-text document to read
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Input encoding
        #[arg(short, long, value_enum, default_value_t = InputEncoding::Utf8)]
        encoding: InputEncoding,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Chunk {
            file,
            max_chunk_size,
            overlap_size,
            format,
            output,
            encoding,
        } => chunk_command(
            &file,
            ChunkingOptions::new(max_chunk_size, overlap_size),
            format,
            output.as_deref(),
            encoding,
        ),
        Commands::Metadata {
            file,
            format,
            encoding,
        } => metadata_command(&file, format, encoding),
    }
}

/// Execute the chunk command.
fn chunk_command(
    file: &Path,
    options: ChunkingOptions,
    format: OutputFormat,
    output: Option<&Path>,
    encoding: InputEncoding,
) -> Result<()> {
    // Validate options before touching the file
    options.validate()?;
    let start = Instant::now();
    let bytes = std::fs::read(file)?;

    eprintln!(
        "{} {} (max {} chars, overlap {})",
        style("Chunking").bold(),
        style(file.display()).cyan(),
        options.max_chunk_size,
        options.overlap_size
    );

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let mut on_progress = |event: &ProgressEvent| {
        pb.set_message(format!("[{:>3.0}%] {}", event.progress, event.message));
    };

    let report = match process_document(&bytes, encoding, &options, &mut on_progress) {
        Ok(report) => report,
        Err(e) => {
            pb.finish_and_clear();
            if let Some(path) = output {
                let elapsed = start.elapsed().as_secs_f64();
                let failed = ProcessingReport::failed(e.to_string(), elapsed);
                write_output(&failed, format, Some(path))?;
            }
            return Err(e);
        }
    };

    pb.finish_and_clear();
    print_summary(&report);

    write_output(&report, format, output)?;

    if let Some(path) = output {
        eprintln!();
        eprintln!("{} {}", style("Saved to:").green().bold(), path.display());
    }

    Ok(())
}

/// Print a short human-readable summary to stderr.
fn print_summary(report: &ProcessingReport) {
    if let Some(title) = report.metadata.as_ref().and_then(|m| m.judul.as_deref()) {
        eprintln!("  Title: {}", style(title).green());
    }

    let Some(summary) = &report.summary else {
        return;
    };

    eprintln!("  Chunks: {}", summary.total_chunks);
    for (level, count) in &summary.level_counts {
        eprintln!("    level {level}: {count}");
    }
    eprintln!("  Characters: {}", summary.total_characters);

    let status = match report.status {
        ReportStatus::Completed => style("completed").green(),
        ReportStatus::Failed => style("failed").red(),
    };
    eprintln!(
        "  Status: {} in {:.2}s",
        status.bold(),
        report.processing_time_secs
    );
}

/// Execute the metadata command.
fn metadata_command(file: &Path, format: OutputFormat, encoding: InputEncoding) -> Result<()> {
    let text = read_document(file, encoding)?;
    let record = extract_metadata(&text);
    write_output(&record, format, None)
}
