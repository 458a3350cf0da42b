//! JSON and YAML writers.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;

/// Serialization format for command output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,

    /// YAML document.
    Yaml,
}

/// Serialize a value to a string in the given format.
///
/// JSON keeps non-ASCII characters as-is. Both formats end with a newline.
pub fn render<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<String> {
    let content = match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(value)?;
            json.push('\n');
            json
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(value)?;
            // Add document start marker
            format!("---\n{yaml}")
        }
    };
    Ok(content)
}

/// Write a value to a file, or to stdout when no path is given.
///
/// Files are written to a temp file, synced, then renamed into place so a
/// crash never leaves a partial report behind.
pub fn write_output<T: Serialize + ?Sized>(
    value: &T,
    format: OutputFormat,
    path: Option<&Path>,
) -> Result<()> {
    let content = render(value, format)?;

    let Some(path) = path else {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(content.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    };

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let temp_file = path.with_file_name(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp_file, path)?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote output");
    Ok(())
}
