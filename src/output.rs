// ==============================================================================
// output.rs - JSON Output Generation
// ==============================================================================
// Description: Serialize output records as a JSON array or newline-delimited JSON
// Created: 2026-08-29
// Modified: 2026-08-29
// Version: 1.0.0
// ==============================================================================

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::models::OutputRecord;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Single pretty-printed JSON array (best for one-shot ingestion)
    Json,
    /// One compact JSON object per line (best for streaming loaders)
    Ndjson,
}

impl OutputFormat {
    /// Get file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Ndjson => "ndjson",
        }
    }
}

/// Write all records to `path` in the requested format.
///
/// The writer is flushed before returning; the file handle closes on every
/// exit path, including serialization errors.
pub fn write_records(path: &Path, records: &[OutputRecord], format: OutputFormat) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, records)
                .context("Failed to serialize JSON array")?;
            writeln!(writer)?;
        }
        OutputFormat::Ndjson => {
            for record in records {
                serde_json::to_writer(&mut writer, record)
                    .context("Failed to serialize record")?;
                writeln!(writer)?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}
