// ==============================================================================
// mapping.rs - MedGen/HPO/OMIM Mapping Transformer
// ==============================================================================
// Description: Joins mapping rows against the definition index into output records
// Created: 2026-08-29
// Modified: 2026-08-29
// Version: 1.0.0
// ==============================================================================
// Format: Pipe-, tab-, or comma-delimited text; first line is a '#'-prefixed
// header naming the columns
// Example:
//   #OMIM_CUI|MIM_number|OMIM_name|relationship|HPO_CUI|HPO_name|MedGen_name|MedGen_source|STY
//   C0432273|144750|ENDOSTEAL HYPEROSTOSIS, AUTOSOMAL DOMINANT|...|HP:0100774|...
// ==============================================================================

use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::models::{OutputRecord, RunStats, SkipReason};
use crate::parsers::{read_input_text, split_header, DefinitionIndex, Delimiter, DelimiterError};

/// Fallback definition text for CUIs absent from MGDEF.
pub const NO_DEFINITION: &str = "NA";

/// Transformed records plus the skip counts from the pass.
#[derive(Debug)]
pub struct TransformOutput {
    /// Output records in first-occurrence order of the mapping file
    pub records: Vec<OutputRecord>,
    pub stats: RunStats,
}

/// Errors that can occur during mapping-file transformation
#[derive(Error, Debug)]
pub enum MappingParseError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("delimiter detection failed: {0}")]
    Delimiter(#[from] DelimiterError),

    #[error("mapping file is empty")]
    EmptyFile,

    #[error("mapping header is missing required column '{column}'")]
    MissingColumn { column: &'static str },
}

/// Single-pass transformer over the MedGen/HPO/OMIM mapping dump.
///
/// Each surviving row joins against the [`DefinitionIndex`] and becomes one
/// [`OutputRecord`]; the (MIM_number, OMIM_CUI) pair dedups the stream with
/// first-occurrence-wins semantics.
pub struct MappingTransformer;

impl MappingTransformer {
    /// Transform a mapping dump against a fully built definition index.
    ///
    /// The header (its `#` marker stripped) drives delimiter detection,
    /// independently of whatever MGDEF used. Required columns `MIM_number`,
    /// `OMIM_name`, and `OMIM_CUI` are located by name, case-insensitively;
    /// HPO columns are not carried into the output. Rows missing the OMIM
    /// id or CUI are skipped and counted, never fatal.
    pub fn transform(
        path: impl AsRef<Path>,
        defs: &DefinitionIndex,
    ) -> Result<TransformOutput, MappingParseError> {
        let text = read_input_text(path.as_ref())?;
        let (header, data, header_lines) =
            split_header(&text).ok_or(MappingParseError::EmptyFile)?;

        // The first line is a '#'-prefixed header; it names the columns
        // but must never be parsed as data.
        let header = header.trim_start_matches('#').trim();
        let delimiter = Delimiter::detect(header, Delimiter::MAPPING_CANDIDATES)?;

        let columns: Vec<String> = header
            .split(delimiter.as_char())
            .map(|c| c.trim().to_lowercase())
            .collect();
        let col_mim = Self::find_column(&columns, "mim_number")?;
        let col_name = Self::find_column(&columns, "omim_name")?;
        let col_cui = Self::find_column(&columns, "omim_cui")?;
        let mut records = Vec::new();
        let mut stats = RunStats::default();
        let mut seen: HashSet<(String, String)> = HashSet::new();

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter.as_byte())
            .has_headers(false)
            .flexible(true)
            .from_reader(data.as_bytes());

        for result in reader.records() {
            let record = result?;
            stats.rows_read += 1;
            // csv line numbers are relative to the post-header data slice
            let line = header_lines + record.position().map(|p| p.line()).unwrap_or(0);

            if record.iter().all(|field| field.trim().is_empty()) {
                stats.record_skip(SkipReason::Blank);
                continue;
            }

            let needed = col_mim.max(col_name).max(col_cui);
            if record.len() <= needed {
                debug!(
                    "Skipping mapping row {}: expected {} columns, found {}",
                    line,
                    needed + 1,
                    record.len()
                );
                stats.record_skip(SkipReason::ColumnCount);
                continue;
            }

            let mim_number = record[col_mim].trim();
            let omim_name = record[col_name].trim();
            let omim_cui = record[col_cui].trim();
            if mim_number.is_empty() || omim_cui.is_empty() {
                debug!("Skipping mapping row {}: missing MIM number or OMIM CUI", line);
                stats.record_skip(SkipReason::MissingField);
                continue;
            }

            let key = (mim_number.to_string(), omim_cui.to_string());
            if !seen.insert(key) {
                stats.record_skip(SkipReason::Duplicate);
                continue;
            }

            // Definition lookup by OMIM CUI only; a miss is the literal "NA".
            let definition = defs.get(omim_cui).unwrap_or(NO_DEFINITION);

            stats.emitted += 1;
            records.push(OutputRecord::new(
                mim_number.to_string(),
                omim_name.to_string(),
                omim_cui.to_string(),
                definition.to_string(),
            ));
        }

        Ok(TransformOutput { records, stats })
    }

    fn find_column(columns: &[String], name: &'static str) -> Result<usize, MappingParseError> {
        columns
            .iter()
            .position(|c| c == name)
            .ok_or(MappingParseError::MissingColumn { column: name })
    }
}
