// ==============================================================================
// mgdef.rs - MGDEF Definition Parser
// ==============================================================================
// Description: Builds the CUI -> definition lookup from MGDEF.csv.gz
// Created: 2026-08-29
// Modified: 2026-08-29
// Version: 1.0.0
// ==============================================================================
// Format: Tab- or comma-delimited text with a header row
// Example:
//   CUI,DEF,source,SUPPRESS
//   C0432273,"Endosteal hyperostosis...",NCI,N
//   C0001080,"Achondroplasia is...",GARD,N
// ==============================================================================

use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::models::{RunStats, SkipReason};
use crate::parsers::{read_input_text, split_header, Delimiter, DelimiterError};

/// Immutable CUI -> definition lookup, fully built before any join runs.
#[derive(Debug, Default)]
pub struct DefinitionIndex {
    defs: HashMap<String, String>,
}

impl DefinitionIndex {
    /// Look up the definition for a CUI. A miss is an ordinary outcome
    /// (the caller applies the "NA" fallback), never an error.
    pub fn get(&self, cui: &str) -> Option<&str> {
        self.defs.get(cui).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

/// Built index plus the skip counts accumulated while building it.
#[derive(Debug)]
pub struct MgdefOutput {
    pub index: DefinitionIndex,
    pub stats: RunStats,
}

/// Errors that can occur during MGDEF parsing
#[derive(Error, Debug)]
pub enum MgdefParseError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("delimiter detection failed: {0}")]
    Delimiter(#[from] DelimiterError),

    #[error("MGDEF file is empty")]
    EmptyFile,

    #[error("MGDEF header is missing required column '{column}'")]
    MissingColumn { column: &'static str },
}

/// Parser for the MGDEF concept-definition dump.
///
/// Rows whose SUPPRESS flag marks them hidden are excluded. When several
/// rows share a CUI the last row in file order wins (plain
/// insert/overwrite); no source-precedence filter is applied.
pub struct MgdefParser;

impl MgdefParser {
    /// Parse an MGDEF dump into a [`DefinitionIndex`].
    ///
    /// The delimiter (tab or comma) is detected from the header line, and
    /// the `CUI`, `DEF`, and optional `SUPPRESS` columns are located by
    /// name, case-insensitively. Malformed rows are skipped and counted;
    /// only a missing/unreadable file, an empty file, an undetectable
    /// delimiter, or a missing required column aborts the build.
    pub fn parse(path: impl AsRef<Path>) -> Result<MgdefOutput, MgdefParseError> {
        let text = read_input_text(path.as_ref())?;
        let (header, data, header_lines) =
            split_header(&text).ok_or(MgdefParseError::EmptyFile)?;

        // MGDEF proper has a plain header, but tolerate a '#' marker.
        let header = header.trim_start_matches('#').trim();
        let delimiter = Delimiter::detect(header, Delimiter::MGDEF_CANDIDATES)?;

        let columns: Vec<String> = header
            .split(delimiter.as_char())
            .map(|c| c.trim().to_lowercase())
            .collect();
        let col_cui = Self::find_column(&columns, "cui")?;
        let col_def = Self::find_column(&columns, "def")?;
        let col_suppress = columns.iter().position(|c| c == "suppress");

        let mut index = DefinitionIndex::default();
        let mut stats = RunStats::default();

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

            let needed = col_cui.max(col_def).max(col_suppress.unwrap_or(0));
            if record.len() <= needed {
                debug!(
                    "Skipping MGDEF row {}: expected {} columns, found {}",
                    line,
                    needed + 1,
                    record.len()
                );
                stats.record_skip(SkipReason::ColumnCount);
                continue;
            }

            let cui = record[col_cui].trim();
            let def = record[col_def].trim();
            if cui.is_empty() || def.is_empty() {
                debug!("Skipping MGDEF row {}: empty CUI or DEF", line);
                stats.record_skip(SkipReason::MissingField);
                continue;
            }

            if let Some(col) = col_suppress {
                if Self::is_suppressed(&record[col]) {
                    debug!("Skipping MGDEF row {}: suppressed definition for {}", line, cui);
                    stats.record_skip(SkipReason::Suppressed);
                    continue;
                }
            }

            stats.emitted += 1;
            index.defs.insert(cui.to_string(), def.to_string());
        }

        Ok(MgdefOutput { index, stats })
    }

    fn find_column(columns: &[String], name: &'static str) -> Result<usize, MgdefParseError> {
        columns
            .iter()
            .position(|c| c == name)
            .ok_or(MgdefParseError::MissingColumn { column: name })
    }

    /// SUPPRESS is "N" on normal rows; "Y", "E", and "O" mark suppressed
    /// content. Anything other than "N" or blank is treated as suppressed.
    fn is_suppressed(flag: &str) -> bool {
        let flag = flag.trim();
        !(flag.is_empty() || flag.eq_ignore_ascii_case("n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Create a temporary test file with sample MGDEF data
    fn create_test_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_parse_tab_delimited() {
        let contents = "\
CUI\tDEF\tsource\tSUPPRESS
C0432273\tEndosteal hyperostosis is a bone disorder.\tNCI\tN
C0001080\tAchondroplasia is a form of short-limbed dwarfism.\tGARD\tN
";
        let file = create_test_file(contents);
        let output = MgdefParser::parse(file.path()).unwrap();

        assert_eq!(output.index.len(), 2);
        assert_eq!(
            output.index.get("C0432273"),
            Some("Endosteal hyperostosis is a bone disorder.")
        );
        assert_eq!(output.stats.rows_read, 2);
        assert_eq!(output.stats.skipped_total(), 0);
    }

    #[test]
    fn test_parse_comma_delimited_with_quoting() {
        let contents = "\
CUI,DEF,source,SUPPRESS
C0432273,\"A disorder with hyperostosis, mainly of the mandible.\",NCI,N
";
        let file = create_test_file(contents);
        let output = MgdefParser::parse(file.path()).unwrap();

        assert_eq!(
            output.index.get("C0432273"),
            Some("A disorder with hyperostosis, mainly of the mandible.")
        );
    }

    #[test]
    fn test_suppressed_rows_excluded() {
        let contents = "\
CUI\tDEF\tsource\tSUPPRESS
C0000001\tVisible definition.\tNCI\tN
C0000002\tSuppressed definition.\tNCI\tY
C0000003\tObsolete definition.\tNCI\tO
C0000004\tUnreviewed definition.\tNCI\tE
";
        let file = create_test_file(contents);
        let output = MgdefParser::parse(file.path()).unwrap();

        assert_eq!(output.index.len(), 1);
        assert_eq!(output.index.get("C0000001"), Some("Visible definition."));
        assert_eq!(output.index.get("C0000002"), None);
        assert_eq!(output.stats.skipped_suppressed, 3);
    }

    #[test]
    fn test_duplicate_cui_last_row_wins() {
        let contents = "\
CUI\tDEF\tsource\tSUPPRESS
C0000001\tFirst definition.\tNCI\tN
C0000001\tSecond definition.\tGARD\tN
";
        let file = create_test_file(contents);
        let output = MgdefParser::parse(file.path()).unwrap();

        assert_eq!(output.index.len(), 1);
        assert_eq!(output.index.get("C0000001"), Some("Second definition."));
    }

    #[test]
    fn test_malformed_rows_skipped_not_fatal() {
        let contents = "\
CUI\tDEF\tsource\tSUPPRESS
C0000001\tGood definition.\tNCI\tN
C0000002
C0000003\t\tNCI\tN
";
        let file = create_test_file(contents);
        let output = MgdefParser::parse(file.path()).unwrap();

        assert_eq!(output.index.len(), 1);
        assert_eq!(output.stats.skipped_column_count, 1);
        assert_eq!(output.stats.skipped_missing_field, 1);
    }

    #[test]
    fn test_missing_def_column_is_fatal() {
        let contents = "CUI\tsource\tSUPPRESS\nC0000001\tNCI\tN\n";
        let file = create_test_file(contents);

        let result = MgdefParser::parse(file.path());
        match result.unwrap_err() {
            MgdefParseError::MissingColumn { column } => assert_eq!(column, "def"),
            other => panic!("Expected MissingColumn error, got {other:?}"),
        }
    }

    #[test]
    fn test_undetectable_delimiter_is_fatal() {
        let contents = "CUI DEF source SUPPRESS\n";
        let file = create_test_file(contents);

        let result = MgdefParser::parse(file.path());
        assert!(matches!(result, Err(MgdefParseError::Delimiter(_))));
    }

    #[test]
    fn test_empty_file_is_fatal() {
        let file = create_test_file("\n\n");
        let result = MgdefParser::parse(file.path());
        assert!(matches!(result, Err(MgdefParseError::EmptyFile)));
    }

    #[test]
    fn test_missing_suppress_column_tolerated() {
        let contents = "CUI,DEF\nC0000001,A definition.\n";
        let file = create_test_file(contents);
        let output = MgdefParser::parse(file.path()).unwrap();

        assert_eq!(output.index.get("C0000001"), Some("A definition."));
    }

    #[test]
    fn test_gzipped_input() {
        let file = NamedTempFile::with_suffix(".gz").unwrap();
        let mut encoder =
            flate2::write::GzEncoder::new(file.reopen().unwrap(), flate2::Compression::default());
        encoder
            .write_all(b"CUI\tDEF\tsource\tSUPPRESS\nC0432273\tA bone disorder.\tNCI\tN\n")
            .unwrap();
        encoder.finish().unwrap();

        let output = MgdefParser::parse(file.path()).unwrap();
        assert_eq!(output.index.get("C0432273"), Some("A bone disorder."));
    }
}
