// ==============================================================================
// parsers/mod.rs - Reference file parser modules
// ==============================================================================
// Description: Parsers for the MGDEF and MedGen/HPO/OMIM mapping dumps
// Created: 2026-08-29
// Modified: 2026-08-29
// Version: 1.0.0
// ==============================================================================

use std::fs::File;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;

pub mod delimiter;
pub mod mapping;
pub mod mgdef;

pub use delimiter::{Delimiter, DelimiterError};
pub use mapping::{MappingParseError, MappingTransformer, TransformOutput};
pub use mgdef::{DefinitionIndex, MgdefOutput, MgdefParseError, MgdefParser};

/// Read an input dump to a string, transparently gunzipping `*.gz` paths.
///
/// The reference dumps are modest (tens of megabytes decompressed), so one
/// in-memory pass is fine and lets each parser sniff its header before
/// committing to a delimiter. The decoder and file handle are dropped on
/// every exit path, including read errors.
pub(crate) fn read_input_text(path: &Path) -> std::io::Result<String> {
    let file = File::open(path)?;
    let mut text = String::new();

    if path.extension().is_some_and(|ext| ext == "gz") {
        let mut decoder = GzDecoder::new(file);
        decoder.read_to_string(&mut text)?;
    } else {
        let mut file = file;
        file.read_to_string(&mut text)?;
    }

    Ok(text)
}

/// Find the first non-empty line, returning `(line, rest, lines_consumed)`
/// where `rest` holds everything after it and `lines_consumed` counts the
/// file lines before `rest` (header included), so row diagnostics can
/// report absolute line numbers. Returns `None` for an empty/blank file.
pub(crate) fn split_header(text: &str) -> Option<(&str, &str, u64)> {
    let mut offset = 0;
    let mut lines_consumed: u64 = 0;
    for line in text.split_inclusive('\n') {
        lines_consumed += 1;
        if !line.trim().is_empty() {
            let header = line.trim_end_matches(['\r', '\n']);
            return Some((header, &text[offset + line.len()..], lines_consumed));
        }
        offset += line.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_plain_text() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"CUI\tDEF\n").unwrap();
        file.flush().unwrap();

        let text = read_input_text(file.path()).unwrap();
        assert_eq!(text, "CUI\tDEF\n");
    }

    #[test]
    fn test_read_gzipped_text() {
        let file = NamedTempFile::with_suffix(".gz").unwrap();
        let mut encoder =
            flate2::write::GzEncoder::new(file.reopen().unwrap(), flate2::Compression::default());
        encoder.write_all(b"CUI\tDEF\nC1\tdef one\n").unwrap();
        encoder.finish().unwrap();

        let text = read_input_text(file.path()).unwrap();
        assert_eq!(text, "CUI\tDEF\nC1\tdef one\n");
    }

    #[test]
    fn test_corrupt_gzip_is_an_error() {
        let mut file = NamedTempFile::with_suffix(".gz").unwrap();
        file.write_all(b"not gzip data at all").unwrap();
        file.flush().unwrap();

        assert!(read_input_text(file.path()).is_err());
    }

    #[test]
    fn test_split_header_skips_blank_lines() {
        let text = "\n  \nCUI,DEF\nC1,d1\n";
        let (header, rest, lines_consumed) = split_header(text).unwrap();
        assert_eq!(header, "CUI,DEF");
        assert_eq!(rest, "C1,d1\n");
        assert_eq!(lines_consumed, 3);
    }

    #[test]
    fn test_split_header_strips_crlf() {
        let text = "CUI,DEF\r\nC1,d1\r\n";
        let (header, rest, lines_consumed) = split_header(text).unwrap();
        assert_eq!(header, "CUI,DEF");
        assert_eq!(rest, "C1,d1\r\n");
        assert_eq!(lines_consumed, 1);
    }

    #[test]
    fn test_split_header_empty_file() {
        assert!(split_header("").is_none());
        assert!(split_header("\n\n  \n").is_none());
    }
}
