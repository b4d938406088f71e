// ==============================================================================
// delimiter.rs - Delimiter Auto-Detection
// ==============================================================================
// Description: Enumerated delimiter-detection policy for delimited headers
// Created: 2026-08-29
// Modified: 2026-08-29
// Version: 1.0.0
// ==============================================================================
// The two NCBI dumps do not commit to one delimiter: the mapping file has
// shipped pipe- and tab-delimited, MGDEF tab- and comma-delimited. Each file
// is sniffed independently from its header line.
// ==============================================================================

use thiserror::Error;

/// Candidate field delimiters for the reference dumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Pipe,
    Tab,
    Comma,
}

/// Errors from delimiter detection
#[derive(Error, Debug)]
pub enum DelimiterError {
    #[error("no candidate delimiter found in header line: {header:?}")]
    NoCandidateMatched { header: String },
}

impl Delimiter {
    /// Candidates for the MedGen/HPO/OMIM mapping file.
    pub const MAPPING_CANDIDATES: &'static [Delimiter] =
        &[Delimiter::Pipe, Delimiter::Tab, Delimiter::Comma];

    /// Candidates for the MGDEF definition file.
    pub const MGDEF_CANDIDATES: &'static [Delimiter] = &[Delimiter::Tab, Delimiter::Comma];

    pub fn as_char(&self) -> char {
        match self {
            Delimiter::Pipe => '|',
            Delimiter::Tab => '\t',
            Delimiter::Comma => ',',
        }
    }

    /// Delimiter byte for `csv::ReaderBuilder::delimiter`
    pub fn as_byte(&self) -> u8 {
        self.as_char() as u8
    }

    /// Detect the delimiter of a header line.
    ///
    /// Each candidate's occurrences in the header are counted; the most
    /// frequent one wins, with ties broken by candidate order. A header
    /// containing none of the candidates is unusable: no data row could be
    /// split into trustworthy columns, so detection fails outright.
    pub fn detect(header: &str, candidates: &[Delimiter]) -> Result<Delimiter, DelimiterError> {
        let mut best: Option<(Delimiter, usize)> = None;

        for &candidate in candidates {
            let count = header.matches(candidate.as_char()).count();
            if count == 0 {
                continue;
            }
            match best {
                Some((_, best_count)) if best_count >= count => {}
                _ => best = Some((candidate, count)),
            }
        }

        best.map(|(delimiter, _)| delimiter)
            .ok_or_else(|| DelimiterError::NoCandidateMatched {
                header: header.to_string(),
            })
    }
}
