// ==============================================================================
// models.rs - Core Data Model
// ==============================================================================
// Description: Output records, skip-reason taxonomy, and run statistics
// Created: 2026-08-29
// Modified: 2026-08-29
// Version: 1.0.0
// ==============================================================================

use serde::{Deserialize, Serialize};

/// One denormalized OMIM/MedGen record, keyed by OMIM identifier.
///
/// All five fields serialize as strings; `_id` always equals `omim_id`
/// (no separate identifier is synthesized).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    /// Record key, identical to `omim_id`
    #[serde(rename = "_id")]
    pub id: String,

    /// OMIM numeric identifier (e.g., "144750")
    pub omim_id: String,

    /// OMIM disease name
    pub omim_disease: String,

    /// MedGen concept identifier (CUI, e.g., "C0432273")
    pub medgen_concept_id: String,

    /// MedGen definition text, or the literal "NA" when no definition
    /// exists for the concept. Never empty.
    pub medgen_disease_info: String,
}

impl OutputRecord {
    pub fn new(
        omim_id: String,
        omim_disease: String,
        medgen_concept_id: String,
        medgen_disease_info: String,
    ) -> Self {
        Self {
            id: omim_id.clone(),
            omim_id,
            omim_disease,
            medgen_concept_id,
            medgen_disease_info,
        }
    }
}

/// Why a data row was skipped instead of contributing to the output.
///
/// Routine, expected malformations in reference dumps are recovered
/// locally: the row is dropped, the reason is counted, and processing
/// continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Row is empty or whitespace-only
    Blank,
    /// Row has fewer columns than the header promised
    ColumnCount,
    /// A required field (MIM number, CUI, or definition text) is empty
    MissingField,
    /// The SUPPRESS flag marks this definition as hidden
    Suppressed,
    /// The (OMIM id, CUI) pair was already emitted; first occurrence wins
    Duplicate,
}

/// Skip counts accumulated over one pass of an input file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Data rows read (header excluded)
    pub rows_read: usize,
    /// Records emitted
    pub emitted: usize,
    pub skipped_blank: usize,
    pub skipped_column_count: usize,
    pub skipped_missing_field: usize,
    pub skipped_suppressed: usize,
    pub skipped_duplicate: usize,
}

impl RunStats {
    pub fn record_skip(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::Blank => self.skipped_blank += 1,
            SkipReason::ColumnCount => self.skipped_column_count += 1,
            SkipReason::MissingField => self.skipped_missing_field += 1,
            SkipReason::Suppressed => self.skipped_suppressed += 1,
            SkipReason::Duplicate => self.skipped_duplicate += 1,
        }
    }

    /// Total rows skipped for any reason.
    pub fn skipped_total(&self) -> usize {
        self.skipped_blank
            + self.skipped_column_count
            + self.skipped_missing_field
            + self.skipped_suppressed
            + self.skipped_duplicate
    }
}
