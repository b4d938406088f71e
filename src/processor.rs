// ==============================================================================
// processor.rs - Core Join Pipeline
// ==============================================================================
// Description: Builds the definition index, transforms the mapping file, writes JSON
// Created: 2026-08-29
// Modified: 2026-08-29
// Version: 1.0.0
// ==============================================================================

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::output::{self, OutputFormat};
use crate::parsers::{MappingTransformer, MgdefParser};
use crate::validator::InputValidator;

pub struct OmimMedgenProcessor {
    mgdef_path: PathBuf,
    mapping_path: PathBuf,
    output_path: PathBuf,
    format: OutputFormat,
}

impl OmimMedgenProcessor {
    pub fn new(
        mgdef_path: PathBuf,
        mapping_path: PathBuf,
        output_path: PathBuf,
        format: OutputFormat,
    ) -> Self {
        Self {
            mgdef_path,
            mapping_path,
            output_path,
            format,
        }
    }

    /// Main processing pipeline
    ///
    /// Strictly sequential: the definition index is fully built before the
    /// mapping pass starts, since every record join depends on a complete
    /// lookup.
    pub fn process(&self) -> Result<PathBuf> {
        info!("Starting OMIM-MedGen join pipeline");

        // 1. Validate both inputs before any parsing
        let validator = InputValidator::new();
        validator
            .validate(&self.mgdef_path)
            .context("MGDEF input validation failed")?;
        validator
            .validate(&self.mapping_path)
            .context("Mapping input validation failed")?;

        // 2. Build the CUI -> definition index from MGDEF
        info!("Loading MGDEF from: {:?}", self.mgdef_path);
        let mgdef = MgdefParser::parse(&self.mgdef_path)
            .with_context(|| format!("Failed to parse MGDEF file {:?}", self.mgdef_path))?;
        info!("Loaded {} definitions from MGDEF", mgdef.index.len());
        if mgdef.stats.skipped_total() > 0 {
            warn!(
                "Skipped {} MGDEF rows ({} malformed, {} missing fields, {} suppressed)",
                mgdef.stats.skipped_total(),
                mgdef.stats.skipped_column_count,
                mgdef.stats.skipped_missing_field,
                mgdef.stats.skipped_suppressed,
            );
        }

        // 3. Transform the mapping file against the index
        info!("Loading mapping from: {:?}", self.mapping_path);
        let transformed = MappingTransformer::transform(&self.mapping_path, &mgdef.index)
            .with_context(|| format!("Failed to parse mapping file {:?}", self.mapping_path))?;
        info!(
            "Mapping rows read: {}, records built: {}",
            transformed.stats.rows_read,
            transformed.records.len()
        );
        if transformed.stats.skipped_total() > 0 {
            warn!(
                "Skipped {} mapping rows ({} blank, {} malformed, {} missing fields, {} duplicate pairs)",
                transformed.stats.skipped_total(),
                transformed.stats.skipped_blank,
                transformed.stats.skipped_column_count,
                transformed.stats.skipped_missing_field,
                transformed.stats.skipped_duplicate,
            );
        }

        // 4. Write the output file
        info!("Writing {} output", self.format.extension());
        output::write_records(&self.output_path, &transformed.records, self.format)
            .with_context(|| format!("Failed to write output {:?}", self.output_path))?;

        info!("Processing complete, result: {:?}", self.output_path);
        Ok(self.output_path.clone())
    }
}
