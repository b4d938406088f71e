// ==============================================================================
// validator.rs - Input File Validation
// ==============================================================================
// Description: Pre-flight checks on the reference dumps before the pipeline runs
// Created: 2026-08-29
// Modified: 2026-08-29
// Version: 1.0.0
// ==============================================================================

use anyhow::Result;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Gzip magic bytes (RFC 1952)
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Validates input files before any parsing starts, so a missing or
/// truncated dump fails the run immediately rather than mid-pipeline.
pub struct InputValidator;

impl InputValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate one input dump: the path must name an existing regular
    /// file, and `*.gz` paths must start with the gzip magic bytes.
    pub fn validate(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            anyhow::bail!("Input file not found: {}", path.display());
        }
        if !path.is_file() {
            anyhow::bail!("Input path is not a regular file: {}", path.display());
        }

        if path.extension().is_some_and(|ext| ext == "gz") {
            self.validate_gzip_magic(path)?;
        }

        Ok(())
    }

    fn validate_gzip_magic(&self, path: &Path) -> Result<()> {
        let mut file = File::open(path)?;
        let mut magic = [0u8; 2];

        file.read_exact(&mut magic).map_err(|_| {
            anyhow::anyhow!("File too short to be gzip: {}", path.display())
        })?;

        if magic != GZIP_MAGIC {
            anyhow::bail!("Not a gzip file (bad magic bytes): {}", path.display());
        }

        Ok(())
    }
}

impl Default for InputValidator {
    fn default() -> Self {
        Self::new()
    }
}
