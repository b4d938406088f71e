// ==============================================================================
// main.rs - OMIM/MedGen Database Builder Entry Point
// ==============================================================================
// Description: Batch tool joining MedGen_HPO_OMIM_Mapping and MGDEF into JSON
// Created: 2026-08-29
// Modified: 2026-08-29
// Version: 1.0.0
// ==============================================================================

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod models;
mod output;
mod parsers;
mod processor;
mod validator;

use output::OutputFormat;
use processor::OmimMedgenProcessor;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to MedGen_HPO_OMIM_Mapping.txt.gz
    #[arg(short = 'm', long, default_value = "MedGen_HPO_OMIM_Mapping.txt.gz")]
    mapping: PathBuf,

    /// Path to MGDEF.csv.gz
    #[arg(short = 'd', long, default_value = "MGDEF.csv.gz")]
    mgdef: PathBuf,

    /// Output file path
    #[arg(short, long, default_value = "omim_medgen_data.json")]
    output: PathBuf,

    /// Output format (json or ndjson)
    #[arg(short, long, default_value = "json")]
    format: String,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "omim_medgen_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("OMIM-MedGen database builder starting...");

    // Parse command line arguments
    let args = Args::parse();

    // Parse output format
    let format = match args.format.to_lowercase().as_str() {
        "json" => OutputFormat::Json,
        "ndjson" | "jsonl" => OutputFormat::Ndjson,
        _ => {
            warn!("Invalid output format '{}', using json", args.format);
            OutputFormat::Json
        }
    };

    let processor = OmimMedgenProcessor::new(args.mgdef, args.mapping, args.output, format);

    let result_path = processor.process()?;
    info!("Wrote output to {:?}", result_path);

    Ok(())
}
