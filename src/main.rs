//! Command-line interface for person-seed
//!
//! # Usage Examples
//!
//! ```bash
//! # 100k stratified records, one bulk file per date-of-birth bucket
//! person-seed generate --count 100000 --output-dir out
//!
//! # Custom profile, single output file, pinned seed
//! person-seed generate \
//!   --profile profile.yaml \
//!   --partition single \
//!   --seed 7 \
//!   --output-dir out
//!
//! # Fixed-size batches of 20k pairs per file
//! person-seed generate --count 100000 --partition by-batch --batch-size 20000
//!
//! # Curated edge-case names (accented, non-Latin scripts, noisy input)
//! person-seed generate-special --per-set 100 --output-dir out
//! ```
//!
//! Every output line pair is an index action followed by its record, ready
//! for a bulk-load endpoint.

use anyhow::Context;
use clap::{Parser, Subcommand};
use person_core::SeedProfile;
use person_populate_bulk::{BulkGenerateArgs, BulkPopulator, SpecialGenerateArgs};
use std::path::Path;

#[derive(Parser)]
#[command(name = "person-seed")]
#[command(about = "Generates synthetic person records as bulk-load files for search-index seeding")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a stratified, cross-linked universe of person records
    Generate(BulkGenerateArgs),

    /// Generate search-edge-case records from curated name sets
    GenerateSpecial(SpecialGenerateArgs),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => {
            let profile = load_profile(args.common.profile.as_deref())?;
            std::fs::create_dir_all(&args.common.output_dir).with_context(|| {
                format!("Failed to create output dir {:?}", args.common.output_dir)
            })?;

            let mut populator = BulkPopulator::new(profile, args.common.seed)?;
            let metrics = populator.populate(
                &args.common.output_dir,
                args.count,
                args.partition_mode(),
            )?;

            tracing::info!(
                "Done: {} records across {} files ({} bytes)",
                metrics.records_written,
                metrics.files.len(),
                metrics.bytes_written
            );
        }
        Commands::GenerateSpecial(args) => {
            let profile = load_profile(args.common.profile.as_deref())?;
            std::fs::create_dir_all(&args.common.output_dir).with_context(|| {
                format!("Failed to create output dir {:?}", args.common.output_dir)
            })?;

            let mut populator = BulkPopulator::new(profile, args.common.seed)?;
            let metrics = populator.populate_special(&args.common.output_dir, args.per_set)?;

            tracing::info!(
                "Done: {} special records ({} bytes)",
                metrics.records_written,
                metrics.bytes_written
            );
        }
    }

    Ok(())
}

fn load_profile(path: Option<&Path>) -> anyhow::Result<SeedProfile> {
    match path {
        Some(path) => SeedProfile::from_file(path)
            .with_context(|| format!("Failed to load seed profile from {path:?}")),
        None => Ok(SeedProfile::default()),
    }
}
