//! CLI argument definitions for the bulk populator.

use crate::populator::PartitionMode;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Arguments shared by all generation commands.
#[derive(Args, Clone, Debug)]
pub struct CommonGenerateArgs {
    /// Path to seed profile YAML (omit to use the built-in reference profile)
    #[arg(long, short = 'p')]
    pub profile: Option<PathBuf>,

    /// Output directory for bulk files
    #[arg(long, short = 'o', default_value = ".")]
    pub output_dir: PathBuf,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, default_value = "42")]
    pub seed: u64,
}

/// How to split pairs across output files.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartitionArg {
    /// One file holding every pair
    Single,
    /// One file per date-of-birth bucket
    ByBucket,
    /// Fixed number of pairs per file
    ByBatch,
}

/// Arguments for the stratified bulk generation command.
#[derive(Args, Clone, Debug)]
pub struct BulkGenerateArgs {
    #[command(flatten)]
    pub common: CommonGenerateArgs,

    /// Number of records to generate
    #[arg(long, default_value = "100000")]
    pub count: u64,

    /// How to split pairs across output files
    #[arg(long, value_enum, default_value_t = PartitionArg::ByBucket)]
    pub partition: PartitionArg,

    /// Pairs per file when --partition by-batch
    #[arg(long, default_value = "20000")]
    pub batch_size: usize,
}

impl BulkGenerateArgs {
    pub fn partition_mode(&self) -> PartitionMode {
        match self.partition {
            PartitionArg::Single => PartitionMode::Single,
            PartitionArg::ByBucket => PartitionMode::ByBucket,
            PartitionArg::ByBatch => PartitionMode::ByBatch {
                pairs_per_file: self.batch_size,
            },
        }
    }
}

/// Arguments for the curated special-name generation command.
#[derive(Args, Clone, Debug)]
pub struct SpecialGenerateArgs {
    #[command(flatten)]
    pub common: CommonGenerateArgs,

    /// Records generated per curated name set
    #[arg(long, default_value = "100")]
    pub per_set: usize,
}
