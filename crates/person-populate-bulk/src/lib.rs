//! Bulk-file populator for person-seed.
//!
//! This crate runs the full two-phase pipeline — synthesize the universe,
//! link it, then write NDJSON bulk files where every record is preceded by
//! its index-action line.
//!
//! # Example
//!
//! ```ignore
//! use person_core::SeedProfile;
//! use person_populate_bulk::{BulkPopulator, PartitionMode};
//!
//! let mut populator = BulkPopulator::new(SeedProfile::default(), 42)?;
//! let metrics = populator.populate("out", 100_000, PartitionMode::ByBucket)?;
//! println!("Wrote {} records in {:?}", metrics.records_written, metrics.total_duration);
//! ```

pub mod args;
pub mod error;
pub mod populator;

pub use args::{BulkGenerateArgs, CommonGenerateArgs, PartitionArg, SpecialGenerateArgs};
pub use error::BulkPopulatorError;
pub use populator::{BulkPopulator, PartitionMode, PopulateMetrics};
