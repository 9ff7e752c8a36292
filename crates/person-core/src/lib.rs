//! Core types for the person-seed generator.
//!
//! This crate provides the foundational types used across the generation
//! pipeline, including:
//!
//! - [`PersonRecord`] - The synthetic person document and its nested types
//! - [`IndexAction`] - The bulk-load action descriptor paired with each record
//! - [`SeedProfile`] - Generation configuration loaded from YAML
//! - [`BucketTable`] - Weighted date-of-birth strata with cumulative selection
//!
//! # Architecture
//!
//! ```text
//! person-core (this crate)
//!    │
//!    ├─── person-generator      (synthesis, bucketing, linking)
//!    └─── person-populate-bulk  (bulk file writing)
//! ```

pub mod bulk;
pub mod profile;
pub mod record;

// Re-exports for convenience
pub use bulk::{ActionMeta, BulkPair, IndexAction};
pub use profile::{BucketTable, DobBucket, IdentifierSpec, ProfileError, SeedProfile};
pub use record::{Gender, Identifier, LifecycleStatus, LinkEntry, LinkRole, PersonRecord};
