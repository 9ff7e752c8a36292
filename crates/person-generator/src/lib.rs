//! Generation engine for the person-seed tool.
//!
//! This crate produces deterministic synthetic person records from a
//! [`person_core::SeedProfile`]. All randomness flows through a single seeded
//! RNG, so the same seed, profile, and count reproduce the same universe.
//!
//! # Architecture
//!
//! ```text
//! SeedProfile (YAML)
//!        │
//!        ▼
//! ┌───────────────────┐
//! │  PersonGenerator  │   Phase 1: bucket selection + record synthesis
//! │  - rng (StdRng)   │
//! │  - index          │
//! └────────┬──────────┘
//!          ▼
//!   UniverseBuilder ──seal()──▶ Universe
//!                                  │
//!                                  ▼
//!                           link_universe()   Phase 2: cross-reference links
//! ```
//!
//! Phase 2 only exists for a sealed universe, so linking can never observe a
//! partially-built record table.
//!
//! # Example
//!
//! ```rust
//! use person_core::SeedProfile;
//! use person_generator::{PersonGenerator, UniverseBuilder};
//!
//! let mut generator = PersonGenerator::new(SeedProfile::default(), 42).unwrap();
//! let mut builder = UniverseBuilder::new();
//! for _ in 0..10 {
//!     builder.push(generator.next_person().unwrap().person);
//! }
//! let mut universe = builder.seal();
//! generator.link(&mut universe);
//! assert_eq!(universe.len(), 10);
//! ```

pub mod generator;
pub mod linking;
pub mod names;
pub mod special;
pub mod values;

// Re-exports for convenience
pub use generator::{GeneratorError, PersonGenerator, PersonIterator, SynthesizedPerson};
pub use linking::{link_universe, Universe, UniverseBuilder};
pub use special::generate_special_people;
