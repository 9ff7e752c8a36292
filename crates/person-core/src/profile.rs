//! Seed profile: the generation configuration loaded from YAML.
//!
//! A profile bundles the weighted date-of-birth bucket table, the identifier
//! specs, the per-record link bound, and the generation cutoff. Profiles are
//! validated up front; a malformed bucket table aborts the run before any
//! record is produced.
//!
//! # Example
//!
//! ```rust
//! use person_core::SeedProfile;
//!
//! let profile = SeedProfile::from_yaml(r#"
//! version: 1
//! collection: test_person
//! cutoff: 2025-06-01
//! max_links: 3
//! buckets:
//!   - name: pre1950
//!     weight: 0.10
//!     from: 1900-01-01
//!     to: 1949-12-31
//!   - name: mid_century
//!     weight: 0.55
//!     from: 1950-01-01
//!     to: 1999-12-31
//!   - name: recent
//!     weight: 0.35
//!     from: 2000-01-01
//!     to: 2025-06-01
//! "#).unwrap();
//! assert_eq!(profile.buckets.len(), 3);
//! ```

use chrono::{Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Tolerance when checking that bucket weights sum to 1.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Error type for profile loading and validation.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Error reading profile file
    #[error("Failed to read profile file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Bucket table has no entries
    #[error("Bucket table is empty")]
    NoBuckets,

    /// Bucket weights do not form a probability distribution
    #[error("Bucket weights sum to {0}, expected 1.0")]
    WeightSum(f64),

    /// A bucket has a negative weight
    #[error("Bucket '{0}' has a negative weight")]
    NegativeWeight(String),

    /// A bucket's date range is empty or inverted
    #[error("Bucket '{name}' has an empty date range ({from} to {to})")]
    EmptyDateRange {
        name: String,
        from: NaiveDate,
        to: NaiveDate,
    },

    /// A bucket's range extends past the generation cutoff
    #[error("Bucket '{name}' ends {to}, after the generation cutoff {cutoff}")]
    RangeBeyondCutoff {
        name: String,
        to: NaiveDate,
        cutoff: NaiveDate,
    },

    /// The generation cutoff lies in the future
    #[error("Generation cutoff {0} is in the future")]
    FutureCutoff(NaiveDate),

    /// Deceased probability outside [0, 1]
    #[error("deceased_weight {0} is outside [0, 1]")]
    DeceasedWeight(f64),

    /// Negative created_at recency window
    #[error("created_within_days must be non-negative, got {0}")]
    CreatedWindow(i64),
}

/// A named stratum: a probability mass and the date range constraining
/// `date_of_birth` for records assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DobBucket {
    pub name: String,
    /// Probability mass in [0, 1]; all bucket weights sum to ~1.
    pub weight: f64,
    /// Earliest date of birth (inclusive).
    pub from: NaiveDate,
    /// Latest date of birth (inclusive).
    pub to: NaiveDate,
}

impl DobBucket {
    pub fn new(name: impl Into<String>, weight: f64, from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            name: name.into(),
            weight,
            from,
            to,
        }
    }

    /// Whether a date falls inside this bucket's inclusive range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}

/// Ordered weighted bucket table, selected over by cumulative intervals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BucketTable(Vec<DobBucket>);

impl BucketTable {
    pub fn new(buckets: Vec<DobBucket>) -> Self {
        Self(buckets)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[DobBucket] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DobBucket> {
        self.0.iter()
    }

    /// Find a bucket by name.
    pub fn get(&self, name: &str) -> Option<&DobBucket> {
        self.0.iter().find(|b| b.name == name)
    }

    /// Select the bucket whose cumulative weight interval contains `draw`.
    ///
    /// Intervals are half-open `[lo, hi)`, walked in declaration order; the
    /// last bucket absorbs the remaining mass up to 1.0, so floating-point
    /// drift in the weights can never leave a draw unassigned. Returns `None`
    /// only for an empty table, which validation rejects beforehand.
    pub fn select(&self, draw: f64) -> Option<&DobBucket> {
        let (last, rest) = self.0.split_last()?;
        let mut lo = 0.0;
        for bucket in rest {
            let hi = lo + bucket.weight;
            if draw < hi {
                return Some(bucket);
            }
            lo = hi;
        }
        Some(last)
    }
}

/// How one identifier entry is generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IdentifierSpec {
    /// Fixed prefix followed by an uppercase alphanumeric code.
    PrefixedCode {
        /// Emitted identifier type label, e.g. `NATIONAL_ID`.
        name: String,
        prefix: String,
        /// Number of random characters after the prefix.
        length: usize,
    },
    /// An opaque unique token (UUIDv4 text).
    UniqueToken {
        /// Emitted identifier type label, e.g. `crvs`.
        name: String,
    },
}

impl IdentifierSpec {
    /// The identifier type label this spec emits.
    pub fn name(&self) -> &str {
        match self {
            IdentifierSpec::PrefixedCode { name, .. } => name,
            IdentifierSpec::UniqueToken { name } => name,
        }
    }
}

fn default_version() -> u32 {
    1
}

fn default_collection() -> String {
    "test_person".to_string()
}

fn default_created_within_days() -> i64 {
    60
}

fn default_deceased_weight() -> f64 {
    0.5
}

fn default_max_links() -> u32 {
    3
}

fn default_identifiers() -> Vec<IdentifierSpec> {
    vec![
        IdentifierSpec::PrefixedCode {
            name: "NATIONAL_ID".to_string(),
            prefix: "2025".to_string(),
            length: 8,
        },
        IdentifierSpec::UniqueToken {
            name: "crvs".to_string(),
        },
    ]
}

/// Yesterday in UTC. Generated dates never reach into the future.
fn default_cutoff() -> NaiveDate {
    Utc::now().date_naive() - Duration::days(1)
}

/// Generation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedProfile {
    #[serde(default = "default_version")]
    pub version: u32,

    /// Target collection (index) name carried on every action descriptor.
    #[serde(default = "default_collection")]
    pub collection: String,

    /// Latest date any `date_of_birth` or `death_date` may take.
    /// Defaults to yesterday (UTC) when absent.
    #[serde(default)]
    pub cutoff: Option<NaiveDate>,

    /// Trailing window for `created_at`, in days before now.
    #[serde(default = "default_created_within_days")]
    pub created_within_days: i64,

    /// Probability that a record is deceased.
    #[serde(default = "default_deceased_weight")]
    pub deceased_weight: f64,

    /// Upper bound K on links per record; counts are uniform in [0, K].
    #[serde(default = "default_max_links")]
    pub max_links: u32,

    pub buckets: BucketTable,

    #[serde(default = "default_identifiers")]
    pub identifiers: Vec<IdentifierSpec>,
}

impl Default for SeedProfile {
    /// The reference configuration: three strata (early era with small
    /// weight, middle era with majority weight, recent era with the
    /// remainder) ending at the default cutoff.
    fn default() -> Self {
        let cutoff = default_cutoff();
        let buckets = BucketTable::new(vec![
            DobBucket::new(
                "pre1950",
                0.10,
                NaiveDate::from_ymd_opt(1900, 1, 1).expect("valid calendar date"),
                NaiveDate::from_ymd_opt(1949, 12, 31).expect("valid calendar date"),
            ),
            DobBucket::new(
                "mid_century",
                0.55,
                NaiveDate::from_ymd_opt(1950, 1, 1).expect("valid calendar date"),
                NaiveDate::from_ymd_opt(1999, 12, 31).expect("valid calendar date"),
            ),
            DobBucket::new(
                "recent",
                0.35,
                NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid calendar date"),
                cutoff,
            ),
        ]);
        Self {
            version: default_version(),
            collection: default_collection(),
            cutoff: Some(cutoff),
            created_within_days: default_created_within_days(),
            deceased_weight: default_deceased_weight(),
            max_links: default_max_links(),
            buckets,
            identifiers: default_identifiers(),
        }
    }
}

impl SeedProfile {
    /// Load and validate a profile from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ProfileError> {
        let profile: SeedProfile = serde_yaml::from_str(yaml)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Load and validate a profile from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        Self::from_yaml(&fs::read_to_string(path)?)
    }

    /// The effective generation cutoff.
    pub fn effective_cutoff(&self) -> NaiveDate {
        self.cutoff.unwrap_or_else(default_cutoff)
    }

    /// Reject malformed configurations before any record is produced.
    pub fn validate(&self) -> Result<(), ProfileError> {
        let cutoff = self.effective_cutoff();
        if cutoff > Utc::now().date_naive() {
            return Err(ProfileError::FutureCutoff(cutoff));
        }
        if self.buckets.is_empty() {
            return Err(ProfileError::NoBuckets);
        }
        let mut sum = 0.0;
        for bucket in self.buckets.iter() {
            if bucket.weight < 0.0 {
                return Err(ProfileError::NegativeWeight(bucket.name.clone()));
            }
            sum += bucket.weight;
            if bucket.from > bucket.to {
                return Err(ProfileError::EmptyDateRange {
                    name: bucket.name.clone(),
                    from: bucket.from,
                    to: bucket.to,
                });
            }
            if bucket.to > cutoff {
                return Err(ProfileError::RangeBeyondCutoff {
                    name: bucket.name.clone(),
                    to: bucket.to,
                    cutoff,
                });
            }
        }
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ProfileError::WeightSum(sum));
        }
        if !(0.0..=1.0).contains(&self.deceased_weight) {
            return Err(ProfileError::DeceasedWeight(self.deceased_weight));
        }
        if self.created_within_days < 0 {
            return Err(ProfileError::CreatedWindow(self.created_within_days));
        }
        Ok(())
    }
}
