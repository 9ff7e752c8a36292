//! The synthetic person record and its nested types.
//!
//! Records are created once during Phase 1 and are immutable afterwards,
//! except for `linked_persons`, which the Phase-2 linking pass appends to.
//! Serialized field names are part of the bulk-file wire contract and must
//! round-trip losslessly, including `null` for an absent `death_date` and an
//! empty array for `linked_persons`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Gender of a synthetic person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// All gender values, for uniform selection.
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];
}

/// Lifecycle status of a synthetic person.
///
/// `Deceased` records carry a `death_date`; `Active` records never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleStatus {
    Active,
    Deceased,
}

/// Relationship role attached to a cross-reference link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkRole {
    Father,
    Mother,
    Brother,
    Sister,
    Spouse,
    Child,
    Friend,
}

impl LinkRole {
    /// All role labels, for uniform selection.
    pub const ALL: [LinkRole; 7] = [
        LinkRole::Father,
        LinkRole::Mother,
        LinkRole::Brother,
        LinkRole::Sister,
        LinkRole::Spouse,
        LinkRole::Child,
        LinkRole::Friend,
    ];
}

/// A single typed identifier, e.g. a national ID code or a registry token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    /// Identifier type label, e.g. `NATIONAL_ID`.
    #[serde(rename = "type")]
    pub id_type: String,
    /// Generated identifier value.
    pub value: String,
}

/// A directed, labeled link from the owning record to another record in the
/// same universe.
///
/// `denormalized_display_name` is a snapshot of the target's `full_name`
/// taken at link-creation time, not a live reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    /// Id of the linked record. Never the owning record's own id.
    pub target_id: String,
    pub role: LinkRole,
    pub denormalized_display_name: String,
}

/// A fully-populated synthetic person record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonRecord {
    /// Opaque unique id (UUIDv4 text), assigned at creation.
    pub id: String,
    pub given_name: String,
    pub family_name: String,
    /// Always `given_name + " " + family_name`, derived at creation.
    pub full_name: String,
    pub gender: Gender,
    /// Constrained to the assigned bucket's date range.
    pub date_of_birth: NaiveDate,
    /// `"{city}, {region_code}"` composite.
    pub place_of_birth: String,
    pub lifecycle_status: LifecycleStatus,
    /// Present iff `lifecycle_status == Deceased`; then
    /// `date_of_birth <= death_date <= cutoff`. Serialized as `null` when
    /// absent, never omitted.
    pub death_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    /// Equal to `created_at`; no post-creation update is modeled.
    pub updated_at: DateTime<Utc>,
    /// Exactly one entry per configured identifier spec, in declaration order.
    pub identifiers: Vec<Identifier>,
    /// Empty until the linking pass runs.
    pub linked_persons: Vec<LinkEntry>,
}

impl PersonRecord {
    /// Derive the display name from its parts.
    pub fn derive_full_name(given: &str, family: &str) -> String {
        format!("{given} {family}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> PersonRecord {
        PersonRecord {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            given_name: "Ada".to_string(),
            family_name: "Lovelace".to_string(),
            full_name: PersonRecord::derive_full_name("Ada", "Lovelace"),
            gender: Gender::Female,
            date_of_birth: NaiveDate::from_ymd_opt(1952, 12, 10).unwrap(),
            place_of_birth: "Springfield, IL".to_string(),
            lifecycle_status: LifecycleStatus::Active,
            death_date: None,
            created_at: "2025-01-15T10:30:00Z".parse().unwrap(),
            updated_at: "2025-01-15T10:30:00Z".parse().unwrap(),
            identifiers: vec![Identifier {
                id_type: "NATIONAL_ID".to_string(),
                value: "2025AB12CD34".to_string(),
            }],
            linked_persons: vec![],
        }
    }

    #[test]
    fn test_full_name_derivation() {
        assert_eq!(PersonRecord::derive_full_name("Ada", "Lovelace"), "Ada Lovelace");
    }

    #[test]
    fn test_round_trip_preserves_all_fields() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let parsed: PersonRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_absent_death_date_serializes_as_null() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""death_date":null"#));
        assert!(json.contains(r#""linked_persons":[]"#));
    }

    #[test]
    fn test_date_of_birth_serializes_as_plain_date() {
        let record = sample_record();
        let json: serde_json::Value = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date_of_birth"], "1952-12-10");
    }

    #[test]
    fn test_enum_wire_labels_are_lowercase() {
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), r#""male""#);
        assert_eq!(
            serde_json::to_string(&LifecycleStatus::Deceased).unwrap(),
            r#""deceased""#
        );
        assert_eq!(serde_json::to_string(&LinkRole::Spouse).unwrap(), r#""spouse""#);
    }

    #[test]
    fn test_link_entry_round_trip() {
        let entry = LinkEntry {
            target_id: "some-id".to_string(),
            role: LinkRole::Friend,
            denormalized_display_name: "Grace Hopper".to_string(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        let parsed: LinkEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entry);
    }
}
