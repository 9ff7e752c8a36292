//! Phase-1 record synthesis: stratified bucket assignment plus
//! internally-consistent attribute generation.

use crate::{names, values};
use chrono::NaiveDate;
use person_core::{
    Gender, Identifier, IdentifierSpec, LifecycleStatus, PersonRecord, ProfileError, SeedProfile,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Error type for generation.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The profile failed validation
    #[error("Profile rejected: {0}")]
    Profile(#[from] ProfileError),

    /// A bucket would produce dates violating the ordering invariants.
    /// Validation rejects such profiles up front, so hitting this
    /// per-record aborts the run; dates are never silently clamped.
    #[error("Bucket '{name}' would produce a date of birth outside [{from}, {cutoff}]")]
    InvalidRange {
        name: String,
        from: NaiveDate,
        cutoff: NaiveDate,
    },

    /// No bucket to draw from
    #[error("Bucket table is empty")]
    EmptyBucketTable,
}

/// One Phase-1 output: the synthesized record and the stratum it was
/// assigned to. The bucket name is carried for sink-side partitioning and
/// never appears inside the record itself.
#[derive(Debug, Clone)]
pub struct SynthesizedPerson {
    pub bucket: String,
    pub person: PersonRecord,
}

/// Record generator that produces deterministic synthetic persons.
///
/// A single seeded RNG drives every draw, so the same seed and profile
/// reproduce the same records.
pub struct PersonGenerator {
    profile: SeedProfile,
    /// Effective cutoff, resolved once so a run is internally consistent.
    cutoff: NaiveDate,
    pub(crate) rng: StdRng,
    /// Number of records synthesized so far.
    index: u64,
}

impl PersonGenerator {
    /// Create a generator, validating the profile up front.
    ///
    /// A malformed bucket table is rejected here, before any record is
    /// produced.
    pub fn new(profile: SeedProfile, seed: u64) -> Result<Self, GeneratorError> {
        profile.validate()?;
        let cutoff = profile.effective_cutoff();
        Ok(Self {
            profile,
            cutoff,
            rng: StdRng::seed_from_u64(seed),
            index: 0,
        })
    }

    pub fn profile(&self) -> &SeedProfile {
        &self.profile
    }

    /// The cutoff this run generates against.
    pub fn cutoff(&self) -> NaiveDate {
        self.cutoff
    }

    /// Number of records synthesized so far.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Synthesize the next record: draw a stratum, then derive every
    /// attribute from its constraints.
    pub fn next_person(&mut self) -> Result<SynthesizedPerson, GeneratorError> {
        let draw: f64 = self.rng.gen();
        let bucket = self
            .profile
            .buckets
            .select(draw)
            .ok_or(GeneratorError::EmptyBucketTable)?
            .clone();

        if bucket.from > bucket.to || bucket.to > self.cutoff {
            return Err(GeneratorError::InvalidRange {
                name: bucket.name,
                from: bucket.from,
                cutoff: self.cutoff,
            });
        }

        let date_of_birth = values::uniform_date(&mut self.rng, bucket.from, bucket.to);
        let gender = *values::pick(&mut self.rng, &Gender::ALL);
        let given = match gender {
            Gender::Male => *values::pick(&mut self.rng, names::MALE_GIVEN),
            Gender::Female => *values::pick(&mut self.rng, names::FEMALE_GIVEN),
        };
        let family = *values::pick(&mut self.rng, names::FAMILY);

        let person = self.assemble(given, family, gender, date_of_birth)?;
        Ok(SynthesizedPerson {
            bucket: bucket.name,
            person,
        })
    }

    /// Synthesize a record with a fixed name, drawing the date of birth from
    /// the full span of the bucket table instead of a single stratum. Used
    /// for curated special-name records.
    pub fn next_named_person(
        &mut self,
        given: &str,
        family: &str,
        gender: Gender,
    ) -> Result<PersonRecord, GeneratorError> {
        let from = self
            .profile
            .buckets
            .iter()
            .map(|b| b.from)
            .min()
            .ok_or(GeneratorError::EmptyBucketTable)?;
        let date_of_birth = values::uniform_date(&mut self.rng, from, self.cutoff);
        self.assemble(given, family, gender, date_of_birth)
    }

    /// Run the Phase-2 linking pass over a sealed universe, using this
    /// generator's RNG stream and the profile's link bound.
    pub fn link(&mut self, universe: &mut crate::linking::Universe) {
        crate::linking::link_universe(universe, &mut self.rng, self.profile.max_links);
    }

    /// Lazily synthesize `count` records.
    pub fn people(&mut self, count: u64) -> PersonIterator<'_> {
        PersonIterator {
            generator: self,
            remaining: count,
        }
    }

    fn assemble(
        &mut self,
        given: &str,
        family: &str,
        gender: Gender,
        date_of_birth: NaiveDate,
    ) -> Result<PersonRecord, GeneratorError> {
        let full_name = PersonRecord::derive_full_name(given, family);

        let city = *values::pick(&mut self.rng, names::CITIES);
        let region = *values::pick(&mut self.rng, names::REGION_CODES);
        let place_of_birth = format!("{city}, {region}");

        let identifiers: Vec<Identifier> = self
            .profile
            .identifiers
            .iter()
            .map(|spec| generate_identifier(&mut self.rng, spec))
            .collect();

        let lifecycle_status = if self.rng.gen_bool(self.profile.deceased_weight) {
            LifecycleStatus::Deceased
        } else {
            LifecycleStatus::Active
        };
        let death_date = match lifecycle_status {
            LifecycleStatus::Deceased => Some(values::uniform_date(
                &mut self.rng,
                date_of_birth,
                self.cutoff,
            )),
            LifecycleStatus::Active => None,
        };

        let created_at = values::recent_datetime(&mut self.rng, self.profile.created_within_days);

        self.index += 1;

        Ok(PersonRecord {
            id: values::unique_token(&mut self.rng),
            given_name: given.to_string(),
            family_name: family.to_string(),
            full_name,
            gender,
            date_of_birth,
            place_of_birth,
            lifecycle_status,
            death_date,
            created_at,
            updated_at: created_at,
            identifiers,
            linked_persons: Vec::new(),
        })
    }
}

/// Generate one identifier entry per its spec.
fn generate_identifier<R: Rng>(rng: &mut R, spec: &IdentifierSpec) -> Identifier {
    match spec {
        IdentifierSpec::PrefixedCode {
            name,
            prefix,
            length,
        } => Identifier {
            id_type: name.clone(),
            value: format!(
                "{prefix}{}",
                values::random_string(rng, values::UPPER_ALPHANUMERIC, *length)
            ),
        },
        IdentifierSpec::UniqueToken { name } => Identifier {
            id_type: name.clone(),
            value: values::unique_token(rng),
        },
    }
}

/// Iterator that lazily synthesizes records.
pub struct PersonIterator<'a> {
    generator: &'a mut PersonGenerator,
    remaining: u64,
}

impl Iterator for PersonIterator<'_> {
    type Item = Result<SynthesizedPerson, GeneratorError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.generator.next_person())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PersonIterator<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use person_core::{BucketTable, DobBucket};
    use std::collections::HashMap;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn pinned_profile() -> SeedProfile {
        let mut profile = SeedProfile::default();
        profile.cutoff = Some(date(2024, 12, 31));
        profile.buckets = BucketTable::new(vec![
            DobBucket::new("pre1950", 0.10, date(1900, 1, 1), date(1949, 12, 31)),
            DobBucket::new("mid_century", 0.55, date(1950, 1, 1), date(1999, 12, 31)),
            DobBucket::new("recent", 0.35, date(2000, 1, 1), date(2024, 12, 31)),
        ]);
        profile
    }

    #[test]
    fn test_full_name_always_derived() {
        let mut generator = PersonGenerator::new(pinned_profile(), 42).unwrap();
        for _ in 0..200 {
            let p = generator.next_person().unwrap().person;
            assert_eq!(p.full_name, format!("{} {}", p.given_name, p.family_name));
        }
    }

    #[test]
    fn test_dob_within_assigned_bucket() {
        let profile = pinned_profile();
        let mut generator = PersonGenerator::new(profile.clone(), 42).unwrap();
        for _ in 0..500 {
            let sp = generator.next_person().unwrap();
            let bucket = profile.buckets.get(&sp.bucket).unwrap();
            assert!(
                bucket.contains(sp.person.date_of_birth),
                "dob {} outside bucket '{}'",
                sp.person.date_of_birth,
                sp.bucket
            );
        }
    }

    #[test]
    fn test_death_date_ordering() {
        let profile = pinned_profile();
        let cutoff = profile.effective_cutoff();
        let mut generator = PersonGenerator::new(profile, 42).unwrap();
        let mut saw_deceased = false;
        for _ in 0..500 {
            let p = generator.next_person().unwrap().person;
            match p.lifecycle_status {
                LifecycleStatus::Deceased => {
                    saw_deceased = true;
                    let death = p.death_date.expect("deceased record must carry death_date");
                    assert!(p.date_of_birth <= death);
                    assert!(death <= cutoff);
                }
                LifecycleStatus::Active => assert!(p.death_date.is_none()),
            }
        }
        assert!(saw_deceased);
    }

    #[test]
    fn test_created_equals_updated() {
        let mut generator = PersonGenerator::new(pinned_profile(), 42).unwrap();
        for _ in 0..50 {
            let p = generator.next_person().unwrap().person;
            assert_eq!(p.created_at, p.updated_at);
        }
    }

    #[test]
    fn test_one_identifier_per_configured_spec() {
        let profile = pinned_profile();
        let specs: Vec<String> = profile.identifiers.iter().map(|s| s.name().to_string()).collect();
        let mut generator = PersonGenerator::new(profile, 42).unwrap();
        let p = generator.next_person().unwrap().person;
        let types: Vec<&str> = p.identifiers.iter().map(|i| i.id_type.as_str()).collect();
        assert_eq!(types, specs.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn test_prefixed_code_shape() {
        let mut generator = PersonGenerator::new(pinned_profile(), 42).unwrap();
        let p = generator.next_person().unwrap().person;
        let national = p
            .identifiers
            .iter()
            .find(|i| i.id_type == "NATIONAL_ID")
            .unwrap();
        assert!(national.value.starts_with("2025"));
        assert_eq!(national.value.len(), "2025".len() + 8);
    }

    #[test]
    fn test_linked_persons_empty_after_phase_one() {
        let mut generator = PersonGenerator::new(pinned_profile(), 42).unwrap();
        for _ in 0..20 {
            assert!(generator.next_person().unwrap().person.linked_persons.is_empty());
        }
    }

    #[test]
    fn test_deterministic_generation() {
        let mut gen1 = PersonGenerator::new(pinned_profile(), 42).unwrap();
        let mut gen2 = PersonGenerator::new(pinned_profile(), 42).unwrap();
        for _ in 0..20 {
            let p1 = gen1.next_person().unwrap().person;
            let p2 = gen2.next_person().unwrap().person;
            assert_eq!(p1.id, p2.id);
            assert_eq!(p1.full_name, p2.full_name);
            assert_eq!(p1.date_of_birth, p2.date_of_birth);
            assert_eq!(p1.identifiers, p2.identifiers);
        }
    }

    #[test]
    fn test_bucket_distribution_converges_to_weights() {
        let profile = pinned_profile();
        let mut generator = PersonGenerator::new(profile.clone(), 7).unwrap();
        let n = 20_000;
        let mut counts: HashMap<String, u64> = HashMap::new();
        for _ in 0..n {
            let sp = generator.next_person().unwrap();
            *counts.entry(sp.bucket).or_default() += 1;
        }
        for bucket in profile.buckets.iter() {
            let observed = *counts.get(&bucket.name).unwrap_or(&0) as f64 / n as f64;
            assert!(
                (observed - bucket.weight).abs() < 0.02,
                "bucket '{}': observed {observed:.4}, expected {:.2}",
                bucket.name,
                bucket.weight
            );
        }
    }

    #[test]
    fn test_invalid_profile_rejected_at_construction() {
        let mut profile = pinned_profile();
        profile.buckets = BucketTable::new(vec![DobBucket::new(
            "bad",
            1.0,
            date(2000, 1, 1),
            date(2030, 1, 1),
        )]);
        assert!(matches!(
            PersonGenerator::new(profile, 42),
            Err(GeneratorError::Profile(_))
        ));
    }

    #[test]
    fn test_people_iterator() {
        let mut generator = PersonGenerator::new(pinned_profile(), 42).unwrap();
        let people: Vec<_> = generator.people(10).collect::<Result<_, _>>().unwrap();
        assert_eq!(people.len(), 10);
        assert_eq!(generator.current_index(), 10);
    }

    #[test]
    fn test_named_person_keeps_given_name() {
        let mut generator = PersonGenerator::new(pinned_profile(), 42).unwrap();
        let p = generator
            .next_named_person("José", "García", Gender::Male)
            .unwrap();
        assert_eq!(p.given_name, "José");
        assert_eq!(p.family_name, "García");
        assert_eq!(p.full_name, "José García");
        assert!(p.date_of_birth >= date(1900, 1, 1));
        assert!(p.date_of_birth <= date(2024, 12, 31));
    }
}
