//! Phase-2 cross-reference linking over a sealed universe.
//!
//! Linking is a two-phase protocol: [`UniverseBuilder`] collects every
//! Phase-1 record, and [`UniverseBuilder::seal`] is the only way to obtain a
//! [`Universe`] — the type [`link_universe`] operates on. Running the linking
//! pass against a partially-built record table is therefore unrepresentable:
//! every id is resolvable before the first link is drawn.

use crate::values;
use person_core::{LinkEntry, LinkRole, PersonRecord};
use rand::Rng;
use std::collections::HashMap;
use tracing::debug;

/// Bounded draws per link before giving up on finding a fresh target.
/// Only ever exhausted in universes barely larger than the link bound.
const LINK_RETRY_LIMIT: usize = 16;

/// Phase-1 accumulator. Push every record, then [`seal`](Self::seal) the
/// universe to make it linkable.
#[derive(Debug, Default)]
pub struct UniverseBuilder {
    people: Vec<PersonRecord>,
}

impl UniverseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            people: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, person: PersonRecord) {
        self.people.push(person);
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Close the universe. After sealing, no record can be added and every
    /// id is resolvable, which is what Phase 2 requires.
    pub fn seal(self) -> Universe {
        let by_id = self
            .people
            .iter()
            .enumerate()
            .map(|(idx, p)| (p.id.clone(), idx))
            .collect();
        Universe {
            people: self.people,
            by_id,
        }
    }
}

/// A closed Phase-1 universe, indexed by record id. Creation order is
/// preserved; it is also the output order.
#[derive(Debug)]
pub struct Universe {
    people: Vec<PersonRecord>,
    by_id: HashMap<String, usize>,
}

impl Universe {
    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Resolve a record by id.
    pub fn get(&self, id: &str) -> Option<&PersonRecord> {
        self.by_id.get(id).map(|&idx| &self.people[idx])
    }

    /// All records in creation order.
    pub fn people(&self) -> &[PersonRecord] {
        &self.people
    }

    /// Consume the universe, yielding records in creation order.
    pub fn into_people(self) -> Vec<PersonRecord> {
        self.people
    }
}

/// Phase 2: append a uniform `[0, max_links]` number of links to every
/// record in the sealed universe.
///
/// Targets are drawn uniformly from the universe, retrying (bounded) on the
/// owner itself or an already-linked target; duplicates across different
/// owners are fine. Each link snapshots the target's Phase-1 `full_name`
/// into `denormalized_display_name`. A universe of size 1 forces zero links
/// regardless of `max_links` — a documented degenerate case, not an error.
pub fn link_universe<R: Rng>(universe: &mut Universe, rng: &mut R, max_links: u32) {
    let n = universe.people.len();
    if n < 2 {
        if n == 1 && max_links > 0 {
            debug!("universe of size 1: forcing zero links");
        }
        return;
    }

    // Snapshot ids and display names before any mutation, so every
    // denormalized name reflects the sealed Phase-1 universe.
    let display: Vec<(String, String)> = universe
        .people
        .iter()
        .map(|p| (p.id.clone(), p.full_name.clone()))
        .collect();

    for owner_idx in 0..n {
        let want = rng.gen_range(0..=max_links) as usize;
        let mut chosen: Vec<usize> = Vec::with_capacity(want);
        'links: for _ in 0..want {
            for _ in 0..LINK_RETRY_LIMIT {
                let target = rng.gen_range(0..n);
                if target != owner_idx && !chosen.contains(&target) {
                    chosen.push(target);
                    continue 'links;
                }
            }
            // Retries exhausted: keep the links drawn so far.
            break;
        }

        for target in chosen {
            let role = *values::pick(rng, &LinkRole::ALL);
            let (target_id, display_name) = &display[target];
            universe.people[owner_idx].linked_persons.push(LinkEntry {
                target_id: target_id.clone(),
                role,
                denormalized_display_name: display_name.clone(),
            });
        }
    }
}
