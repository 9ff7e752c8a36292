//! Value-drawing primitives.
//!
//! Every function takes the caller's RNG, so a seeded `StdRng` at the top of
//! the pipeline makes the whole run reproducible.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::Rng;
use uuid::Uuid;

/// Uppercase alphanumeric alphabet used for identifier codes.
pub const UPPER_ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Draw a date uniformly from the inclusive range `[from, to]`.
///
/// A collapsed or inverted range yields `from`; range validity is the
/// caller's concern (profiles are validated before generation).
pub fn uniform_date<R: Rng>(rng: &mut R, from: NaiveDate, to: NaiveDate) -> NaiveDate {
    if from >= to {
        return from;
    }
    let span = (to - from).num_days();
    from + Duration::days(rng.gen_range(0..=span))
}

/// Draw a timestamp uniformly from the trailing `within_days` window ending
/// at the current instant.
pub fn recent_datetime<R: Rng>(rng: &mut R, within_days: i64) -> DateTime<Utc> {
    let now = Utc::now();
    if within_days <= 0 {
        return now;
    }
    let span_secs = within_days * 86_400;
    now - Duration::seconds(rng.gen_range(0..span_secs))
}

/// Generate a random string of exactly `length` characters from `alphabet`.
pub fn random_string<R: Rng>(rng: &mut R, alphabet: &[u8], length: usize) -> String {
    (0..length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect()
}

/// Generate an opaque unique token: a UUIDv4 in text form, built from RNG
/// bytes so tokens are reproducible under a seeded RNG.
pub fn unique_token<R: Rng>(rng: &mut R) -> String {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);

    // Set version (4) and variant (RFC 4122) bits
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    Uuid::from_bytes(bytes).to_string()
}

/// Uniform pick from a slice.
///
/// Panics if `items` is empty; pools in this crate are static and non-empty.
pub fn pick<'a, T, R: Rng>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}
