//! Deterministic rank scores for selection tie-breaking.
//!
//! Selection ties are broken by a pure hash over agent, week, and slot
//! context rather than a random-number generator, so regenerating a
//! week reproduces the same order without seeding any state. The hash
//! is DJB2 with every step truncated to 32-bit signed arithmetic,
//! keeping scores identical across platforms and runs.

/// DJB2 string hash reduced to a non-negative 32-bit value.
///
/// `hash = hash * 33 + byte`, wrapping at 32-bit signed width, then the
/// absolute value of the final word.
pub fn djb2(input: &str) -> u32 {
    let mut hash: i32 = 5381;
    for byte in input.bytes() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_add(hash)
            .wrapping_add(byte as i32);
    }
    hash.unsigned_abs()
}

/// Tie-break score for an agent in a given week and slot context.
///
/// `week_key` is the ISO week-start date; `context` encodes the shift id
/// and day-of-week (e.g. `"call-9-18:3"`), so different slots on the
/// same day order independently but reproducibly.
pub fn rank(agent_id: &str, week_key: &str, context: &str) -> u32 {
    djb2(&format!("{agent_id}|{week_key}|{context}"))
}
