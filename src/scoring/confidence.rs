//! How far a score can be trusted, independent of how high it is.

use crate::constants::{FULL_TRUST_TOKENS, MIN_LENGTH_FACTOR, MIN_SEMANTIC_CERTAINTY};

/// Short texts are ambiguous: trust grows linearly up to [`FULL_TRUST_TOKENS`] tokens on the
/// shorter side, floored at [`MIN_LENGTH_FACTOR`].
pub fn length_factor(guess_tokens: usize, reference_tokens: usize) -> f64 {
    let shorter = guess_tokens.min(reference_tokens) as f64;
    (shorter / FULL_TRUST_TOKENS).clamp(MIN_LENGTH_FACTOR, 1.0)
}

/// `1 - |s - 0.5| * 2`, floored at [`MIN_SEMANTIC_CERTAINTY`]: peaks at a midpoint
/// similarity and bottoms out at the floor once `s` is more than 0.25 away from it.
pub fn semantic_certainty(semantic_similarity: f64) -> f64 {
    (1.0 - (semantic_similarity - 0.5).abs() * 2.0).max(MIN_SEMANTIC_CERTAINTY)
}

/// Mean of [`length_factor`] and [`semantic_certainty`], rounded to three decimals.
pub fn estimate(guess_tokens: usize, reference_tokens: usize, semantic_similarity: f64) -> f64 {
    let confidence = (length_factor(guess_tokens, reference_tokens)
        + semantic_certainty(semantic_similarity))
        / 2.0;

    round3(confidence.clamp(0.0, 1.0))
}

pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
