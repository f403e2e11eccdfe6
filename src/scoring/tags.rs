//! Tag overlap between a guess and its reference.

use std::collections::HashSet;

use crate::constants::NEUTRAL_TAG_MATCH;

fn lowercase_set<S: AsRef<str>>(tags: &[S]) -> HashSet<String> {
    tags.iter().map(|tag| tag.as_ref().to_lowercase()).collect()
}

/// Fraction of reference tags also present in the guess tags (case-insensitive).
///
/// A reference without tags yields [`NEUTRAL_TAG_MATCH`], so missing ground truth neither
/// rewards nor penalizes the guess.
pub fn tag_match<G, R>(guess_tags: &[G], reference_tags: &[R]) -> f64
where
    G: AsRef<str>,
    R: AsRef<str>,
{
    let reference = lowercase_set(reference_tags);
    if reference.is_empty() {
        return NEUTRAL_TAG_MATCH;
    }

    let guess = lowercase_set(guess_tags);
    let matched = reference.intersection(&guess).count();

    matched as f64 / reference.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: &[&str] = &[];

    #[test]
    fn test_neutral_when_reference_has_no_tags() {
        assert_eq!(tag_match(NONE, NONE), 0.5);
        assert_eq!(tag_match(&["betrayal", "ghost"], NONE), 0.5);
    }

    #[test]
    fn test_partial_match() {
        let score = tag_match(
            &["unreliable narrator"],
            &["unreliable narrator", "deception"],
        );
        assert_eq!(score, 0.5);
    }

    #[test]
    fn test_case_insensitive_and_deduplicated() {
        let score = tag_match(&["GHOST", "ghost"], &["Ghost", "ghost", "Twins"]);
        assert_eq!(score, 0.5);
    }

    #[test]
    fn test_empty_guess_tags_score_zero() {
        assert_eq!(tag_match(NONE, &["ghost"]), 0.0);
    }

    #[test]
    fn test_extra_guess_tags_do_not_hurt() {
        assert_eq!(tag_match(&["ghost", "time loop", "heist"], &["ghost"]), 1.0);
    }
}
