//! Deterministic natural-language explanation of a score.

use crate::constants::{MAX_JUSTIFIED_MISSING, MAX_JUSTIFIED_SHARED, UNCERTAINTY_NOTE_THRESHOLD};

/// Appended when confidence falls below [`UNCERTAINTY_NOTE_THRESHOLD`].
pub const UNCERTAINTY_NOTE: &str = "Note: This score has moderate uncertainty.";

/// Headline for a 0-100 score.
pub fn score_tier(score: u8) -> &'static str {
    match score {
        90..=u8::MAX => "Excellent match!",
        75..=89 => "Very close guess.",
        60..=74 => "Good attempt.",
        40..=59 => "Partially correct.",
        _ => "Quite different from the actual twist.",
    }
}

/// Conceptual closeness phrase for the (clamped, unrounded) semantic similarity.
pub fn semantic_tier(semantic_similarity: f64) -> &'static str {
    if semantic_similarity > 0.8 {
        "Your guess captures the core meaning very well."
    } else if semantic_similarity > 0.6 {
        "Your guess shares significant thematic elements."
    } else if semantic_similarity > 0.4 {
        "Your guess has some conceptual overlap."
    } else {
        "Your guess differs substantially in meaning."
    }
}

fn lexical_phrase(shared: &[String]) -> String {
    match shared.len() {
        0 => "Few matching keywords were found.".to_string(),
        n if n > MAX_JUSTIFIED_SHARED => format!(
            "You used many key terms: {}.",
            shared[..MAX_JUSTIFIED_SHARED].join(", ")
        ),
        _ => format!("You identified some keywords: {}.", shared.join(", ")),
    }
}

fn missing_phrase(missing: &[String]) -> Option<String> {
    if missing.is_empty() {
        return None;
    }

    let named = &missing[..missing.len().min(MAX_JUSTIFIED_MISSING)];
    Some(format!("Important missing elements: {}.", named.join(", ")))
}

/// Builds the explanation paragraph.
///
/// `shared` and `missing` are expected in lexicographic order; the first entries are the
/// ones named. Clauses are joined by single spaces and absent clauses leave no gap.
pub fn justify(
    score: u8,
    semantic_similarity: f64,
    shared: &[String],
    missing: &[String],
    confidence: f64,
) -> String {
    let mut parts: Vec<String> = vec![
        score_tier(score).to_string(),
        semantic_tier(semantic_similarity).to_string(),
        lexical_phrase(shared),
    ];

    if let Some(clause) = missing_phrase(missing) {
        parts.push(clause);
    }

    if confidence < UNCERTAINTY_NOTE_THRESHOLD {
        parts.push(UNCERTAINTY_NOTE.to_string());
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_score_tier_boundaries() {
        assert_eq!(score_tier(100), "Excellent match!");
        assert_eq!(score_tier(90), "Excellent match!");
        assert_eq!(score_tier(89), "Very close guess.");
        assert_eq!(score_tier(75), "Very close guess.");
        assert_eq!(score_tier(74), "Good attempt.");
        assert_eq!(score_tier(60), "Good attempt.");
        assert_eq!(score_tier(59), "Partially correct.");
        assert_eq!(score_tier(40), "Partially correct.");
        assert_eq!(score_tier(39), "Quite different from the actual twist.");
        assert_eq!(score_tier(0), "Quite different from the actual twist.");
    }

    #[test]
    fn test_semantic_tier_is_strictly_greater_than() {
        assert_eq!(semantic_tier(0.81), "Your guess captures the core meaning very well.");
        assert_eq!(semantic_tier(0.8), "Your guess shares significant thematic elements.");
        assert_eq!(semantic_tier(0.6), "Your guess has some conceptual overlap.");
        assert_eq!(semantic_tier(0.4), "Your guess differs substantially in meaning.");
    }

    #[test]
    fn test_full_paragraph() {
        let text = justify(
            87,
            0.9,
            &words(&["detective", "the"]),
            &words(&["committed", "murder"]),
            0.8,
        );
        assert_eq!(
            text,
            "Very close guess. Your guess captures the core meaning very well. \
             You identified some keywords: detective, the. \
             Important missing elements: committed, murder."
        );
    }

    #[test]
    fn test_many_shared_lists_first_five() {
        let shared = words(&["a", "b", "c", "d", "e", "f", "g"]);
        let text = justify(95, 0.95, &shared, &[], 0.9);
        assert!(text.contains("You used many key terms: a, b, c, d, e."));
        assert!(!text.contains(", f"));
        assert!(!text.contains("missing"));
    }

    #[test]
    fn test_exactly_five_shared_uses_keyword_phrase() {
        let shared = words(&["a", "b", "c", "d", "e"]);
        let text = justify(95, 0.95, &shared, &[], 0.9);
        assert!(text.contains("You identified some keywords: a, b, c, d, e."));
    }

    #[test]
    fn test_missing_capped_at_three() {
        let missing = words(&["alpha", "beta", "gamma", "delta"]);
        let text = justify(10, 0.1, &[], &missing, 0.9);
        assert!(text.contains("Few matching keywords were found."));
        assert!(text.ends_with("Important missing elements: alpha, beta, gamma."));
    }

    #[test]
    fn test_uncertainty_note_below_threshold_only() {
        assert!(justify(50, 0.5, &[], &[], 0.599).ends_with(UNCERTAINTY_NOTE));
        assert!(!justify(50, 0.5, &[], &[], 0.6).contains("Note:"));
    }

    #[test]
    fn test_no_double_spaces() {
        let cases = [
            justify(0, 0.0, &[], &[], 0.0),
            justify(100, 1.0, &words(&["x"]), &[], 1.0),
            justify(45, 0.45, &[], &words(&["y"]), 0.5),
        ];
        for text in cases {
            assert!(!text.contains("  "), "double space in {text:?}");
            assert_eq!(text.trim(), text);
        }
    }
}
