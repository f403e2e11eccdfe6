//! Token-set overlap between a guess and its reference.

use std::collections::BTreeSet;

use super::tokenize::token_set;

/// Overlap of the guess's tokens with the reference's tokens.
///
/// Sets are ordered, so iteration is lexicographic ascending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LexicalBreakdown {
    /// `|shared| / |reference tokens|`, or `0.0` for an empty reference.
    pub overlap: f64,
    /// Reference tokens the guess also used.
    pub shared_tokens: BTreeSet<String>,
    /// Reference tokens the guess did not use.
    pub missing_tokens: BTreeSet<String>,
}

impl LexicalBreakdown {
    /// Compares `guess` against `reference`.
    pub fn compute(guess: &str, reference: &str) -> Self {
        let reference_tokens = token_set(reference);
        if reference_tokens.is_empty() {
            return Self::default();
        }

        let guess_tokens = token_set(guess);
        let (shared_tokens, missing_tokens): (BTreeSet<String>, BTreeSet<String>) =
            reference_tokens
                .into_iter()
                .partition(|token| guess_tokens.contains(token));

        let overlap =
            shared_tokens.len() as f64 / (shared_tokens.len() + missing_tokens.len()) as f64;

        Self {
            overlap,
            shared_tokens,
            missing_tokens,
        }
    }

    /// First `limit` shared tokens in lexicographic order.
    pub fn shared_head(&self, limit: usize) -> Vec<String> {
        self.shared_tokens.iter().take(limit).cloned().collect()
    }

    /// First `limit` missing tokens in lexicographic order.
    pub fn missing_head(&self, limit: usize) -> Vec<String> {
        self.missing_tokens.iter().take(limit).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detective_overlap() {
        let lex = LexicalBreakdown::compute(
            "The detective was the killer",
            "The detective committed the murder",
        );

        // reference tokens: committed, detective, murder, the
        assert!((lex.overlap - 0.5).abs() < 1e-12);
        assert_eq!(
            lex.shared_tokens.iter().collect::<Vec<_>>(),
            vec!["detective", "the"]
        );
        assert_eq!(
            lex.missing_tokens.iter().collect::<Vec<_>>(),
            vec!["committed", "murder"]
        );
    }

    #[test]
    fn test_empty_reference_is_zero_with_empty_sets() {
        let lex = LexicalBreakdown::compute("anything at all", "");
        assert_eq!(lex.overlap, 0.0);
        assert!(lex.shared_tokens.is_empty());
        assert!(lex.missing_tokens.is_empty());

        let lex = LexicalBreakdown::compute("anything", "?!");
        assert_eq!(lex, LexicalBreakdown::default());
    }

    #[test]
    fn test_empty_guess_misses_everything() {
        let lex = LexicalBreakdown::compute("", "The twin did it");
        assert_eq!(lex.overlap, 0.0);
        assert!(lex.shared_tokens.is_empty());
        assert_eq!(lex.missing_tokens.len(), 4);
    }

    #[test]
    fn test_case_insensitive_full_overlap() {
        let lex = LexicalBreakdown::compute("THE TWIN DID IT", "the twin did it");
        assert_eq!(lex.overlap, 1.0);
        assert!(lex.missing_tokens.is_empty());
    }

    #[test]
    fn test_extra_guess_tokens_do_not_dilute_overlap() {
        let lex = LexicalBreakdown::compute(
            "honestly I think the twin did it in the library",
            "the twin did it",
        );
        assert_eq!(lex.overlap, 1.0);
    }

    #[test]
    fn test_heads_truncate_in_order() {
        let reference = "a b c d e f g h i j k l";
        let lex = LexicalBreakdown::compute(reference, reference);
        assert_eq!(lex.shared_tokens.len(), 12);

        let head = lex.shared_head(10);
        assert_eq!(head.len(), 10);
        assert_eq!(head.first().map(String::as_str), Some("a"));
        assert_eq!(head.last().map(String::as_str), Some("j"));
        assert!(lex.missing_head(10).is_empty());
    }
}
