//! Word tokenization shared by the lexical matcher, the confidence estimator and the stub
//! embedder.

use std::collections::BTreeSet;

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Yields every maximal alphanumeric/underscore run of the lowercased `text`, in order.
///
/// Lowercasing happens before splitting, so a lowercase mapping that emits a combining mark
/// (`İ` becomes `i` + U+0307) splits the word there. Duplicates are kept; use [`token_set`]
/// for set semantics.
pub fn word_tokens(text: &str) -> impl Iterator<Item = String> {
    let lowered = text.to_lowercase();
    lowered
        .split(|c: char| !is_word_char(c))
        .filter(|run| !run.is_empty())
        .map(str::to_string)
        .collect::<Vec<_>>()
        .into_iter()
}

/// Distinct lowercase tokens of `text`, ordered lexicographically.
pub fn token_set(text: &str) -> BTreeSet<String> {
    word_tokens(text).collect()
}

/// Number of word tokens in `text`, counting repeats.
pub fn token_count(text: &str) -> usize {
    word_tokens(text).count()
}
