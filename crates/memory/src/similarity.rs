//! Lexical overlap scoring.
//!
//! The score is the fraction of distinct query words that appear as whole
//! tokens in the candidate text. It is deliberately asymmetric: long chunks
//! and extra vocabulary are never penalized, only missing query words are.

use std::collections::HashSet;

/// Lower-cased, whitespace-separated distinct words of `text`.
pub fn word_set(text: &str) -> HashSet<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// Overlap score of pre-tokenized query words against `text`.
///
/// Returns 0.0 for an empty query.
pub fn overlap_score(query_words: &HashSet<String>, text: &str) -> f64 {
    if query_words.is_empty() {
        return 0.0;
    }

    let text_words = word_set(text);
    let matched = query_words.intersection(&text_words).count();
    matched as f64 / query_words.len() as f64
}

/// Similarity of `text` to `query`, in `[0.0, 1.0]`.
pub fn similarity(query: &str, text: &str) -> f64 {
    overlap_score(&word_set(query), text)
}
