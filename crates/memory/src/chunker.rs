//! Sentence-aware chunking.
//!
//! Text is split into sentences at `.`, `!` or `?` followed by whitespace
//! (the punctuation stays with its sentence, the whitespace is dropped),
//! then sentences are packed greedily into chunks of at most
//! `max_chunk_size` characters. A single sentence longer than the limit is
//! emitted on its own rather than being cut.

use regex::Regex;
use std::sync::LazyLock;

/// Chunk size used when none is configured.
pub const DEFAULT_CHUNK_SIZE: usize = 500;

/// Sentence-ending punctuation followed by a (Unicode) whitespace run.
static SENTENCE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[.!?]\s+").expect("SENTENCE_BOUNDARY regex should compile")
});

/// Split `text` into sentences.
///
/// Empty pieces (trailing whitespace after the last sentence) are skipped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // The punctuation is a single ASCII byte.
        let end = boundary.start() + 1;
        sentences.push(&text[start..end]);
        start = boundary.end();
    }
    sentences.push(&text[start..]);

    sentences.retain(|s| !s.is_empty());
    sentences
}

/// Split `text` into sentence-aligned chunks of at most `max_chunk_size`
/// characters.
///
/// The buffer keeps a trailing space after each sentence; a sentence is
/// appended while `buffer + sentence` still fits, otherwise the buffer is
/// closed (trimmed) and the sentence opens the next one.
pub fn chunk_text(text: &str, max_chunk_size: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for sentence in split_sentences(text) {
        let sentence_len = sentence.chars().count();

        if current_len + sentence_len > max_chunk_size {
            flush(&mut chunks, &current);
            current.clear();
            current_len = 0;
        }

        current.push_str(sentence);
        current.push(' ');
        current_len += sentence_len + 1;
    }

    flush(&mut chunks, &current);
    chunks
}

fn flush(chunks: &mut Vec<String>, buffer: &str) {
    let trimmed = buffer.trim();
    if !trimmed.is_empty() {
        chunks.push(trimmed.to_string());
    }
}
