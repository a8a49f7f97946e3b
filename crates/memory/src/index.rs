//! Knowledge index — the in-memory chunk store and retrieval packer.
//!
//! Ingestion is append-only: chunks keep ingestion order for the lifetime
//! of the index. Retrieval scans every chunk, ranks by lexical overlap
//! (stable, so store order breaks ties) and packs greedily:
//!
//! 1. Whole chunks are appended while `packed + chunk + 1` fits.
//! 2. The first chunk that does not fit is split into sentences, which are
//!    appended while they fit, provided more than 50 characters remain.
//! 3. Packing stops at that first overflow; later candidates are never
//!    considered, even if they would fit.

use ragwindow_core::document::{Chunk, Document};
use ragwindow_core::retriever::{NO_CONTENT_WITHIN_BUDGET, NO_DOCUMENTS, Retriever};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::chunker::{DEFAULT_CHUNK_SIZE, chunk_text, split_sentences};
use crate::similarity::{overlap_score, word_set};

/// Sentence fallback only runs when more than this many characters remain.
pub const MIN_FALLBACK_CHARS: usize = 50;

/// A chunk paired with its similarity to a query.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RankedChunk<'a> {
    pub score: f64,
    pub chunk: &'a Chunk,
}

/// Ordered, append-only chunk store.
#[derive(Debug, Clone)]
pub struct KnowledgeIndex {
    chunks: Vec<Chunk>,
    chunk_size: usize,
}

impl Default for KnowledgeIndex {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE)
    }
}

impl KnowledgeIndex {
    /// Create an empty index that chunks documents to `chunk_size` characters.
    pub fn new(chunk_size: usize) -> Self {
        Self {
            chunks: Vec::new(),
            chunk_size,
        }
    }

    /// Chunk and append `documents`, in order.
    pub fn add_documents(&mut self, documents: &[Document]) {
        let before = self.chunks.len();

        for document in documents {
            let pieces = chunk_text(&document.content, self.chunk_size);
            debug!(document = %document.id, chunks = pieces.len(), "Chunked document");

            self.chunks.extend(
                pieces
                    .into_iter()
                    .enumerate()
                    .map(|(index, content)| Chunk::from_document(document, index, content)),
            );
        }

        info!(
            documents = documents.len(),
            chunks_added = self.chunks.len() - before,
            total_chunks = self.chunks.len(),
            "Documents ingested"
        );
    }

    /// All chunks in ingestion order.
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Score every chunk against `query`, highest first.
    ///
    /// Equal scores keep ingestion order.
    pub fn rank(&self, query: &str) -> Vec<RankedChunk<'_>> {
        let query_words = word_set(query);

        let mut ranked: Vec<RankedChunk<'_>> = self
            .chunks
            .iter()
            .map(|chunk| RankedChunk {
                score: overlap_score(&query_words, &chunk.content),
                chunk,
            })
            .collect();

        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }
}

impl Retriever for KnowledgeIndex {
    fn retrieve(&self, query: &str, max_chars: usize) -> String {
        if self.chunks.is_empty() {
            warn!("Retrieval against an empty index");
            return NO_DOCUMENTS.to_string();
        }

        let ranked = self.rank(query);
        pack(&ranked, max_chars)
    }
}

/// Greedily pack ranked chunks into at most `max_chars` characters.
pub fn pack(ranked: &[RankedChunk<'_>], max_chars: usize) -> String {
    let mut packed = String::new();
    let mut used = 0;
    let mut whole_chunks = 0;
    let mut fallback_sentences = 0;

    for candidate in ranked {
        let content = &candidate.chunk.content;
        let len = content.chars().count();

        if used + len + 1 <= max_chars {
            packed.push_str(content);
            packed.push(' ');
            used += len + 1;
            whole_chunks += 1;
            continue;
        }

        let remaining = max_chars.saturating_sub(used);
        if remaining > MIN_FALLBACK_CHARS {
            for sentence in split_sentences(content) {
                let sentence_len = sentence.chars().count();
                if used + sentence_len > max_chars {
                    break;
                }
                packed.push_str(sentence);
                packed.push(' ');
                used += sentence_len + 1;
                fallback_sentences += 1;
            }
        }

        debug!(
            chunk = %candidate.chunk.id,
            remaining,
            fallback_sentences,
            "Chunk overflowed budget, packing stopped"
        );
        break;
    }

    let packed = packed.trim();
    if packed.is_empty() {
        warn!(max_chars, "No content fits the retrieval budget");
        return NO_CONTENT_WITHIN_BUDGET.to_string();
    }

    info!(
        whole_chunks,
        fallback_sentences,
        chars = packed.chars().count(),
        max_chars,
        "Retrieval packed"
    );
    packed.to_string()
}
