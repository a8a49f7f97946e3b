//! Documents and the chunks derived from them.

use serde::{Deserialize, Serialize};

/// Free-form document metadata, copied verbatim onto every chunk.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// A caller-owned source document.
///
/// The id is not required to be unique, but it prefixes every chunk id
/// generated from the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

impl Document {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            metadata: Metadata::new(),
        }
    }

    /// Attach metadata to the document.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }
}

/// A sentence-aligned slice of exactly one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// `{document_id}_chunk_{index}`
    pub id: String,
    /// The chunk text, trimmed.
    pub content: String,
    /// Id of the document this chunk came from.
    pub source_doc: String,
    /// 0-based position within the source document's chunk sequence.
    pub index: usize,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

impl Chunk {
    /// Wrap chunk text produced from `document` at position `index`.
    pub fn from_document(document: &Document, index: usize, content: String) -> Self {
        Self {
            id: chunk_id(&document.id, index),
            content,
            source_doc: document.id.clone(),
            index,
            metadata: document.metadata.clone(),
        }
    }

    /// Length in characters.
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }
}

/// Generate the id of the `index`-th chunk of `document_id`.
pub fn chunk_id(document_id: &str, index: usize) -> String {
    format!("{document_id}_chunk_{index}")
}
