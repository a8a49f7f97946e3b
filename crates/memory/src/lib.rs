//! Knowledge storage and retrieval for ragwindow.
//!
//! - [`chunker`]: sentence-aware document chunking
//! - [`similarity`]: lexical overlap scoring
//! - [`index`]: the append-only chunk store and budgeted retrieval packing
//! - [`corpus`]: JSON corpus loading

pub mod chunker;
pub mod corpus;
pub mod index;
pub mod similarity;

pub use chunker::{DEFAULT_CHUNK_SIZE, chunk_text, split_sentences};
pub use corpus::{load_corpus, parse_corpus};
pub use index::{KnowledgeIndex, MIN_FALLBACK_CHARS, RankedChunk, pack};
pub use similarity::similarity;
