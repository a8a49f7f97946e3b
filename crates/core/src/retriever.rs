//! Retriever trait — packs relevant knowledge into a character budget.

pub use crate::sentinel::{NO_CONTENT_WITHIN_BUDGET, NO_DOCUMENTS};

/// Produces the retrieval section of a context window.
///
/// Implementations must always return a string: degenerate inputs map to
/// the retrieval sentinels rather than errors. Packed content must never be
/// longer than `max_chars` characters.
pub trait Retriever {
    /// Pack the chunks most relevant to `query` into at most `max_chars`
    /// characters.
    fn retrieve(&self, query: &str, max_chars: usize) -> String;
}

impl<R: Retriever + ?Sized> Retriever for &R {
    fn retrieve(&self, query: &str, max_chars: usize) -> String {
        (**self).retrieve(query, max_chars)
    }
}
