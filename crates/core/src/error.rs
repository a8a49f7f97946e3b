//! Error types for the ragwindow domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.

use thiserror::Error;

use crate::budget::Section;

/// The top-level error type for all ragwindow operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Budget errors ---
    #[error("Budget error: {0}")]
    Budget(#[from] BudgetError),

    // --- Corpus errors ---
    #[error("Corpus error: {0}")]
    Corpus(#[from] CorpusError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

/// A context section broke its character ceiling.
///
/// Assembly truncates every free-text section before validation, so this
/// only fires when a section producer ignored its budget.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BudgetError {
    #[error("{section} exceeds {limit} char limit ({len} chars)")]
    SectionTooLong {
        section: Section,
        len: usize,
        limit: usize,
    },
}

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("Failed to read corpus at {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("Malformed corpus: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_error_displays_correctly() {
        let err = Error::Budget(BudgetError::SectionTooLong {
            section: Section::Memory,
            len: 60,
            limit: 55,
        });
        let msg = err.to_string();
        assert!(msg.contains("memory"));
        assert!(msg.contains("55"));
        assert!(msg.contains("60"));
    }

    #[test]
    fn corpus_error_displays_path() {
        let err = Error::Corpus(CorpusError::Unreadable {
            path: "data/missing.json".into(),
            reason: "No such file or directory".into(),
        });
        assert!(err.to_string().contains("data/missing.json"));
    }
}
