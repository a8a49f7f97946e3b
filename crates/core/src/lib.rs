//! # ragwindow Core
//!
//! Domain types, traits, and error definitions for the ragwindow context
//! assembler. This crate has **no framework dependencies**: it defines the
//! domain model that the other crates implement against.
//!
//! - [`document`]: caller-owned documents and the chunks derived from them
//! - [`budget`]: the five-section context budget and its character ceilings
//! - [`retriever`]: the seam between the assembler and knowledge retrieval
//! - [`sentinel`]: placeholder texts for empty sections

pub mod budget;
pub mod document;
pub mod error;
pub mod retriever;
pub mod sentinel;

// Re-export key types at crate root for ergonomics
pub use budget::{ContextBudget, Section, SectionLimits};
pub use document::{Chunk, Document, Metadata};
pub use error::{BudgetError, CorpusError, Error, Result};
pub use retriever::Retriever;
