//! Context window assembly for ragwindow agents.
//!
//! Every call to the model gets a window of five sections, each held to a
//! hard character ceiling:
//!
//! 1. **Instructions** and **goal** from the caller, truncated with `...`
//! 2. **Memory** from the session's key/value facts
//! 3. **Retrieval** packed from the knowledge index for the current query
//! 4. **Tool outputs** from the caller, joined and truncated
//!
//! The assembler owns both the knowledge index and the session memory, so
//! ingestion (`&mut`) can never overlap retrieval (`&`).

pub mod context;

pub use context::{
    AssemblyRequest, BudgetUsage, ContextAssembler, SectionUsage, SessionMemory, UsageLevel,
    estimate_tokens, format_context_window, truncate_with_ellipsis,
};
