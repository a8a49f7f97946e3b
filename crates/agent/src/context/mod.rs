//! Budgeted context window assembly.
//!
//! # Sections (in window order)
//!
//! | Section | Default limit | Source |
//! |---------|---------------|--------|
//! | 1. Instructions | 255 | Caller |
//! | 2. Goal | 1500 | Caller |
//! | 3. Memory | 55 | Session memory |
//! | 4. Retrieval | 550 | Knowledge index |
//! | 5. Tool Outputs | 855 | Caller |

pub mod assembler;
pub mod session_memory;
pub mod token;
pub mod truncate;
pub mod usage;

pub use assembler::{AssemblyRequest, ContextAssembler, format_context_window};
pub use session_memory::{MemoryItem, SessionMemory};
pub use token::estimate_tokens;
pub use truncate::truncate_with_ellipsis;
pub use usage::{BudgetUsage, SectionUsage, UsageLevel};
