//! Fixed strings that stand in for a section with nothing to show.
//!
//! Every section must be able to hold its longest sentinel, so these also
//! set the floor for configured limits (see [`Section::min_limit`]).
//!
//! [`Section::min_limit`]: crate::budget::Section::min_limit

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";

/// Length of [`ELLIPSIS`] in characters.
pub const ELLIPSIS_CHARS: usize = 3;

/// Retrieval against an empty store.
pub const NO_DOCUMENTS: &str = "[No relevant documents found]";

/// Retrieval where no chunk or sentence fits the budget.
pub const NO_CONTENT_WITHIN_BUDGET: &str = "[No content within budget]";

/// Session memory with no entries.
pub const NO_SESSION_MEMORY: &str = "[No session memory]";

/// Session memory where not even the first entry fits.
pub const MEMORY_FULL: &str = "[Memory full]";

/// No tool produced output.
pub const NO_TOOL_OUTPUTS: &str = "[No tool outputs]";
