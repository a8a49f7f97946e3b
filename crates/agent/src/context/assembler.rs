//! Context assembly — five budgeted sections rendered into one window.
//!
//! | Section | Source | Over-limit strategy |
//! |---------|--------|---------------------|
//! | Instructions | caller | truncated with `...` |
//! | Goal | caller | truncated with `...` |
//! | Memory | [`SessionMemory`] | leading pairs that fit |
//! | Retrieval | [`Retriever`] | packed to the retrieval budget |
//! | Tool outputs | caller, joined with ` | ` | truncated with `...` |
//!
//! Assembly is deterministic: identical inputs always produce identical
//! windows. The result is a validated [`ContextBudget`]; a validation
//! failure here means a component ignored its budget.

use ragwindow_config::AppConfig;
use ragwindow_core::sentinel::NO_TOOL_OUTPUTS;
use ragwindow_core::{BudgetError, ContextBudget, Document, Retriever, Section, SectionLimits};
use ragwindow_memory::KnowledgeIndex;
use tracing::{debug, error, info};

use crate::context::session_memory::SessionMemory;
use crate::context::truncate::truncate_with_ellipsis;
use crate::context::usage::BudgetUsage;

/// Separator between tool output lines.
pub const TOOL_OUTPUT_SEPARATOR: &str = " | ";

/// Separator between rendered sections.
pub const SECTION_SEPARATOR: &str = "\n\n";

// ── Types ─────────────────────────────────────────────────────────────────

/// Caller-supplied inputs for one assembly.
#[derive(Debug, Clone, Copy)]
pub struct AssemblyRequest<'a> {
    pub instructions: &'a str,
    pub goal: &'a str,
    /// Query handed to the retriever.
    pub query: &'a str,
    /// One line per tool result, in call order.
    pub tool_outputs: &'a [String],
}

// ── Assembler ─────────────────────────────────────────────────────────────

/// Owns the retriever and the session memory for a conversation.
pub struct ContextAssembler<R: Retriever = KnowledgeIndex> {
    retriever: R,
    session: SessionMemory,
    limits: SectionLimits,
    retrieval_budget: usize,
}

impl<R: Retriever> ContextAssembler<R> {
    /// Create an assembler with default limits around `retriever`.
    pub fn new(retriever: R) -> Self {
        let limits = SectionLimits::default();
        Self {
            retriever,
            session: SessionMemory::new(),
            retrieval_budget: limits.retrieval,
            limits,
        }
    }

    /// Replace the section limits.
    ///
    /// The retrieval budget is clamped so it never exceeds the new
    /// retrieval ceiling.
    pub fn with_limits(mut self, limits: SectionLimits) -> Self {
        self.limits = limits;
        self.retrieval_budget = self.retrieval_budget.min(limits.retrieval);
        self
    }

    /// Character budget handed to the retriever, capped at the retrieval ceiling.
    pub fn with_retrieval_budget(mut self, max_chars: usize) -> Self {
        self.retrieval_budget = max_chars.min(self.limits.retrieval);
        self
    }

    pub fn retriever(&self) -> &R {
        &self.retriever
    }

    pub fn limits(&self) -> &SectionLimits {
        &self.limits
    }

    pub fn retrieval_budget(&self) -> usize {
        self.retrieval_budget
    }

    /// Record a session fact. Existing keys keep their position.
    pub fn update_memory(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.session.update(key, value);
    }

    pub fn session_memory(&self) -> &SessionMemory {
        &self.session
    }

    /// The memory section as it would appear in the next window.
    pub fn memory_string(&self) -> String {
        fit_sentinel(self.session.render(self.limits.memory), Section::Memory, &self.limits)
    }

    /// Build every section and validate the result.
    pub fn assemble_context(
        &self,
        request: &AssemblyRequest<'_>,
    ) -> Result<ContextBudget, BudgetError> {
        let instructions = truncate_with_ellipsis(request.instructions, self.limits.instructions);
        let goal = truncate_with_ellipsis(request.goal, self.limits.goal);
        let memory = self.memory_string();
        let retrieval = fit_sentinel(
            self.retriever.retrieve(request.query, self.retrieval_budget),
            Section::Retrieval,
            &self.limits,
        );
        let tool_outputs = self.render_tool_outputs(request.tool_outputs);

        debug!(
            instructions_chars = instructions.chars().count(),
            goal_chars = goal.chars().count(),
            memory_chars = memory.chars().count(),
            retrieval_chars = retrieval.chars().count(),
            tool_output_chars = tool_outputs.chars().count(),
            "Sections rendered"
        );

        let budget = ContextBudget::new(
            instructions,
            goal,
            memory,
            retrieval,
            tool_outputs,
            self.limits,
        )
        .inspect_err(|e| error!(error = %e, "Assembled context violates its budget"))?;

        info!(
            query = request.query,
            retrieval_budget = self.retrieval_budget,
            tool_outputs = request.tool_outputs.len(),
            "Context assembled"
        );
        Ok(budget)
    }

    /// Usage of `budget` against the limits it was validated with.
    pub fn budget_usage(&self, budget: &ContextBudget) -> BudgetUsage {
        BudgetUsage::measure(budget, &format_context_window(budget))
    }

    // ── Private section renderers ─────────────────────────────────────────

    fn render_tool_outputs(&self, outputs: &[String]) -> String {
        if outputs.is_empty() {
            return fit_sentinel(NO_TOOL_OUTPUTS.to_string(), Section::ToolOutputs, &self.limits);
        }
        let joined = outputs.join(TOOL_OUTPUT_SEPARATOR);
        truncate_with_ellipsis(&joined, self.limits.tool_outputs)
    }
}

impl ContextAssembler<KnowledgeIndex> {
    /// Create an assembler wired from configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(KnowledgeIndex::new(config.chunking.chunk_size))
            .with_limits(config.budget)
            .with_retrieval_budget(config.retrieval.max_chars)
    }

    /// Chunk and append `documents` to the knowledge index.
    pub fn add_documents(&mut self, documents: &[Document]) {
        self.retriever.add_documents(documents);
    }
}

impl Default for ContextAssembler<KnowledgeIndex> {
    fn default() -> Self {
        Self::new(KnowledgeIndex::default())
    }
}

/// Shorten `text` to the section limit when it is one of the section's
/// sentinels. Real content is left alone so budget violations still surface.
fn fit_sentinel(text: String, section: Section, limits: &SectionLimits) -> String {
    if section.sentinels().contains(&text.as_str()) {
        truncate_with_ellipsis(&text, limits.get(section))
    } else {
        text
    }
}

/// Render `budget` as `LABEL: content` sections separated by a blank line.
pub fn format_context_window(budget: &ContextBudget) -> String {
    Section::ALL
        .iter()
        .map(|&section| format!("{}: {}", section.label(), budget.get(section)))
        .collect::<Vec<_>>()
        .join(SECTION_SEPARATOR)
}
