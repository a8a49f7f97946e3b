//! Context budget — five sections, each with a hard character ceiling.
//!
//! | Section | Default limit (chars) |
//! |---------|-----------------------|
//! | Instructions | 255 |
//! | Goal | 1500 |
//! | Memory | 55 |
//! | Retrieval | 550 |
//! | Tool outputs | 855 |
//!
//! A [`ContextBudget`] can only be constructed when every section fits its
//! limit, so holding one is proof the invariant holds.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::BudgetError;
use crate::sentinel::{
    ELLIPSIS_CHARS, MEMORY_FULL, NO_CONTENT_WITHIN_BUDGET, NO_DOCUMENTS, NO_SESSION_MEMORY,
    NO_TOOL_OUTPUTS,
};

/// One of the five context window sections, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Instructions,
    Goal,
    Memory,
    Retrieval,
    ToolOutputs,
}

impl Section {
    /// All sections in the order they appear in the context window.
    pub const ALL: [Section; 5] = [
        Section::Instructions,
        Section::Goal,
        Section::Memory,
        Section::Retrieval,
        Section::ToolOutputs,
    ];

    /// Machine name (`tool_outputs`).
    pub fn name(self) -> &'static str {
        match self {
            Section::Instructions => "instructions",
            Section::Goal => "goal",
            Section::Memory => "memory",
            Section::Retrieval => "retrieval",
            Section::ToolOutputs => "tool_outputs",
        }
    }

    /// Label used in the rendered context window (`TOOL_OUTPUTS`).
    pub fn label(self) -> &'static str {
        match self {
            Section::Instructions => "INSTRUCTIONS",
            Section::Goal => "GOAL",
            Section::Memory => "MEMORY",
            Section::Retrieval => "RETRIEVAL",
            Section::ToolOutputs => "TOOL_OUTPUTS",
        }
    }

    /// Human-readable title (`Tool Outputs`).
    pub fn title(self) -> &'static str {
        match self {
            Section::Instructions => "Instructions",
            Section::Goal => "Goal",
            Section::Memory => "Memory",
            Section::Retrieval => "Retrieval",
            Section::ToolOutputs => "Tool Outputs",
        }
    }

    /// Sentinels this section can fall back to.
    pub fn sentinels(self) -> &'static [&'static str] {
        match self {
            Section::Instructions | Section::Goal => &[],
            Section::Memory => &[NO_SESSION_MEMORY, MEMORY_FULL],
            Section::Retrieval => &[NO_DOCUMENTS, NO_CONTENT_WITHIN_BUDGET],
            Section::ToolOutputs => &[NO_TOOL_OUTPUTS],
        }
    }

    /// Smallest usable limit: room for the ellipsis and every sentinel.
    pub fn min_limit(self) -> usize {
        self.sentinels()
            .iter()
            .map(|s| s.chars().count())
            .fold(ELLIPSIS_CHARS, usize::max)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-section character ceilings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionLimits {
    #[serde(default = "default_instructions")]
    pub instructions: usize,
    #[serde(default = "default_goal")]
    pub goal: usize,
    #[serde(default = "default_memory")]
    pub memory: usize,
    #[serde(default = "default_retrieval")]
    pub retrieval: usize,
    #[serde(default = "default_tool_outputs")]
    pub tool_outputs: usize,
}

fn default_instructions() -> usize {
    255
}
fn default_goal() -> usize {
    1500
}
fn default_memory() -> usize {
    55
}
fn default_retrieval() -> usize {
    550
}
fn default_tool_outputs() -> usize {
    855
}

impl Default for SectionLimits {
    fn default() -> Self {
        Self {
            instructions: default_instructions(),
            goal: default_goal(),
            memory: default_memory(),
            retrieval: default_retrieval(),
            tool_outputs: default_tool_outputs(),
        }
    }
}

impl SectionLimits {
    /// The ceiling for `section`.
    pub fn get(&self, section: Section) -> usize {
        match section {
            Section::Instructions => self.instructions,
            Section::Goal => self.goal,
            Section::Memory => self.memory,
            Section::Retrieval => self.retrieval,
            Section::ToolOutputs => self.tool_outputs,
        }
    }

    /// Sum of all ceilings.
    pub fn total(&self) -> usize {
        Section::ALL.iter().map(|s| self.get(*s)).sum()
    }
}

/// The validated content of one context window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextBudget {
    instructions: String,
    goal: String,
    memory: String,
    retrieval: String,
    tool_outputs: String,
    #[serde(skip)]
    limits: SectionLimits,
}

impl ContextBudget {
    /// Build a budget, rejecting any section longer than its limit.
    pub fn new(
        instructions: String,
        goal: String,
        memory: String,
        retrieval: String,
        tool_outputs: String,
        limits: SectionLimits,
    ) -> Result<Self, BudgetError> {
        let budget = Self {
            instructions,
            goal,
            memory,
            retrieval,
            tool_outputs,
            limits,
        };
        budget.validate()?;
        Ok(budget)
    }

    fn validate(&self) -> Result<(), BudgetError> {
        for section in Section::ALL {
            let len = self.get(section).chars().count();
            let limit = self.limits.get(section);
            if len > limit {
                return Err(BudgetError::SectionTooLong {
                    section,
                    len,
                    limit,
                });
            }
        }
        Ok(())
    }

    /// Content of `section`.
    pub fn get(&self, section: Section) -> &str {
        match section {
            Section::Instructions => &self.instructions,
            Section::Goal => &self.goal,
            Section::Memory => &self.memory,
            Section::Retrieval => &self.retrieval,
            Section::ToolOutputs => &self.tool_outputs,
        }
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn goal(&self) -> &str {
        &self.goal
    }

    pub fn memory(&self) -> &str {
        &self.memory
    }

    pub fn retrieval(&self) -> &str {
        &self.retrieval
    }

    pub fn tool_outputs(&self) -> &str {
        &self.tool_outputs
    }

    /// The limits this budget was validated against.
    pub fn limits(&self) -> &SectionLimits {
        &self.limits
    }
}
