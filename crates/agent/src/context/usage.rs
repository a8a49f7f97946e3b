//! Per-section budget usage.

use ragwindow_core::{ContextBudget, Section};
use serde::{Deserialize, Serialize};

use crate::context::token;

/// How close a section is to its ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageLevel {
    Ok,
    /// Above 70%.
    High,
    /// Above 90%.
    Critical,
}

impl UsageLevel {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage > 90.0 {
            UsageLevel::Critical
        } else if percentage > 70.0 {
            UsageLevel::High
        } else {
            UsageLevel::Ok
        }
    }

    /// Short status mark for plain-text tables.
    pub fn mark(self) -> &'static str {
        match self {
            UsageLevel::Ok => "ok",
            UsageLevel::High => "high",
            UsageLevel::Critical => "CRITICAL",
        }
    }
}

/// Usage of a single section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionUsage {
    pub section: Section,
    pub used: usize,
    pub limit: usize,
    pub remaining: usize,
    /// `used / limit * 100`, rounded to one decimal with ties away from
    /// zero (0.25 becomes 0.3, where banker's rounding would give 0.2).
    pub percentage: f64,
}

impl SectionUsage {
    pub fn level(&self) -> UsageLevel {
        UsageLevel::from_percentage(self.percentage)
    }
}

/// Usage of every section plus whole-window totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetUsage {
    pub sections: Vec<SectionUsage>,
    /// Characters in the formatted context window.
    pub total_chars: usize,
    pub estimated_tokens: usize,
}

impl BudgetUsage {
    /// Measure `budget`; `window` is its formatted rendering.
    pub fn measure(budget: &ContextBudget, window: &str) -> Self {
        let limits = budget.limits();
        let sections = Section::ALL
            .iter()
            .map(|&section| {
                let used = budget.get(section).chars().count();
                let limit = limits.get(section);
                SectionUsage {
                    section,
                    used,
                    limit,
                    remaining: limit.saturating_sub(used),
                    percentage: percentage(used, limit),
                }
            })
            .collect();

        Self {
            sections,
            total_chars: window.chars().count(),
            estimated_tokens: token::estimate_tokens(window),
        }
    }

    pub fn section(&self, section: Section) -> Option<&SectionUsage> {
        self.sections.iter().find(|usage| usage.section == section)
    }

    /// Sum of used characters across sections, excluding labels and separators.
    pub fn content_chars(&self) -> usize {
        self.sections.iter().map(|usage| usage.used).sum()
    }
}

fn percentage(used: usize, limit: usize) -> f64 {
    if limit == 0 {
        return 0.0;
    }
    (used as f64 * 1000.0 / limit as f64).round() / 10.0
}
