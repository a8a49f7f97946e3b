//! `ragwindow assemble` — Build a budgeted context window.

use ragwindow_agent::{AssemblyRequest, BudgetUsage, ContextAssembler, format_context_window};
use ragwindow_config::AppConfig;
use ragwindow_core::{ContextBudget, Section};
use std::path::PathBuf;

pub const DEFAULT_INSTRUCTIONS: &str = "You are a helpful operations assistant.";
pub const DEFAULT_GOAL: &str = "Help the user with operational procedures and troubleshooting.";

pub struct AssembleArgs {
    pub query: String,
    pub instructions: String,
    pub goal: String,
    pub corpus: Option<PathBuf>,
    pub memory: Vec<(String, String)>,
    pub tool_outputs: Vec<String>,
    pub breakdown: bool,
    pub json: bool,
}

/// Session facts seeded by `--demo`.
pub fn demo_memory() -> Vec<(String, String)> {
    vec![
        ("user_pref".into(), "CLI".into()),
        ("last_action".into(), "restart".into()),
    ]
}

/// Canned outputs for demoing the tool section without live tools.
pub fn demo_tool_outputs() -> Vec<String> {
    vec![
        "search_logs: Found 3 ERROR entries in last 24h".into(),
        "check_status: Service running, CPU 45%, Memory 67%".into(),
        "get_config: timeout=30s, retry=3, debug=false".into(),
    ]
}

pub async fn run(args: AssembleArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    let (_, documents) = super::load_documents(&config, args.corpus).await?;

    let mut assembler = ContextAssembler::from_config(&config);
    assembler.add_documents(&documents);
    for (key, value) in args.memory {
        assembler.update_memory(key, value);
    }

    let budget = assembler.assemble_context(&AssemblyRequest {
        instructions: &args.instructions,
        goal: &args.goal,
        query: &args.query,
        tool_outputs: &args.tool_outputs,
    })?;
    let window = format_context_window(&budget);
    let usage = assembler.budget_usage(&budget);

    if args.json {
        let output = serde_json::json!({
            "query": args.query,
            "sections": budget,
            "window": window,
            "usage": usage,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if args.breakdown {
        print_breakdown(&budget, &usage);
    }

    println!("{window}");
    println!();
    println!("─────────────────────────────────────");
    println!(
        "  Total: {} chars (~{} tokens)",
        usage.total_chars, usage.estimated_tokens
    );

    Ok(())
}

fn print_breakdown(budget: &ContextBudget, usage: &BudgetUsage) {
    println!("📊 Budget Breakdown");
    println!("─────────────────────────────────────────────────────");
    println!(
        "{:<14} {:>6} {:>6} {:>9} {:>7}  {}",
        "Section", "Used", "Limit", "Remaining", "Usage", "Status"
    );
    println!(
        "{:<14} {:>6} {:>6} {:>9} {:>7}  {}",
        "───────", "────", "─────", "─────────", "─────", "──────"
    );
    for row in &usage.sections {
        println!(
            "{:<14} {:>6} {:>6} {:>9} {:>6.1}%  {}",
            row.section.title(),
            row.used,
            row.limit,
            row.remaining,
            row.percentage,
            row.level().mark()
        );
    }
    println!();

    for section in Section::ALL {
        println!("📄 {}", section.title());
        println!("─────────────────────────────────────");
        println!("{}", budget.get(section));
        println!();
    }

    println!("🪟 Context Window");
    println!("─────────────────────────────────────");
}
