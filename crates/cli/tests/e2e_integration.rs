//! End-to-end integration tests for ragwindow.
//!
//! These tests exercise the full pipeline from corpus file to context
//! window: loading, chunking, retrieval packing, session memory, truncation
//! and the usage report.

use std::path::{Path, PathBuf};

use ragwindow_agent::{AssemblyRequest, ContextAssembler, UsageLevel, format_context_window};
use ragwindow_config::AppConfig;
use ragwindow_core::{CorpusError, Document, Error, Retriever, Section};
use ragwindow_memory::{KnowledgeIndex, load_corpus, parse_corpus};

const INSTRUCTIONS: &str = "You are a helpful operations assistant.";
const GOAL: &str = "Help the user with operational procedures and troubleshooting.";

// ── Helpers ──────────────────────────────────────────────────────────────

fn sample_corpus_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/sample_corpus.json")
}

async fn sample_assembler() -> ContextAssembler {
    let documents = load_corpus(&sample_corpus_path()).await.unwrap();
    let mut assembler = ContextAssembler::from_config(&AppConfig::default());
    assembler.add_documents(&documents);
    assembler
}

fn request<'a>(query: &'a str, tool_outputs: &'a [String]) -> AssemblyRequest<'a> {
    AssemblyRequest {
        instructions: INSTRUCTIONS,
        goal: GOAL,
        query,
        tool_outputs,
    }
}

fn demo_tool_outputs() -> Vec<String> {
    vec![
        "search_logs: Found 3 ERROR entries in last 24h".into(),
        "check_status: Service running, CPU 45%, Memory 67%".into(),
        "get_config: timeout=30s, retry=3, debug=false".into(),
    ]
}

// ── Retrieval scenarios ──────────────────────────────────────────────────

#[test]
fn e2e_relevant_document_leads_retrieval() {
    let mut index = KnowledgeIndex::default();
    index.add_documents(&[
        Document::new("a", "The server is down. Restart it now."),
        Document::new("b", "Unrelated weather report today."),
    ]);

    let packed = index.retrieve("restart server", 550);
    assert!(!packed.is_empty());
    assert_eq!(packed, packed.trim());
    assert!(packed.starts_with("The server is down. Restart it now."));
}

#[test]
fn e2e_empty_store_returns_sentinel() {
    let index = KnowledgeIndex::default();
    assert_eq!(index.retrieve("restart server", 550), "[No relevant documents found]");
}

#[test]
fn e2e_tiny_budget_returns_no_content_sentinel() {
    let mut index = KnowledgeIndex::default();
    index.add_documents(&[Document::new("big", format!("{}.", "x".repeat(49)))]);
    assert_eq!(index.retrieve("x", 10), "[No content within budget]");
}

#[tokio::test]
async fn e2e_sample_corpus_retrieval_respects_every_budget() {
    let documents = load_corpus(&sample_corpus_path()).await.unwrap();
    let mut index = KnowledgeIndex::default();
    index.add_documents(&documents);
    assert_eq!(index.len(), documents.len());

    let queries = [
        "restart server",
        "database maintenance window",
        "cpu usage high",
        "",
        "nothing in the corpus matches this",
    ];
    for query in queries {
        for max_chars in [0, 10, 51, 120, 307, 550, 2000] {
            let packed = index.retrieve(query, max_chars);
            if packed != "[No content within budget]" {
                assert!(
                    packed.chars().count() <= max_chars,
                    "{query:?} at {max_chars}: {} chars",
                    packed.chars().count()
                );
            }
        }
    }
}

#[tokio::test]
async fn e2e_sample_corpus_ranks_runbook_first() {
    let documents = load_corpus(&sample_corpus_path()).await.unwrap();
    let mut index = KnowledgeIndex::default();
    index.add_documents(&documents);

    let ranked = index.rank("database maintenance snapshot");
    assert_eq!(ranked[0].chunk.source_doc, "database_maintenance");
    assert_eq!(ranked[0].chunk.metadata["service"], "postgres");

    let packed = index.retrieve("database maintenance snapshot", 550);
    assert!(packed.starts_with("Database maintenance runs every Sunday"));
}

// ── Full assembly ────────────────────────────────────────────────────────

#[tokio::test]
async fn e2e_full_window_from_sample_corpus() {
    let mut assembler = sample_assembler().await;
    assembler.update_memory("user_pref", "CLI");
    assembler.update_memory("last_action", "restart");
    let tools = demo_tool_outputs();

    let budget = assembler
        .assemble_context(&request("restart server", &tools))
        .unwrap();
    let window = format_context_window(&budget);

    assert!(window.starts_with(&format!("INSTRUCTIONS: {INSTRUCTIONS}\n\nGOAL: {GOAL}")));
    assert!(window.contains("\n\nMEMORY: user_pref:CLI;last_action:restart\n\n"));
    assert!(window.contains("\n\nRETRIEVAL: To restart the application server"));
    assert!(window.ends_with("TOOL_OUTPUTS: search_logs: Found 3 ERROR entries in last 24h | check_status: Service running, CPU 45%, Memory 67% | get_config: timeout=30s, retry=3, debug=false"));

    for section in Section::ALL {
        assert!(budget.get(section).chars().count() <= budget.limits().get(section));
    }
}

#[tokio::test]
async fn e2e_long_goal_truncated_in_window() {
    let assembler = sample_assembler().await;
    let goal = "g".repeat(2000);

    let budget = assembler
        .assemble_context(&AssemblyRequest {
            goal: &goal,
            ..request("restart server", &[])
        })
        .unwrap();

    assert_eq!(budget.goal().chars().count(), 1500);
    assert!(budget.goal().ends_with("..."));
    assert_eq!(&budget.goal()[..1497], &goal[..1497]);
}

#[tokio::test]
async fn e2e_usage_report_matches_window() {
    let mut assembler = sample_assembler().await;
    assembler.update_memory("user_pref", "CLI");
    let goal = "g".repeat(1450);

    let budget = assembler
        .assemble_context(&AssemblyRequest {
            goal: &goal,
            ..request("restart server", &[])
        })
        .unwrap();
    let usage = assembler.budget_usage(&budget);
    let window = format_context_window(&budget);

    assert_eq!(usage.total_chars, window.chars().count());
    assert_eq!(usage.estimated_tokens, window.chars().count().div_ceil(4));

    let goal_usage = usage.section(Section::Goal).unwrap();
    assert_eq!(goal_usage.used, 1450);
    assert_eq!(goal_usage.remaining, 50);
    assert_eq!(goal_usage.percentage, 96.7);
    assert_eq!(goal_usage.level(), UsageLevel::Critical);

    let tools = usage.section(Section::ToolOutputs).unwrap();
    assert_eq!(tools.used, "[No tool outputs]".len());
    assert_eq!(tools.level(), UsageLevel::Ok);

    let json = serde_json::to_value(&usage).unwrap();
    assert_eq!(json["sections"][1]["section"], "goal");
}

#[tokio::test]
async fn e2e_assembly_is_deterministic() {
    let first = sample_assembler().await;
    let second = sample_assembler().await;
    let tools = demo_tool_outputs();

    let a = first.assemble_context(&request("cpu usage high", &tools)).unwrap();
    let b = second.assemble_context(&request("cpu usage high", &tools)).unwrap();
    assert_eq!(format_context_window(&a), format_context_window(&b));
}

#[tokio::test]
async fn e2e_config_limits_shape_the_window() {
    let documents = load_corpus(&sample_corpus_path()).await.unwrap();
    let mut config = AppConfig::default();
    config.chunking.chunk_size = 120;
    config.retrieval.max_chars = 200;
    config.budget.retrieval = 200;
    config.budget.instructions = 20;
    config.validate().unwrap();

    let mut assembler = ContextAssembler::from_config(&config);
    assembler.add_documents(&documents);
    assert!(assembler.retriever().len() > documents.len());

    let budget = assembler.assemble_context(&request("restart server", &[])).unwrap();
    assert!(budget.retrieval().chars().count() <= 200);
    assert_eq!(budget.instructions(), "You are a helpful...");
}

// ── Corpus errors ────────────────────────────────────────────────────────

#[test]
fn e2e_malformed_corpus_is_rejected() {
    let err = parse_corpus(r#"[{"content": "no id"}]"#).unwrap_err();
    assert!(matches!(err, Error::Corpus(CorpusError::Malformed(_))));

    let err = parse_corpus(r#"{"id": "a", "content": "not an array"}"#).unwrap_err();
    assert!(matches!(err, Error::Corpus(CorpusError::Malformed(_))));
}

#[tokio::test]
async fn e2e_missing_corpus_file_is_unreadable() {
    let err = load_corpus(Path::new("does/not/exist.json")).await.unwrap_err();
    match err {
        Error::Corpus(CorpusError::Unreadable { path, .. }) => {
            assert!(path.contains("exist.json"));
        }
        other => panic!("expected unreadable corpus, got {other}"),
    }
}
