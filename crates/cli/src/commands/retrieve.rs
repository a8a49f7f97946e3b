//! `ragwindow retrieve` — Show what retrieval packs for a query.

use ragwindow_config::AppConfig;
use ragwindow_core::Retriever;
use ragwindow_memory::KnowledgeIndex;
use std::path::PathBuf;

pub async fn run(
    query: &str,
    max_chars: Option<usize>,
    corpus: Option<PathBuf>,
    ranked: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    let (path, documents) = super::load_documents(&config, corpus).await?;

    let mut index = KnowledgeIndex::new(config.chunking.chunk_size);
    index.add_documents(&documents);

    let max_chars = max_chars.unwrap_or(config.retrieval.max_chars);

    if json {
        let report = json_report(&index, query, max_chars)?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if ranked {
        println!("🔎 Ranked chunks for \"{query}\" ({})", path.display());
        println!("─────────────────────────────────────────────────────");
        println!("{:>6}  {:<28} {:>6}", "Score", "Chunk", "Chars");
        for candidate in index.rank(query) {
            println!(
                "{:>6.3}  {:<28} {:>6}",
                candidate.score,
                candidate.chunk.id,
                candidate.chunk.char_len()
            );
        }
        println!();
    }

    let packed = index.retrieve(query, max_chars);
    println!("{packed}");

    if ranked {
        println!();
        println!("─────────────────────────────────────");
        println!("  {} / {} chars", packed.chars().count(), max_chars);
    }

    Ok(())
}

/// Ranked chunks and the packed result as one JSON object.
fn json_report(
    index: &KnowledgeIndex,
    query: &str,
    max_chars: usize,
) -> Result<serde_json::Value, serde_json::Error> {
    let packed = index.retrieve(query, max_chars);
    Ok(serde_json::json!({
        "query": query,
        "max_chars": max_chars,
        "ranked": serde_json::to_value(index.rank(query))?,
        "packed": packed,
        "packed_chars": packed.chars().count(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ragwindow_core::Document;

    #[test]
    fn json_report_lists_ranked_chunks() {
        let mut index = KnowledgeIndex::default();
        index.add_documents(&[
            Document::new("weather", "Unrelated weather report today."),
            Document::new("restart", "The server is down. Restart it now."),
        ]);

        let report = json_report(&index, "restart server", 550).unwrap();
        assert_eq!(report["ranked"][0]["chunk"]["id"], "restart_chunk_0");
        assert_eq!(report["ranked"][0]["score"], 1.0);
        assert_eq!(report["ranked"][1]["chunk"]["source_doc"], "weather");
        assert!(
            report["packed"]
                .as_str()
                .unwrap()
                .starts_with("The server is down.")
        );
    }
}
