//! `ragwindow chunk` — List the chunks generated from the corpus.

use ragwindow_config::AppConfig;
use ragwindow_memory::KnowledgeIndex;
use std::path::PathBuf;

pub async fn run(
    corpus: Option<PathBuf>,
    chunk_size: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    let chunk_size = chunk_size.unwrap_or(config.chunking.chunk_size);
    if chunk_size == 0 {
        return Err("chunk size must be > 0".into());
    }

    let (path, documents) = super::load_documents(&config, corpus).await?;
    let mut index = KnowledgeIndex::new(chunk_size);
    index.add_documents(&documents);

    println!(
        "🧩 {} chunks from {} documents ({}, max {} chars)",
        index.len(),
        documents.len(),
        path.display(),
        chunk_size
    );
    println!("─────────────────────────────────────────────────────");
    for chunk in index.chunks() {
        let marker = if chunk.char_len() > chunk_size {
            "  (oversized sentence)"
        } else {
            ""
        };
        println!("  {:<28} {:>5} chars{}", chunk.id, chunk.char_len(), marker);
    }

    Ok(())
}
