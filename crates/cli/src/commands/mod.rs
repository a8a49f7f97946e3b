pub mod assemble;
pub mod chunk;
pub mod config_cmd;
pub mod retrieve;

use ragwindow_config::AppConfig;
use ragwindow_core::Document;
use std::path::PathBuf;

/// Load the corpus named on the command line, falling back to config.
pub async fn load_documents(
    config: &AppConfig,
    corpus: Option<PathBuf>,
) -> Result<(PathBuf, Vec<Document>), Box<dyn std::error::Error>> {
    let path = corpus.unwrap_or_else(|| PathBuf::from(&config.corpus.path));
    let documents = ragwindow_memory::load_corpus(&path).await?;
    tracing::info!(path = %path.display(), documents = documents.len(), "Corpus loaded");
    Ok((path, documents))
}
