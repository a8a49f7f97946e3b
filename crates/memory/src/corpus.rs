//! Corpus loading — a JSON array of `{id, content, metadata?}` documents.

use ragwindow_core::document::Document;
use ragwindow_core::error::{CorpusError, Result};
use std::path::Path;
use tracing::debug;

/// Parse a corpus from its JSON text.
///
/// A document missing `id` or `content` rejects the whole corpus.
pub fn parse_corpus(json: &str) -> Result<Vec<Document>> {
    let documents: Vec<Document> =
        serde_json::from_str(json).map_err(|e| CorpusError::Malformed(e.to_string()))?;
    Ok(documents)
}

/// Read and parse a corpus file.
pub async fn load_corpus(path: &Path) -> Result<Vec<Document>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| CorpusError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    let documents = parse_corpus(&content)?;
    debug!(path = %path.display(), documents = documents.len(), "Corpus loaded");
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ragwindow_core::Error;

    #[test]
    fn parses_documents_in_order() {
        let docs = parse_corpus(
            r#"[
                {"id": "a", "content": "The server is down. Restart it now."},
                {"id": "b", "content": "Unrelated weather report today.", "metadata": {"kind": "noise"}}
            ]"#,
        )
        .unwrap();

        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].id, "a");
        assert_eq!(docs[1].metadata["kind"], "noise");
    }

    #[test]
    fn empty_array_is_empty_corpus() {
        assert!(parse_corpus("[]").unwrap().is_empty());
    }

    #[test]
    fn missing_field_is_malformed() {
        let err = parse_corpus(r#"[{"id": "a"}]"#).unwrap_err();
        assert!(matches!(err, Error::Corpus(CorpusError::Malformed(_))));
        assert!(err.to_string().contains("content"));
    }

    #[test]
    fn non_array_is_malformed() {
        let err = parse_corpus(r#"{"id": "a", "content": "x"}"#).unwrap_err();
        assert!(matches!(err, Error::Corpus(CorpusError::Malformed(_))));
    }

    #[tokio::test]
    async fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.json");
        std::fs::write(&path, r#"[{"id": "ops", "content": "Rotate the logs."}]"#).unwrap();

        let docs = load_corpus(&path).await.unwrap();
        assert_eq!(docs, vec![Document::new("ops", "Rotate the logs.")]);
    }

    #[tokio::test]
    async fn missing_file_is_unreadable() {
        let err = load_corpus(Path::new("/nonexistent/corpus.json")).await.unwrap_err();
        assert!(matches!(err, Error::Corpus(CorpusError::Unreadable { .. })));
        assert!(err.to_string().contains("/nonexistent/corpus.json"));
    }
}
