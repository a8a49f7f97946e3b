//! Configuration loading, validation, and management for ragwindow.
//!
//! Loads configuration from `~/.ragwindow/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use ragwindow_core::budget::{Section, SectionLimits};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.ragwindow/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Document chunking
    #[serde(default)]
    pub chunking: ChunkingConfig,

    /// Retrieval packing
    #[serde(default)]
    pub retrieval: RetrievalConfig,

    /// Per-section character ceilings
    #[serde(default)]
    pub budget: SectionLimits,

    /// Corpus location
    #[serde(default)]
    pub corpus: CorpusConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Maximum characters per chunk (single oversized sentences excepted)
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

fn default_chunk_size() -> usize {
    500
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Character budget handed to the retriever
    #[serde(default = "default_retrieval_max_chars")]
    pub max_chars: usize,
}

fn default_retrieval_max_chars() -> usize {
    550
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            max_chars: default_retrieval_max_chars(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// JSON array of `{id, content, metadata?}` documents
    #[serde(default = "default_corpus_path")]
    pub path: String,
}

fn default_corpus_path() -> String {
    "data/sample_corpus.json".into()
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: default_corpus_path(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.ragwindow/config.toml).
    ///
    /// Environment variables override file values:
    /// - `RAGWINDOW_CHUNK_SIZE`
    /// - `RAGWINDOW_RETRIEVAL_MAX_CHARS`
    /// - `RAGWINDOW_CORPUS`
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Apply overrides from a variable lookup (the process environment in
    /// [`AppConfig::load`]).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("RAGWINDOW_CHUNK_SIZE") {
            self.chunking.chunk_size = parse_usize("RAGWINDOW_CHUNK_SIZE", &raw)?;
        }

        if let Some(raw) = lookup("RAGWINDOW_RETRIEVAL_MAX_CHARS") {
            self.retrieval.max_chars = parse_usize("RAGWINDOW_RETRIEVAL_MAX_CHARS", &raw)?;
        }

        if let Some(path) = lookup("RAGWINDOW_CORPUS") {
            self.corpus.path = path;
        }

        Ok(())
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".ragwindow")
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunking.chunk_size == 0 {
            return Err(ConfigError::ValidationError(
                "chunking.chunk_size must be > 0".into(),
            ));
        }

        for section in Section::ALL {
            let min = section.min_limit();
            if self.budget.get(section) < min {
                return Err(ConfigError::ValidationError(format!(
                    "budget.{section} must be at least {min} characters"
                )));
            }
        }

        if self.retrieval.max_chars > self.budget.retrieval {
            return Err(ConfigError::ValidationError(format!(
                "retrieval.max_chars ({}) must not exceed budget.retrieval ({})",
                self.retrieval.max_chars, self.budget.retrieval
            )));
        }

        Ok(())
    }

    /// Generate a default config TOML string.
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

fn parse_usize(key: &str, raw: &str) -> Result<usize, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::ValidationError(format!("{key} must be an integer, got '{raw}'")))
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
