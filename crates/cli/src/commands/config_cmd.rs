//! `ragwindow config` — Configuration management commands.

use ragwindow_config::AppConfig;

pub async fn validate() -> Result<(), Box<dyn std::error::Error>> {
    println!("🔍 Validating configuration...");

    match AppConfig::load() {
        Ok(config) => {
            println!("   ✅ Config parsed successfully");

            let mut warnings = Vec::new();

            if !std::path::Path::new(&config.corpus.path).exists() {
                warnings.push(format!("Corpus file not found: {}", config.corpus.path));
            }

            if config.chunking.chunk_size > config.budget.retrieval {
                warnings.push(format!(
                    "chunk_size ({}) exceeds the retrieval limit ({}); whole chunks will never fit",
                    config.chunking.chunk_size, config.budget.retrieval
                ));
            }

            if warnings.is_empty() {
                println!("   ✅ All checks passed");
            } else {
                println!();
                for w in &warnings {
                    println!("   ⚠️  {w}");
                }
            }

            println!();
            println!("   Chunk size:      {}", config.chunking.chunk_size);
            println!("   Retrieval chars: {}", config.retrieval.max_chars);
            println!("   Corpus:          {}", config.corpus.path);
            println!(
                "   Limits:          {} / {} / {} / {} / {} (total {})",
                config.budget.instructions,
                config.budget.goal,
                config.budget.memory,
                config.budget.retrieval,
                config.budget.tool_outputs,
                config.budget.total()
            );
        }
        Err(e) => {
            println!("   ❌ Config error: {e}");
            return Err(e.into());
        }
    }

    Ok(())
}

pub async fn show() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

pub async fn path() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = AppConfig::config_dir().join("config.toml");
    println!("{}", config_path.display());
    Ok(())
}
