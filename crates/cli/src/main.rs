//! ragwindow CLI — the main entry point.
//!
//! Commands:
//! - `assemble` — Build a budgeted context window for a query
//! - `retrieve` — Show what retrieval packs for a query
//! - `chunk`    — List the chunks generated from the corpus
//! - `config`   — Show, locate or validate configuration

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(
    name = "ragwindow",
    about = "ragwindow — budgeted context windows for operations agents",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble a context window from the corpus, session memory and tool outputs
    Assemble {
        /// Query used for retrieval
        #[arg(short, long)]
        query: String,

        /// Agent instructions
        #[arg(long, default_value = commands::assemble::DEFAULT_INSTRUCTIONS)]
        instructions: String,

        /// Task goal
        #[arg(long, default_value = commands::assemble::DEFAULT_GOAL)]
        goal: String,

        /// Corpus file (overrides config)
        #[arg(short, long, env = "RAGWINDOW_CORPUS")]
        corpus: Option<PathBuf>,

        /// Session memory entry, repeatable
        #[arg(short, long = "memory", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        memory: Vec<(String, String)>,

        /// Tool output line, repeatable
        #[arg(short, long = "tool-output", value_name = "LINE")]
        tool_outputs: Vec<String>,

        /// Seed demo session memory and canned operations tool outputs
        #[arg(long)]
        demo: bool,

        /// Print a per-section usage breakdown before the window
        #[arg(short, long, conflicts_with = "json")]
        breakdown: bool,

        /// Print sections, window and usage as JSON
        #[arg(long)]
        json: bool,
    },

    /// Retrieve packed knowledge for a query
    Retrieve {
        /// Query to score chunks against
        #[arg(short, long)]
        query: String,

        /// Character budget (defaults to config)
        #[arg(short, long)]
        max_chars: Option<usize>,

        /// Corpus file (overrides config)
        #[arg(short, long, env = "RAGWINDOW_CORPUS")]
        corpus: Option<PathBuf>,

        /// List chunk scores in rank order
        #[arg(long)]
        ranked: bool,

        /// Print ranked chunks and the packed result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the chunks generated from the corpus
    Chunk {
        /// Corpus file (overrides config)
        #[arg(short, long, env = "RAGWINDOW_CORPUS")]
        corpus: Option<PathBuf>,

        /// Maximum characters per chunk (defaults to config)
        #[arg(short = 's', long)]
        chunk_size: Option<usize>,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
    /// Validate the configuration
    Validate,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the window.
    let filter = if cli.verbose { "debug" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    match cli.command {
        Commands::Assemble {
            query,
            instructions,
            goal,
            corpus,
            mut memory,
            mut tool_outputs,
            demo,
            breakdown,
            json,
        } => {
            if demo {
                memory = commands::assemble::demo_memory().into_iter().chain(memory).collect();
                tool_outputs.extend(commands::assemble::demo_tool_outputs());
            }
            let args = commands::assemble::AssembleArgs {
                query,
                instructions,
                goal,
                corpus,
                memory,
                tool_outputs,
                breakdown,
                json,
            };
            commands::assemble::run(args).await?
        }
        Commands::Retrieve {
            query,
            max_chars,
            corpus,
            ranked,
            json,
        } => commands::retrieve::run(&query, max_chars, corpus, ranked, json).await?,
        Commands::Chunk { corpus, chunk_size } => commands::chunk::run(corpus, chunk_size).await?,
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config_cmd::show().await?,
            ConfigAction::Path => commands::config_cmd::path().await?,
            ConfigAction::Validate => commands::config_cmd::validate().await?,
        },
    }

    Ok(())
}
