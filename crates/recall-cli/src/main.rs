use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use recall_core::config::RecallConfig;
use recall_core::constants::VERSION;
use recall_core::traits::IEvaluator;
use recall_embeddings::EmbeddingEngine;
use recall_knowledge::KnowledgeBase;
use recall_observability::{embedding_span, init_tracing};
use recall_retrieval::RecallEngine;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "recall")]
#[command(author, version = VERSION, about = "Answer a question from a Q&A knowledge base", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Knowledge document; overrides `[knowledge].path`
    #[arg(short, long)]
    knowledge: Option<PathBuf>,

    /// Pretty-print the JSON result
    #[arg(long)]
    pretty: bool,

    /// The question to answer
    query: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => RecallConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => RecallConfig::default(),
    };
    if let Some(path) = cli.knowledge {
        config.knowledge.path = path;
    }

    init_tracing(&config.observability);

    let embedder = {
        let span = embedding_span!(config.embedding.provider, config.embedding.dimensions);
        let _guard = span.enter();
        EmbeddingEngine::new(&config.embedding).context("failed to construct embedder")?
    };

    let knowledge = KnowledgeBase::load(&config.knowledge.path);
    info!(
        records = knowledge.len(),
        aliases = knowledge.alias_count(),
        provider = embedder.active_provider(),
        "recall ready"
    );

    let engine = RecallEngine::new(&knowledge, &embedder, &config);
    let result = engine.evaluate(&cli.query);

    let json = if cli.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{json}");
    Ok(())
}
