use clap::Parser;
use std::{net::SocketAddr, sync::Arc};

use coach::{app, AppState};
use llm::OllamaClient;
use memory::QdrantStore;
use recall::{AnswerPipeline, PipelineConfig};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Address to bind the HTTP server
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,
    /// Base URL of the Ollama server
    #[arg(long, env = "OLLAMA_URL", default_value = "http://localhost:11434")]
    ollama_url: String,
    /// URL of the Qdrant instance
    #[arg(long, env = "QDRANT_URL", default_value = "http://localhost:6334")]
    qdrant_url: String,
    /// Chat model used for answer synthesis
    #[arg(long, env = "COACH_CHAT_MODEL", default_value = "gemma3:27b")]
    chat_model: String,
    /// Embedding model used for documents and queries
    #[arg(long, env = "COACH_EMBED_MODEL", default_value = "nomic-embed-text")]
    embed_model: String,
    /// Qdrant collection holding the experiences
    #[arg(long, env = "COACH_COLLECTION", default_value = "experiences")]
    collection: String,
    /// Embedding dimensionality of the collection
    #[arg(long, env = "COACH_EMBED_DIM", default_value_t = 1536)]
    embed_dim: usize,
    /// Maximum candidates fetched per retrieval tier
    #[arg(long, default_value_t = 5)]
    context_limit: usize,
    /// Minimum similarity for a snippet to enter the answer context
    #[arg(long, default_value_t = 0.3)]
    context_threshold: f32,
    /// Minimum similarity for a single-best-match lookup
    #[arg(long, default_value_t = 0.8)]
    match_threshold: f32,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    coach::init_logging();

    let client = Arc::new(OllamaClient::new(&cli.ollama_url)?);
    let store = Arc::new(QdrantStore::new(
        &cli.qdrant_url,
        cli.collection.as_str(),
        cli.embed_dim,
    )?);
    store.ensure_collection().await?;

    let config = PipelineConfig {
        chat_model: cli.chat_model,
        embed_model: cli.embed_model,
        context_limit: cli.context_limit,
        context_threshold: cli.context_threshold,
        match_threshold: cli.match_threshold,
    };
    let pipeline = Arc::new(AnswerPipeline::new(client, store, config));
    let app = app(AppState { pipeline });

    let addr: SocketAddr = cli.addr.parse()?;
    println!("Listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
