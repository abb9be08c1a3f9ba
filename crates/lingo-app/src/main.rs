use std::sync::Arc;

use clap::Parser;
use lingo_ai::GeminiClient;
use lingo_config::Config;
use lingo_core::document::Document;
use tokio::signal;

mod command;
mod controller;
mod events;
mod io;
mod state;
mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

/// Community jargon dictionary with AI-assisted definitions
#[derive(Parser)]
#[command(name = "lingo", version)]
struct Args {
    /// Bundled dictionary file, read when no cache exists
    #[arg(long)]
    data: Option<String>,

    /// Cache file that shadows the bundled dictionary
    #[arg(long)]
    cache: Option<String>,

    /// Disable the AI definition assist even when a key is present
    #[arg(long)]
    no_ai: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = Args::parse();
    let mut config = Config::new();
    if let Some(data) = args.data {
        config.store.data_path = data;
    }
    if let Some(cache) = args.cache {
        config.store.cache_path = cache;
    }
    if args.no_ai {
        config.ai.enabled = false;
    }

    let document = Document::new(lingo_store::load(&config.store).await);
    tracing::info!(
        "Dictionary ready: {} terms, {} categories",
        document.terms().len(),
        document.categories().len()
    );

    let definer = if config.ai.enabled && !config.ai.api_key.is_empty() {
        Some(GeminiClient::new(&config.ai))
    } else {
        tracing::warn!("AI assist disabled (no GEMINI_API_KEY or --no-ai)");
        None
    };

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(document, definer);

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Err(e))) => tracing::error!("task exited with error: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                _ => {}
            }
        }
    }

    controller.shutdown();
    tasks.shutdown().await;

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    // Logs go to stderr so the term listing on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_ansi(atty::is(atty::Stream::Stderr))
        .with_writer(std::io::stderr)
        .init();
}
