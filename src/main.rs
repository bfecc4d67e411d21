use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use steady_mind::{config::Config, http, providers};
use tracing::info;

/// Mood journaling analysis server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the TOML config file (defaults to steady_mind.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Bind address override, e.g. 0.0.0.0:8787
    #[arg(long)]
    bind: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::load_from(args.config.as_deref()).map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;
    if let Some(bind) = args.bind {
        config.runtime.http_bind = bind;
    }

    tracing_subscriber::fmt()
        .with_env_filter(config.runtime.log_level.clone())
        .with_ansi(false)
        .init();

    info!("Starting steady-mind analysis server");
    info!(
        "Configuration loaded: provider={}, model={}, bind={}",
        config.system.llm_provider, config.system.llm_model, config.runtime.http_bind
    );

    let analyzer = providers::create_analyzer(&config).map_err(|e| {
        eprintln!("Failed to create analyzer: {}", e);
        e
    })?;
    info!("Analyzer ready: {}", analyzer.name());

    http::start_http_server(Arc::new(config), analyzer).await?;

    Ok(())
}
