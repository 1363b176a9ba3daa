use anyhow::Result;
use clap::Parser;
use coverart_database::{PostgresCoverArtStore, establish_pool};
use coverart_server::{AppState, RedirectConfig, create_router, init_telemetry};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Cover Art Archive redirect service", long_about = None)]
struct Args {
    /// Configuration file (default: ./coverart-redirect.toml if present)
    #[arg(short, long, env = "COVERART_CONFIG")]
    config: Option<PathBuf>,

    /// Address to listen on, overriding the configuration
    #[arg(short, long)]
    listen: Option<SocketAddr>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let mut config = RedirectConfig::load(args.config.as_deref())?;
    if let Some(listen) = args.listen {
        config = config.with_listen(listen);
    }

    init_telemetry(*config.json_logs(), args.verbose)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    let pool = establish_pool(config.database_url(), *config.pool_size())?;
    let store = Arc::new(PostgresCoverArtStore::new(pool));

    let listen = *config.listen();
    info!(
        listen = %listen,
        prefix = %config.s3_prefix(),
        static_path = %config.static_path().display(),
        "Starting cover art redirect service"
    );

    let router = create_router(AppState::new(store, config));
    let listener = tokio::net::TcpListener::bind(listen).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
