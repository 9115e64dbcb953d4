use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use suatrua_site::config::{Config, LoggingConfig};
use suatrua_site::services::{ContentCatalog, export_site};
use suatrua_site::{AppState, build_router};

/// Localized home-repair site server.
#[derive(Parser, Debug)]
#[command(name = "suatrua-site", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve pages over HTTP (default)
    Serve,
    /// Write every page as JSON under an output directory
    Export {
        /// Output directory (defaults to export.out_dir)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Print every pre-generated service path, one per line
    Routes,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = tracing::subscriber::with_default(bootstrap_subscriber(), Config::load)?;
    let _guard = init_tracing(&config.logging)?;

    let catalog = ContentCatalog::load_embedded().context("Invalid embedded content catalog")?;
    tracing::info!(
        "Content catalog loaded: {} services, {} fallback records",
        catalog.services().len(),
        catalog.missing_translations()
    );
    let state = Arc::new(AppState::new(config, Arc::new(catalog)));

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(state).await,
        Command::Export { out } => {
            let out_dir = out.unwrap_or_else(|| PathBuf::from(&state.config.export.out_dir));
            let summary = export_site(&state.pages, &out_dir)?;
            println!("Exported {} pages to {}", summary.pages, summary.out_dir.display());
            Ok(())
        },
        Command::Routes => {
            for param in state.pages.router().static_params() {
                println!("{}", param.path);
            }
            Ok(())
        },
    }
}

async fn serve(state: Arc<AppState>) -> anyhow::Result<()> {
    let addr = format!("{}:{}", state.config.server.host, state.config.server.port);
    let app = build_router(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("Site base URL: {}", state.config.site.base_url);

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutdown signal received");
}

/// Console-only subscriber active while the configuration itself is loaded.
/// Honors `APP_LOG_LEVEL`, defaulting to `info`.
fn bootstrap_subscriber() -> impl tracing::Subscriber + Send + Sync {
    let filter = EnvFilter::try_from_env("APP_LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).finish()
}

/// Console logging, plus a daily-rolling file when `logging.file` is set.
/// The returned guard must live until exit so buffered lines are flushed.
fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(&logging.level)
        .with_context(|| format!("Invalid logging.level '{}'", logging.level))?;
    let registry = tracing_subscriber::registry().with(filter).with(fmt::layer());

    let Some(file) = logging.file.as_deref() else {
        registry.init();
        return Ok(None);
    };

    let path = Path::new(file);
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    let prefix = path.file_name().and_then(|n| n.to_str()).unwrap_or("suatrua-site.log");

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let appender = tracing_appender::rolling::daily(dir, prefix);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    registry.with(fmt::layer().with_writer(writer).with_ansi(false)).init();
    Ok(Some(guard))
}
