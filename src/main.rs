//! ai-service: static recommendations over HTTP.
//!
//! This is the application entry point. It initializes tracing, loads
//! configuration from an optional TOML file, builds the Axum router, and
//! starts the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ai_service::config::{AppConfig, LoggingConfig, DEFAULT_LOG_FILTER};
use ai_service::http::start_server;
use ai_service::{create_router, AppError, AppState, RecommendationTable};

/// ai-service: static recommendations over HTTP
#[derive(Parser, Debug)]
#[command(name = "ai-service", version, about)]
struct Args {
    /// Path to configuration file (built-in defaults when omitted)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "ai_service=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Listen host, overrides http.host
    #[arg(long)]
    host: Option<String>,

    /// Listen port, overrides http.port
    #[arg(short, long)]
    port: Option<u16>,
}

fn init_tracing(log_filter: &str, logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::new(log_filter);
    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().flatten_event(true))
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Configuration comes first so the log format is known before tracing starts
    let mut config = AppConfig::load_or_default(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.http.host = host;
    }
    if let Some(port) = args.port {
        config.http.port = port;
    }

    // Priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, &config.logging);

    tracing::info!(
        config_file = args.config.as_deref().unwrap_or("<defaults>"),
        host = %config.http.host,
        port = config.http.port,
        log_format = %config.logging.format,
        "Loaded configuration"
    );

    let table = RecommendationTable::builtin();
    tracing::info!(
        modules = ?table.modules().collect::<Vec<_>>(),
        "Loaded recommendation table"
    );

    let app = create_router(AppState::new(table));
    start_server(app, &config).await?;

    Ok(())
}
