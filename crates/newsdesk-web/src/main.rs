//! Web server for the newsdesk admin dashboard
#![forbid(unsafe_code)]

use clap::Parser;
use newsdesk_core::{Config, Error, init_logging};
use newsdesk_web::build_app;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use tokio::signal;
use tracing::{info, warn};

/// Command line interface for the dashboard server
#[derive(Debug, Parser)]
#[command(
    name = "newsdesk-web-server",
    version = env!("CARGO_PKG_VERSION"),
    about = "Admin dashboard for blog, newsletter and subscriber metrics"
)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Address to bind (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Backend base URL (overrides config)
    #[arg(long, value_name = "URL")]
    backend_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    log_format: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is normal outside development
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();

    let loaded = Config::load_from(cli.config.as_deref());
    let (mut config, load_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    cli.apply_overrides(&mut config);

    init_logging(&config.logging)?;

    if let Err(e) = dotenv {
        info!("Note: .env file not loaded: {e}");
    }
    if let Some(e) = load_error {
        warn!("Failed to load config: {e}, using defaults");
    }

    let app = build_app(config.clone())?;

    let host: IpAddr = config
        .server
        .host
        .parse()
        .map_err(|e| Error::Configuration {
            message: format!("invalid server host '{}': {e}", config.server.host),
        })?;
    let addr = SocketAddr::new(host, config.server.port);

    info!(
        backend = %config.backend.base_url,
        "Starting newsdesk dashboard v{} on {addr}",
        env!("CARGO_PKG_VERSION")
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(Error::Io)?;
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

impl Cli {
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(url) = &self.backend_url {
            config.backend.base_url.clone_from(url);
        }
        if let Some(level) = &self.log_level {
            config.logging.level.clone_from(level);
        }
        if let Some(format) = &self.log_format {
            config.logging.format.clone_from(format);
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {e}");
        std::future::pending::<()>().await;
    }
    info!("Received Ctrl+C, shutting down gracefully");
}
