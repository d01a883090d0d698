//! ElectroQuiz Server

use std::net::SocketAddr;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use electroquiz_server::config::{self, Config, UpstreamConfig};
use electroquiz_server::{http, AppState};

/// ElectroQuiz server - chat assistant proxy and PDF text extraction
#[derive(Parser)]
#[command(name = "electroquiz-server")]
#[command(about = "HTTP server for the ElectroQuiz learning platform", long_about = None)]
struct Cli {
    /// Address to bind the HTTP server to
    #[arg(long, env = "ELECTROQUIZ_BIND_ADDR", default_value = "0.0.0.0:3000")]
    bind_addr: String,

    /// Chat completions endpoint
    #[arg(long, env = "GROQ_API_URL", default_value = config::DEFAULT_API_URL)]
    api_url: String,

    /// Upstream model identifier
    #[arg(long, env = "GROQ_MODEL", default_value = config::DEFAULT_MODEL)]
    model: String,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            bind_addr: cli.bind_addr,
            upstream: UpstreamConfig {
                api_url: cli.api_url,
                model: cli.model,
                ..UpstreamConfig::default()
            },
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load config
    let config = Config::from(Cli::parse());
    let http_addr: SocketAddr = config.bind_addr.parse()?;

    if std::env::var(&config.upstream.api_key_var).is_err() {
        info!(
            var = %config.upstream.api_key_var,
            "API key not set; chat requests will be rejected upstream until it is"
        );
    }

    let state = AppState::from_config(&config);
    let router = http::create_router(state);

    info!(
        http_addr = %http_addr,
        model = %config.upstream.model,
        "Starting ElectroQuiz server"
    );

    let listener = TcpListener::bind(http_addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("ElectroQuiz server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
