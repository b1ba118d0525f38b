use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

use currency_proxy::api::{self, AppState, CurrencyApiClient};
use currency_proxy::config::Settings;

#[derive(Parser)]
#[command(name = "currency-proxy", version, about = "Proxy for currencyapi.com rate lookups")]
struct Cli {
    /// Listen port (overrides CURRENCY_PROXY_PORT)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    let mut settings = Settings::from_env()?;
    if let Some(port) = cli.port {
        settings.port = port;
    }

    let rates = CurrencyApiClient::new(&settings)?;
    let app = api::router(AppState::new(rates));

    let addr = SocketAddr::from(([127, 0, 0, 1], settings.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(listen = %addr, "currency proxy listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .context("server error")?;

    Ok(())
}
