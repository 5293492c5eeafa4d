use tracing_subscriber::EnvFilter;

use clinic_server::config::{Config, DEFAULT_LOG_FILTER, LogFormat};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = Config::from_env()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt().with_env_filter(filter).json().init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).compact().init(),
    }

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");

    axum::serve(listener, clinic_server::router()).await?;
    Ok(())
}
