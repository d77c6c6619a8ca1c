//! Focus Coach API server binary.
//!
//! Prints `{"port": N}` to stdout once bound so a parent process can discover
//! an ephemeral port.

use std::time::Duration;

use clap::Parser;
use focus_api::{AppState, config::ApiConfig};
use tracing::info;

/// CLI arguments for the API server.
///
/// Anything not given on the command line comes from [`ApiConfig::from_env`].
#[derive(Parser, Debug)]
#[command(name = "focus_api_server", about = "Focus Coach API server", version)]
struct Args {
    /// Address to bind, e.g. `127.0.0.1:5000` (overrides `BIND_ADDR`).
    #[arg(long)]
    bind_addr: Option<String>,

    /// Port to listen on, 0 = ephemeral (replaces the port of the bind address).
    #[arg(long)]
    port: Option<u16>,

    /// Simulated processing time per chat response in milliseconds
    /// (overrides `RESPONSE_DELAY_MS`).
    #[arg(long)]
    response_delay_ms: Option<u64>,
}

impl Args {
    fn into_config(self, mut config: ApiConfig) -> ApiConfig {
        if let Some(bind_addr) = self.bind_addr {
            config.bind_addr = bind_addr;
        }
        if let Some(port) = self.port {
            let host = config
                .bind_addr
                .rsplit_once(':')
                .map_or(config.bind_addr.as_str(), |(host, _)| host);
            config.bind_addr = format!("{host}:{port}");
        }
        if let Some(ms) = self.response_delay_ms {
            config.response_delay = Duration::from_millis(ms);
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Write logs to stderr so stdout is reserved for the JSON port message.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,focus_api=debug".into()),
        )
        .init();

    let args = Args::parse();

    let config = args.into_config(ApiConfig::from_env());

    info!(
        bind_addr = %config.bind_addr,
        response_delay = ?config.response_delay,
        version = focus_core::version(),
        "starting focus_api_server"
    );

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;

    let app = focus_api::router(AppState::new(config));

    println!("{}", serde_json::json!({"port": local_addr.port()}));

    info!(addr = %local_addr, "REST API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("ctrl-c received, shutting down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> ApiConfig {
        ApiConfig {
            bind_addr: "127.0.0.1:5000".into(),
            response_delay: Duration::from_millis(1000),
        }
    }

    #[test]
    fn no_args_keeps_base_config() {
        let config = Args::parse_from(["focus_api_server"]).into_config(base());
        assert_eq!(config.bind_addr, "127.0.0.1:5000");
        assert_eq!(config.response_delay, Duration::from_millis(1000));
    }

    #[test]
    fn port_replaces_port_of_bind_addr() {
        let config = Args::parse_from([
            "focus_api_server",
            "--bind-addr",
            "0.0.0.0:8080",
            "--port",
            "0",
        ])
        .into_config(base());
        assert_eq!(config.bind_addr, "0.0.0.0:0");
    }

    #[test]
    fn delay_override() {
        let config =
            Args::parse_from(["focus_api_server", "--response-delay-ms", "0"]).into_config(base());
        assert!(config.response_delay.is_zero());
    }
}
