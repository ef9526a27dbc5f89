// Path: crates/cli/src/commands/serve.rs

use anyhow::{Context, Result};
use clap::Parser;
use classify_telemetry::init::LogFormat;
use classify_types::ServiceConfig;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tokio::sync::watch;

const DEFAULT_CONFIG_FILE: &str = "classify.toml";

#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Path to the service configuration. Defaults to `./classify.toml` if present.
    #[clap(long)]
    pub config: Option<PathBuf>,

    #[clap(
        long,
        env = "CLASSIFY_LISTEN_ADDR",
        help = "Overrides gateway.listen_addr in the config file"
    )]
    pub listen_addr: Option<String>,

    /// Also serve `/metrics`, `/healthz` and `/readyz` on a separate address.
    #[clap(long, env = "TELEMETRY_ADDR")]
    pub telemetry_addr: Option<SocketAddr>,

    /// Log output format: `json` or `pretty`.
    #[clap(long, env = "CLASSIFY_LOG_FORMAT", default_value = "json")]
    pub log_format: LogFormat,
}

/// Loads the explicit config file, or `./classify.toml` if it exists, or the
/// built-in defaults.
pub(crate) fn load_config(explicit: Option<&Path>) -> Result<ServiceConfig> {
    match explicit {
        Some(path) => ServiceConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => {
            let fallback = Path::new(DEFAULT_CONFIG_FILE);
            if fallback.exists() {
                ServiceConfig::load(fallback)
                    .with_context(|| format!("Failed to load {}", DEFAULT_CONFIG_FILE))
            } else {
                Ok(ServiceConfig::default())
            }
        }
    }
}

pub async fn run(args: ServeArgs) -> Result<()> {
    // 1. Initialize tracing FIRST
    classify_telemetry::init::init_tracing(args.log_format)?;
    let metrics_sink = classify_telemetry::prometheus::install()?;
    if classify_telemetry::sinks::SINK.set(metrics_sink).is_err() {
        anyhow::bail!("metrics sink was already installed");
    }

    let mut config = load_config(args.config.as_deref())?;
    if let Some(addr) = args.listen_addr {
        config.gateway.listen_addr = addr;
    }
    config.validate()?;
    let identity = config.identity.identity();

    tracing::info!(
        target: "classify",
        event = "startup",
        listen_addr = %config.gateway.listen_addr,
        user_id = %identity.user_id,
        rate_limit = config.gateway.rate_limit_enabled(),
        legacy_route = config.gateway.legacy_route
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    // 2. Spawn the telemetry server
    if let Some(addr) = args.telemetry_addr {
        tokio::spawn(classify_telemetry::http::run_server(addr, shutdown_rx.clone()));
    }

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(target: "classify", error = %e, "Failed to install CTRL+C handler");
            return;
        }
        let _ = shutdown_tx.send(true);
    });

    classify_http_gateway::run_server(config.gateway, identity, shutdown_rx).await
}
