//! Token locker service library

use std::path::Path;

use anyhow::Context;
use locker_api::AppState;
use locker_core::AppConfig;

/// Path of an optional JSON config file
const CONFIG_PATH_VAR: &str = "LOCKER_CONFIG";
const RPC_URL_VAR: &str = "LOCKER_RPC_URL";
const API_PORT_VAR: &str = "LOCKER_API_PORT";

/// Run the locker service until the server stops
pub fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tokenlock=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .init();

    tracing::info!("Starting token locker");

    let config_path = std::env::var(CONFIG_PATH_VAR).ok();
    let config = load_config(
        config_path.as_deref().map(Path::new),
        std::env::var(RPC_URL_VAR).ok(),
        std::env::var(API_PORT_VAR).ok(),
    )?;
    config.validate()?;

    let state = AppState::new(config)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?;
    runtime.block_on(locker_api::start_server(state))?;

    Ok(())
}

/// Read the config file (if any) and apply environment overrides
pub fn load_config(
    path: Option<&Path>,
    rpc_url: Option<String>,
    api_port: Option<String>,
) -> anyhow::Result<AppConfig> {
    let mut config = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => AppConfig::default(),
    };

    if let Some(url) = rpc_url {
        config.rpc.url = url;
    }
    if let Some(port) = api_port {
        config.api_port = port
            .parse()
            .with_context(|| format!("invalid {}: {}", API_PORT_VAR, port))?;
    }

    tracing::debug!(
        rpc = %config.rpc.url,
        chain = %config.chain,
        mode = %config.mode,
        port = config.api_port,
        "Configuration loaded"
    );
    Ok(config)
}
