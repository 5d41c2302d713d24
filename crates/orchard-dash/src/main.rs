//! orchard-dash server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens the
//! JSON profile store shared with the bot process, and serves the dashboard
//! over HTTP.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use orchard_core::store::ProfileStore as _;
use orchard_dash::{AppState, ServerConfig};
use orchard_store_json::JsonStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Orchard profiles dashboard")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration: file first, environment on top.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("ORCHARD"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  let store = JsonStore::new(&server_cfg.store_path);
  let total = store
    .load_all()
    .await
    .with_context(|| {
      format!("failed to read store at {:?}", server_cfg.store_path)
    })?
    .len();
  tracing::info!(
    store = %server_cfg.store_path.display(),
    total,
    "profile store opened"
  );

  let state = AppState { store: Arc::new(store) };
  let app = orchard_dash::router(state);
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
