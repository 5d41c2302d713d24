//! Web dashboard for the Orchard profile registry.
//!
//! Exposes an axum [`Router`] backed by any [`orchard_core::store::ProfileStore`]:
//! `GET /` renders the profile table, `GET /profiles.csv` serves the CSV
//! export generated from the live store. Rendering is read-only; the bot
//! process owns all writes.

pub mod error;
pub mod render;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  extract::State,
  http::{StatusCode, header},
  response::{Html, Response},
  routing::get,
};
use orchard_core::store::ProfileStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ───────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` overlaid
/// with `ORCHARD_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:       String,
  #[serde(default = "default_port")]
  pub port:       u16,
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
}

fn default_host() -> String {
  "127.0.0.1".to_string()
}

fn default_port() -> u16 {
  8080
}

fn default_store_path() -> PathBuf {
  PathBuf::from("profiles.json")
}

// ─── Application state ───────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: ProfileStore> {
  pub store: Arc<S>,
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build the dashboard [`Router`] for `state`.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: ProfileStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/", get(dashboard::<S>))
    .route("/profiles.csv", get(export_csv::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Handlers ────────────────────────────────────────────────────────────────

/// `GET /` — the profile table.
async fn dashboard<S>(
  State(state): State<AppState<S>>,
) -> Result<Html<String>, Error>
where
  S: ProfileStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let profiles = state
    .store
    .load_all()
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;
  Ok(Html(render::page(&profiles)))
}

/// `GET /profiles.csv` — the export artifact, generated from the live store.
async fn export_csv<S>(
  State(state): State<AppState<S>>,
) -> Result<Response, Error>
where
  S: ProfileStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let profiles = state
    .store
    .load_all()
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;
  let body = orchard_store_json::csv::encode(&profiles);

  Ok(
    Response::builder()
      .status(StatusCode::OK)
      .header(header::CONTENT_TYPE, "text/csv; charset=utf-8")
      .header(
        header::CONTENT_DISPOSITION,
        "attachment; filename=\"profiles.csv\"",
      )
      .body(body.into())
      .unwrap(),
  )
}

#[cfg(test)]
mod tests {
  use orchard_store_json::JsonStore;
  use tempfile::TempDir;

  use super::*;

  async fn seeded_state() -> (TempDir, AppState<JsonStore>) {
    let dir = TempDir::new().expect("temp dir");
    let store = JsonStore::new(dir.path().join("profiles.json"));
    store
      .submit("Name: Mango\nNumber: 555-1234\nSocial: @mango", "alice")
      .await
      .unwrap();
    (dir, AppState { store: Arc::new(store) })
  }

  #[tokio::test]
  async fn dashboard_handler_renders_the_table() {
    let (_dir, state) = seeded_state().await;
    let Html(html) = dashboard(State(state)).await.unwrap();
    assert!(html.contains("<td>Mango</td>"));
    assert!(html.contains("Total Profiles: 1"));
  }

  #[tokio::test]
  async fn export_handler_serves_csv_with_header_row() {
    let (_dir, state) = seeded_state().await;
    let response = export_csv(State(state)).await.unwrap();
    assert_eq!(
      response.headers()[header::CONTENT_TYPE],
      "text/csv; charset=utf-8"
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
      .await
      .unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.starts_with("name,number,socials,submitted_by,timestamp\n"));
    assert!(text.contains("Mango,555-1234"));
  }

  #[tokio::test]
  async fn dashboard_of_missing_file_is_empty_not_an_error() {
    let dir = TempDir::new().unwrap();
    let state = AppState {
      store: Arc::new(JsonStore::new(dir.path().join("absent.json"))),
    };
    let Html(html) = dashboard(State(state)).await.unwrap();
    assert!(html.contains("Total Profiles: 0"));
  }
}
