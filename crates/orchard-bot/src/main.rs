//! `orchard-bot` — stdin/stdout transport for the Orchard command layer.
//!
//! Reads commands from stdin and prints the replies, which makes the
//! command layer usable locally and easy to drive from a chat-bridge
//! process that pipes messages through. A `/submit` body spans the
//! following lines until a blank line (or end of input) closes it.
//!
//! # Usage
//!
//! ```text
//! $ orchard-bot --store profiles.json --actor alice
//! /submit Name: Mango
//! Number: 555-1234
//! Social: @mango, @tropical
//!
//! /check mango
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use orchard_bot::{LineAssembler, Responder};
use orchard_store_json::JsonStore;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "orchard-bot", about = "Command-line front end for the Orchard profile registry")]
struct Args {
  /// Path to the JSON profile store.
  #[arg(short, long, env = "ORCHARD_STORE", default_value = "profiles.json")]
  store: PathBuf,

  /// Actor identifier recorded on submissions.
  #[arg(short, long, env = "ORCHARD_ACTOR", default_value = "unknown")]
  actor: String,

  /// CSV destination for the export command (default: the store path with
  /// a `.csv` extension).
  #[arg(long, env = "ORCHARD_EXPORT")]
  export: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();

  let store = JsonStore::new(&args.store);
  let export_path = args
    .export
    .unwrap_or_else(|| store.default_export_path());
  let responder = Responder::new(store, export_path);

  tracing::info!(store = %args.store.display(), actor = %args.actor, "ready");

  let mut assembler = LineAssembler::default();
  let mut lines = BufReader::new(tokio::io::stdin()).lines();
  while let Some(line) = lines.next_line().await.context("reading stdin")? {
    let Some(message) = assembler.push(&line) else {
      continue;
    };
    deliver(&responder, &message, &args.actor).await;
  }
  if let Some(message) = assembler.finish() {
    deliver(&responder, &message, &args.actor).await;
  }

  Ok(())
}

async fn deliver(
  responder: &Responder<JsonStore>,
  message: &str,
  actor: &str,
) {
  let Some(replies) = responder.respond_line(message, actor).await else {
    return;
  };
  for reply in replies {
    println!("{reply}\n");
  }
}
