//! Flat-JSON-file backend for the Orchard profile store.
//!
//! The persisted form is a single JSON array at a well-known path, shared
//! with the chat-bot and dashboard processes. Every operation re-reads the
//! file, so readers always observe a complete sequence; writes land in a
//! sibling temp file and are renamed into place.

pub mod csv;
mod store;

pub use orchard_core::{Error, Result};
pub use store::JsonStore;
