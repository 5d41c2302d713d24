//! The `ProfileStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `orchard-store-json`).
//! Higher layers (`orchard-bot`, `orchard-dash`) depend on this abstraction,
//! not on any concrete backend, so the backing can move from a flat file to
//! an embedded database without touching the callers.

use std::{future::Future, path::Path};

use crate::profile::{Profile, Submission};

/// Abstraction over an Orchard profile store backend.
///
/// The store is append-only: records are created by [`submit`](Self::submit)
/// and never edited or deleted. Every operation runs to completion as one
/// unit against the persisted state; there is no cross-call cache, so
/// concurrent readers in other processes always see a complete file.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait ProfileStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Read the full ordered sequence of persisted records. A backing file
  /// that does not exist yet is an empty store, not an error.
  fn load_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Profile>, Self::Error>> + Send + '_;

  /// Parse `raw_text`, validate it, stamp attribution and timestamp, append
  /// it, and persist the whole sequence.
  ///
  /// Fails when the parsed draft lacks a name or a number; in that case no
  /// record is written. A case-insensitive `(name, number)` collision with
  /// an existing record sets [`Submission::duplicate`] but the append still
  /// proceeds.
  fn submit<'a>(
    &'a self,
    raw_text: &'a str,
    actor: &'a str,
  ) -> impl Future<Output = Result<Submission, Self::Error>> + Send + 'a;

  /// Linear substring scan over name, number, and socials, case-insensitive,
  /// store order preserved. The empty query matches every record.
  fn search<'a>(
    &'a self,
    query: &'a str,
  ) -> impl Future<Output = Result<Vec<Profile>, Self::Error>> + Send + 'a;

  /// Records whose `submitted_by` equals `actor` case-insensitively, store
  /// order preserved. An empty result is not an error.
  fn list_by_attribution<'a>(
    &'a self,
    actor: &'a str,
  ) -> impl Future<Output = Result<Vec<Profile>, Self::Error>> + Send + 'a;

  /// Serialize every record to `destination` as CSV (header row, store
  /// order). Returns the number of records written.
  fn export_csv<'a>(
    &'a self,
    destination: &'a Path,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + 'a;
}
