//! Error types for `orchard-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Submission validation failure: the parsed draft lacks a name or a
  /// number line. No record is written.
  #[error("Missing Name or Number")]
  MissingNameOrNumber,

  #[error("i/o error: {0}")]
  Io(#[from] std::io::Error),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
