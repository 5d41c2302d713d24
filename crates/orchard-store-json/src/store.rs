//! [`JsonStore`] — the flat-file implementation of [`ProfileStore`].

use std::path::{Path, PathBuf};

use chrono::Local;
use orchard_core::{
  Error, Result,
  parse::parse_submission,
  profile::{Profile, Submission, UNKNOWN_ACTOR},
  store::ProfileStore,
};

use crate::csv;

/// An Orchard profile store backed by a single JSON file.
///
/// The file holds one JSON array; its absence is an empty store. There is no
/// cross-process locking: two simultaneous writers race, and the second
/// full-sequence overwrite wins (accepted lost-update hazard).
///
/// Cloning is cheap — only the path is held.
#[derive(Debug, Clone)]
pub struct JsonStore {
  path: PathBuf,
}

impl JsonStore {
  /// Create a store handle for `path`. The file need not exist; it is
  /// created on first submission.
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  /// The path of the backing JSON file.
  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Default CSV destination: the backing file with a `.csv` extension.
  pub fn default_export_path(&self) -> PathBuf {
    self.path.with_extension("csv")
  }

  async fn read_records(&self) -> Result<Vec<Profile>> {
    let bytes = match tokio::fs::read(&self.path).await {
      Ok(bytes) => bytes,
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
        return Ok(Vec::new());
      }
      Err(e) => return Err(e.into()),
    };
    Ok(serde_json::from_slice(&bytes)?)
  }

  /// Persist the whole sequence. Writes to a sibling temp file first and
  /// renames into place so concurrent readers never see a torn file.
  async fn write_records(&self, records: &[Profile]) -> Result<()> {
    let json = serde_json::to_vec_pretty(records)?;

    let mut tmp = self.path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    tokio::fs::write(&tmp, &json).await?;
    tokio::fs::rename(&tmp, &self.path).await?;
    Ok(())
  }
}

// ─── ProfileStore impl ───────────────────────────────────────────────────────

impl ProfileStore for JsonStore {
  type Error = Error;

  async fn load_all(&self) -> Result<Vec<Profile>> {
    self.read_records().await
  }

  async fn submit(&self, raw_text: &str, actor: &str) -> Result<Submission> {
    let draft = parse_submission(raw_text);
    let (Some(name), Some(number)) = (draft.name, draft.number) else {
      return Err(Error::MissingNameOrNumber);
    };

    let mut records = self.read_records().await?;
    let duplicate = records
      .iter()
      .any(|existing| existing.same_person(&name, &number));

    let submitted_by = if actor.is_empty() {
      UNKNOWN_ACTOR.to_string()
    } else {
      actor.to_string()
    };

    let profile = Profile {
      name,
      number,
      socials: draft.socials,
      submitted_by,
      timestamp: Local::now().format("%Y-%m-%d %H:%M").to_string(),
    };

    records.push(profile.clone());
    self.write_records(&records).await?;

    Ok(Submission { profile, duplicate })
  }

  async fn search(&self, query: &str) -> Result<Vec<Profile>> {
    let query = query.to_lowercase();
    let mut records = self.read_records().await?;
    records.retain(|p| p.matches(&query));
    Ok(records)
  }

  async fn list_by_attribution(&self, actor: &str) -> Result<Vec<Profile>> {
    let mut records = self.read_records().await?;
    records.retain(|p| p.attributed_to(actor));
    Ok(records)
  }

  async fn export_csv(&self, destination: &Path) -> Result<usize> {
    let records = self.read_records().await?;
    tokio::fs::write(destination, csv::encode(&records)).await?;
    Ok(records.len())
  }
}
