//! Profile — the single record type of the Orchard store.
//!
//! A profile is written once at submission time and never edited or deleted
//! through the public surface; the store is an append-only ordered sequence.

use serde::{Deserialize, Serialize};

/// Attribution value used when the transport cannot supply an actor.
pub const UNKNOWN_ACTOR: &str = "unknown";

/// A submitted profile record.
///
/// The serde field names match the persisted JSON layout, which is shared
/// with older files produced by earlier versions of the tool — `socials` and
/// `submitted_by` therefore default when absent rather than failing the
/// whole load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
  pub name:         String,
  pub number:       String,
  #[serde(default)]
  pub socials:      Vec<String>,
  #[serde(default = "default_submitted_by")]
  pub submitted_by: String,
  /// Local time `YYYY-MM-DD HH:MM`, set at creation, never mutated.
  #[serde(default)]
  pub timestamp:    String,
}

fn default_submitted_by() -> String {
  UNKNOWN_ACTOR.to_string()
}

/// Case-insensitive equality, full Unicode lowercasing. All of duplicate
/// detection, attribution filtering, and substring search fold the same way,
/// so "MÜLLER" and "Müller" are the same person everywhere.
fn eq_folded(a: &str, b: &str) -> bool {
  a.to_lowercase() == b.to_lowercase()
}

impl Profile {
  /// Case-insensitive `(name, number)` equality — the duplicate-detection
  /// key. A collision warns but never blocks an append.
  pub fn same_person(&self, name: &str, number: &str) -> bool {
    eq_folded(&self.name, name) && eq_folded(&self.number, number)
  }

  /// Whether this record is attributed to `actor`, case-insensitively.
  pub fn attributed_to(&self, actor: &str) -> bool {
    eq_folded(&self.submitted_by, actor)
  }

  /// Whether `query` (already lowercased by the caller) occurs in the
  /// name, the number, or any social handle.
  pub fn matches(&self, query_lower: &str) -> bool {
    self.name.to_lowercase().contains(query_lower)
      || self.number.to_lowercase().contains(query_lower)
      || self
        .socials
        .iter()
        .any(|s| s.to_lowercase().contains(query_lower))
  }

  /// Socials flattened for display and export.
  pub fn socials_joined(&self) -> String {
    self.socials.join(", ")
  }
}

/// The result of a successful submission.
#[derive(Debug, Clone)]
pub struct Submission {
  /// The record as persisted, with attribution and timestamp stamped.
  pub profile:   Profile,
  /// `true` when an existing record already matched the `(name, number)`
  /// pair case-insensitively. The record was still appended.
  pub duplicate: bool,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn mango() -> Profile {
    Profile {
      name:         "Mango".into(),
      number:       "555-1234".into(),
      socials:      vec!["@mango".into(), "@tropical".into()],
      submitted_by: "alice".into(),
      timestamp:    "2025-06-01 12:00".into(),
    }
  }

  #[test]
  fn same_person_is_case_insensitive() {
    let p = mango();
    assert!(p.same_person("MANGO", "555-1234"));
    assert!(p.same_person("mango", "555-1234"));
    assert!(!p.same_person("Mango", "555-9999"));
  }

  #[test]
  fn same_person_folds_non_ascii_case() {
    let p = Profile {
      name: "Müller".into(),
      ..mango()
    };
    assert!(p.same_person("MÜLLER", "555-1234"));
  }

  #[test]
  fn attributed_to_is_case_insensitive() {
    let p = Profile {
      submitted_by: "JOSÉ".into(),
      ..mango()
    };
    assert!(p.attributed_to("josé"));
    assert!(!p.attributed_to("alice"));
  }

  #[test]
  fn matches_checks_name_number_and_socials() {
    let p = mango();
    assert!(p.matches("mango"));
    assert!(p.matches("555"));
    assert!(p.matches("@tropical"));
    assert!(!p.matches("papaya"));
  }

  #[test]
  fn empty_query_matches_everything() {
    assert!(mango().matches(""));
  }

  #[test]
  fn deserializes_legacy_record_without_socials() {
    let p: Profile =
      serde_json::from_str(r#"{"name": "Kiwi", "number": "555-0000"}"#)
        .unwrap();
    assert!(p.socials.is_empty());
    assert_eq!(p.submitted_by, UNKNOWN_ACTOR);
    assert_eq!(p.timestamp, "");
  }
}
