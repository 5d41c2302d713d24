//! Free-text submission parser.
//!
//! Submissions arrive as one labeled field per line, `label: value`. Label
//! matching is a case-insensitive substring check against a small table, so
//! "Name", "Full name:" and "NAME" all land in the same field. Lines without
//! a colon are ignored; a repeated label overwrites the earlier value.

/// Target field for a labeled line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
  Name,
  Number,
  Socials,
}

/// Label-substring → field table. Order matters: the first matching entry
/// wins, so `number` must be checked before any future label containing
/// `name` as a substring would.
const LABEL_FIELDS: &[(&str, Field)] = &[
  ("number", Field::Number),
  ("name", Field::Name),
  ("social", Field::Socials),
];

/// A partially-populated submission candidate. Fields are present only when
/// a matching labeled line existed in the raw text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
  pub name:    Option<String>,
  pub number:  Option<String>,
  pub socials: Vec<String>,
}

impl Draft {
  /// A draft is submittable only when both required fields are present.
  pub fn is_complete(&self) -> bool {
    self.name.is_some() && self.number.is_some()
  }
}

/// Parse a raw submission into a [`Draft`]. Pure; never touches a store.
pub fn parse_submission(raw: &str) -> Draft {
  let mut draft = Draft::default();

  for line in raw.trim().lines() {
    let Some((label, value)) = line.split_once(':') else {
      continue;
    };
    let label = label.trim().to_lowercase();
    let value = value.trim();

    let Some(field) = LABEL_FIELDS
      .iter()
      .find(|(substr, _)| label.contains(substr))
      .map(|(_, field)| *field)
    else {
      continue;
    };

    match field {
      Field::Name => draft.name = Some(value.to_string()),
      Field::Number => draft.number = Some(value.to_string()),
      Field::Socials => {
        draft.socials = value
          .split(',')
          .map(str::trim)
          .filter(|s| !s.is_empty())
          .map(str::to_string)
          .collect();
      }
    }
  }

  draft
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_full_submission() {
    let draft = parse_submission(
      "Name: Mango\nNumber: 555-1234\nSocial: @mango, @tropical",
    );
    assert_eq!(draft.name.as_deref(), Some("Mango"));
    assert_eq!(draft.number.as_deref(), Some("555-1234"));
    assert_eq!(draft.socials, vec!["@mango", "@tropical"]);
    assert!(draft.is_complete());
  }

  #[test]
  fn label_match_is_case_insensitive_substring() {
    let draft = parse_submission(
      "Full NAME: Papaya\nPhone Number: 555-9876\nSocials: @papaya",
    );
    assert_eq!(draft.name.as_deref(), Some("Papaya"));
    assert_eq!(draft.number.as_deref(), Some("555-9876"));
    assert_eq!(draft.socials, vec!["@papaya"]);
  }

  #[test]
  fn missing_number_is_incomplete() {
    let draft = parse_submission("Name: Kiwi");
    assert_eq!(draft.name.as_deref(), Some("Kiwi"));
    assert!(draft.number.is_none());
    assert!(!draft.is_complete());
  }

  #[test]
  fn lines_without_colon_are_ignored() {
    let draft =
      parse_submission("hello there\nName: Mango\nNumber: 555-1234\n---");
    assert_eq!(draft.name.as_deref(), Some("Mango"));
    assert_eq!(draft.number.as_deref(), Some("555-1234"));
  }

  #[test]
  fn only_first_colon_splits() {
    let draft = parse_submission("Name: Mango\nNumber: 555:1234");
    assert_eq!(draft.number.as_deref(), Some("555:1234"));
  }

  #[test]
  fn later_line_overwrites_earlier() {
    let draft =
      parse_submission("Name: Mango\nName: Papaya\nNumber: 555-1234");
    assert_eq!(draft.name.as_deref(), Some("Papaya"));
  }

  #[test]
  fn empty_social_pieces_are_dropped() {
    let draft =
      parse_submission("Name: M\nNumber: 1\nSocial: @a, , ,@b,");
    assert_eq!(draft.socials, vec!["@a", "@b"]);
  }

  #[test]
  fn empty_input_yields_empty_draft() {
    assert_eq!(parse_submission(""), Draft::default());
  }
}
