//! CSV encoder for the export artifact.
//!
//! Header plus one row per record, store order, `\n` row endings, UTF-8.
//! `socials` is flattened to a single `", "`-joined field, which is then
//! quoted like any other field, so a handle containing a comma survives a
//! parse-back intact.

use std::borrow::Cow;

use orchard_core::profile::Profile;

/// Column order of the export artifact.
pub const HEADER: &str = "name,number,socials,submitted_by,timestamp";

/// Quote-wrap `field` if it contains the delimiter, a quote, or a line
/// break, doubling internal quotes (RFC 4180 rules).
fn escape(field: &str) -> Cow<'_, str> {
  if field.contains(['"', ',', '\n', '\r']) {
    Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
  } else {
    Cow::Borrowed(field)
  }
}

/// Encode `records` as a complete CSV document.
pub fn encode(records: &[Profile]) -> String {
  let mut out = String::from(HEADER);
  out.push('\n');

  for p in records {
    let socials = p.socials_joined();
    let row = [
      escape(&p.name),
      escape(&p.number),
      escape(&socials),
      escape(&p.submitted_by),
      escape(&p.timestamp),
    ]
    .join(",");
    out.push_str(&row);
    out.push('\n');
  }

  out
}
