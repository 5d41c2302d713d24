//! HTML rendering for the dashboard page.
//!
//! One table row per record, columns Name, Number, Socials, Submitted By,
//! Timestamp. All record text passes through [`escape`] so a malicious
//! profile cannot inject markup into the page.

use orchard_core::profile::Profile;

/// Escape text for interpolation into HTML element content or attribute
/// values.
pub fn escape(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for c in s.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      c => out.push(c),
    }
  }
  out
}

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Orchard Profiles Dashboard</title>
  <style>
    body { font-family: Arial, sans-serif; margin: 2em; }
    table { border-collapse: collapse; width: 100%; }
    th, td { border: 1px solid #ccc; padding: 10px; text-align: left; }
    th { background-color: #f0f0f0; }
  </style>
</head>
<body>
  <h2>Orchard Profiles Dashboard</h2>
"#;

/// Render the full dashboard page for `profiles`.
pub fn page(profiles: &[Profile]) -> String {
  let mut html = String::from(PAGE_HEAD);
  html.push_str(&format!(
    "  <p>Total Profiles: {} (<a href=\"/profiles.csv\">download CSV</a>)</p>\n",
    profiles.len()
  ));
  html.push_str(
    "  <table>\n    <tr>\n      <th>Name</th>\n      <th>Number</th>\n      \
     <th>Socials</th>\n      <th>Submitted By</th>\n      \
     <th>Timestamp</th>\n    </tr>\n",
  );

  for p in profiles {
    html.push_str(&format!(
      "    <tr>\n      <td>{}</td>\n      <td>{}</td>\n      \
       <td>{}</td>\n      <td>{}</td>\n      <td>{}</td>\n    </tr>\n",
      escape(&p.name),
      escape(&p.number),
      escape(&p.socials_joined()),
      escape(&p.submitted_by),
      escape(&p.timestamp),
    ));
  }

  html.push_str("  </table>\n</body>\n</html>\n");
  html
}

#[cfg(test)]
mod tests {
  use super::*;

  fn profile(name: &str) -> Profile {
    Profile {
      name:         name.into(),
      number:       "555-1234".into(),
      socials:      vec!["@mango".into()],
      submitted_by: "alice".into(),
      timestamp:    "2025-06-01 12:00".into(),
    }
  }

  #[test]
  fn escape_covers_markup_characters() {
    assert_eq!(
      escape(r#"<a href="x">&'</a>"#),
      "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
    );
  }

  #[test]
  fn page_renders_one_row_per_profile() {
    let html = page(&[profile("Mango"), profile("Papaya")]);
    assert!(html.contains("Total Profiles: 2"));
    assert!(html.contains("<td>Mango</td>"));
    assert!(html.contains("<td>Papaya</td>"));
    assert!(html.contains("<td>@mango</td>"));
  }

  #[test]
  fn hostile_profile_name_is_entity_escaped() {
    let html = page(&[profile("<script>alert(1)</script>")]);
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
  }

  #[test]
  fn empty_store_renders_header_only_table() {
    let html = page(&[]);
    assert!(html.contains("Total Profiles: 0"));
    assert!(!html.contains("<td>"));
  }
}
