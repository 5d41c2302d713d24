//! Command-line parsing for incoming chat messages.

/// A recognised bot command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
  /// `submit <profile text>` — the body may span multiple lines.
  Submit { body: String },
  /// `check <query>` — an empty query yields a usage reply downstream.
  Check { query: String },
  /// `view [actor]` — without an argument, views the caller's own
  /// submissions.
  View { actor: Option<String> },
  /// `export` — write the CSV artifact.
  Export,
}

/// Parse one incoming message into a [`Command`].
///
/// The verb is the first whitespace-delimited token; a leading `/` and a
/// group-chat mention suffix (`/check@SomeBot`) are stripped, and matching
/// is case-insensitive. Returns `None` for anything that is not a known
/// command, so plain chatter passes through untouched.
pub fn parse_command(line: &str) -> Option<Command> {
  let line = line.trim();
  let (verb, rest) = match line.find(char::is_whitespace) {
    Some(i) => (&line[..i], line[i..].trim_start()),
    None => (line, ""),
  };

  let verb = verb.strip_prefix('/').unwrap_or(verb);
  let verb = verb.split('@').next().unwrap_or(verb);

  match verb.to_lowercase().as_str() {
    "submit" => Some(Command::Submit { body: rest.to_string() }),
    "check" => Some(Command::Check { query: rest.to_string() }),
    "view" => {
      let actor = rest
        .split_whitespace()
        .next()
        .map(|a| a.trim_start_matches('@').to_string());
      Some(Command::View { actor })
    }
    "export" => Some(Command::Export),
    _ => None,
  }
}

/// Assembles raw lines from a line-oriented transport (stdin, a pipe) into
/// complete messages.
///
/// A `submit` line opens a block that continues until a blank line, so the
/// usual multi-line submission body survives transports that deliver one
/// line at a time. Every other line is a complete message on its own.
#[derive(Debug, Default)]
pub struct LineAssembler {
  pending: Option<String>,
}

impl LineAssembler {
  /// Feed one line; returns a complete message once one is ready.
  pub fn push(&mut self, line: &str) -> Option<String> {
    match self.pending.take() {
      Some(body) if line.trim().is_empty() => Some(body),
      Some(mut body) => {
        body.push('\n');
        body.push_str(line);
        self.pending = Some(body);
        None
      }
      None => {
        if matches!(parse_command(line), Some(Command::Submit { .. })) {
          self.pending = Some(line.to_string());
          None
        } else {
          Some(line.to_string())
        }
      }
    }
  }

  /// End of input: flush an unterminated submit block.
  pub fn finish(&mut self) -> Option<String> {
    self.pending.take()
  }
}
