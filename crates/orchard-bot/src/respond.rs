//! Command dispatch: store operations in, text replies out.
//!
//! Every store error is recovered here and rendered as a reply; nothing
//! propagates past the responder, so one failed command never takes the
//! transport loop down.

use std::path::PathBuf;

use orchard_core::{
  parse::parse_submission,
  profile::{Profile, UNKNOWN_ACTOR},
  store::ProfileStore,
};

use crate::command::{Command, parse_command};

/// Dispatches parsed commands against a [`ProfileStore`] and formats the
/// replies a transport should deliver.
pub struct Responder<S> {
  store:       S,
  export_path: PathBuf,
}

impl<S: ProfileStore> Responder<S> {
  pub fn new(store: S, export_path: impl Into<PathBuf>) -> Self {
    Self { store, export_path: export_path.into() }
  }

  /// Handle one raw incoming message. Returns `None` when the message is
  /// not a command (plain chatter); otherwise one or more replies.
  pub async fn respond_line(
    &self,
    line: &str,
    actor: &str,
  ) -> Option<Vec<String>> {
    let command = parse_command(line)?;
    tracing::info!(%actor, ?command, "command received");
    Some(self.respond(command, actor).await)
  }

  /// Handle one parsed command.
  pub async fn respond(&self, command: Command, actor: &str) -> Vec<String> {
    match command {
      Command::Submit { body } => self.submit(&body, actor).await,
      Command::Check { query } => self.check(&query).await,
      Command::View { actor: target } => {
        let target = target.unwrap_or_else(|| actor.to_string());
        self.view(&target).await
      }
      Command::Export => self.export().await,
    }
  }

  async fn submit(&self, body: &str, actor: &str) -> Vec<String> {
    if body.is_empty() {
      return vec!["Please paste the profile after /submit.".to_string()];
    }
    if !parse_submission(body).is_complete() {
      return vec!["Missing Name or Number.".to_string()];
    }

    match self.store.submit(body, actor).await {
      Ok(sub) => {
        let mut replies = Vec::new();
        if sub.duplicate {
          replies.push(
            "This person seems to already be in the system!".to_string(),
          );
        }
        replies.push(format!("Saved profile for {}.", sub.profile.name));
        replies
      }
      Err(e) => store_error_reply(&e),
    }
  }

  async fn check(&self, query: &str) -> Vec<String> {
    if query.is_empty() {
      return vec!["Usage: /check <name, number, or social>".to_string()];
    }

    match self.store.search(query).await {
      Ok(matches) if matches.is_empty() => {
        vec!["No match found.".to_string()]
      }
      Ok(matches) => matches
        .iter()
        .map(|p| format!("Match found:\n\n{}", format_profile(p)))
        .collect(),
      Err(e) => store_error_reply(&e),
    }
  }

  async fn view(&self, target: &str) -> Vec<String> {
    match self.store.list_by_attribution(target).await {
      Ok(matches) if matches.is_empty() => {
        vec![format!("No profiles from @{target}.")]
      }
      Ok(matches) => matches.iter().map(format_profile).collect(),
      Err(e) => store_error_reply(&e),
    }
  }

  async fn export(&self) -> Vec<String> {
    // Mirror the original tool: an empty store writes nothing.
    match self.store.load_all().await {
      Ok(records) if records.is_empty() => {
        return vec!["No profiles to export.".to_string()];
      }
      Ok(_) => {}
      Err(e) => return store_error_reply(&e),
    }

    match self.store.export_csv(&self.export_path).await {
      Ok(count) => vec![format!(
        "Exported {count} profiles to {}.",
        self.export_path.display()
      )],
      Err(e) => store_error_reply(&e),
    }
  }
}

/// One reply block per record, shared by `check` and `view`.
fn format_profile(p: &Profile) -> String {
  let socials = if p.socials.is_empty() {
    "—".to_string()
  } else {
    p.socials_joined()
  };
  let submitted_by = if p.submitted_by.is_empty() {
    UNKNOWN_ACTOR
  } else {
    &p.submitted_by
  };
  format!(
    "Name: {}\nNumber: {}\nSocials: {}\nSubmitted by: @{}\nAdded: {}",
    p.name, p.number, socials, submitted_by, p.timestamp
  )
}

fn store_error_reply(e: &dyn std::error::Error) -> Vec<String> {
  tracing::error!(error = %e, "store operation failed");
  vec![format!("Something went wrong: {e}")]
}
