//! Chat command layer for the Orchard profile registry.
//!
//! This crate is transport-agnostic: a chat front end (Telegram, Discord, a
//! test harness) hands [`Responder::respond_line`] the raw command text and
//! an actor identifier, and gets back zero or more text replies. The bundled
//! binary wires the same responder to stdin/stdout.

pub mod command;
pub mod respond;

pub use command::{Command, LineAssembler, parse_command};
pub use respond::Responder;
