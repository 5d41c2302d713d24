//! Core types and trait definitions for the Orchard profile registry.
//!
//! This crate is deliberately free of HTTP and filesystem dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod error;
pub mod parse;
pub mod profile;
pub mod store;

pub use error::{Error, Result};
