//! # CLI Layer
//!
//! One UI client over [`crossnote::api::CrossnoteApi`]. This is the only
//! place that parses arguments, touches stdout/stderr, or decides exit codes.
//!
//! - `setup.rs`: clap definitions and the leading `*.json` config argument
//! - `commands.rs`: context wiring and per-command handlers
//! - `render.rs`: message printing and the listing table
//!
//! Mutations always exit 0: blank text, unknown ids and unwritable files are
//! reported as messages. A malformed sort argument, or a date that cannot be
//! parsed while sorting, ends the process with `Error: ...` and exit code 1.

mod commands;
mod render;
pub mod setup;

pub use commands::run;
