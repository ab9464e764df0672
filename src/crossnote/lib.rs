//! # Crossnote Architecture
//!
//! Crossnote is a small task list kept in one flat file: records are created,
//! crossed out (and back), deleted, and listed as a column table sized to the
//! terminal.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints output, owns exit codes         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, parses the sort argument      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - create / cross / delete / list, returning CmdResult      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, codec.rs)                           │
//! │  - RecordStore over a DataStore (FileStore, InMemoryStore)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The [`layout`] and [`sort`] modules are pure: they take records and a
//! [`layout::TerminalInfo`] and return ordered records or rendered text.
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never calls
//! `std::process::exit`. Non-fatal failures (blank text, unknown id, a file
//! that cannot be written) come back as [`commands::CmdMessage`]s; fatal ones
//! (bad sort argument, corrupted date during a sort) come back as
//! [`error::CrossnoteError`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`store`]: Record store and persistence backends
//! - [`codec`]: Flat-file record encoding
//! - [`sort`]: Sort specification parsing and ordering
//! - [`layout`]: Column layout and row styling
//! - [`model`]: The `Record` type and date helpers
//! - [`config`]: JSON configuration
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod sort;
pub mod store;
