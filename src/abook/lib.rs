//! # Abook Architecture
//!
//! Abook is a UI-agnostic address-book library with an interactive CLI
//! client. The layering keeps terminal concerns out of the core:
//!
//! ```text
//! CLI layer (repl wiring in main.rs)
//!   - reads the prompt loop, prints replies, owns exit codes
//!           |
//!           v
//! Session layer (repl.rs)
//!   - parses input lines, resolves commands, translates errors
//!     into their fixed user-facing messages
//!           |
//!           v
//! API layer (api.rs)
//!   - thin facade owning the book and its store; one method per command
//!           |
//!           v
//! Command layer (commands/*.rs)
//!   - pure business logic over the book; returns display strings
//!           |
//!           v
//! Storage layer (store/)
//!   - SnapshotStore trait; FileStore (production), InMemoryStore (tests)
//! ```
//!
//! From `api.rs` inward, code never touches stdout/stderr, never calls
//! `std::process::exit`, and never assumes a terminal. The same core could
//! back any other front end.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`repl`]: input parsing, dispatch, error-to-message translation
//! - [`commands`]: one module per user command
//! - [`book`]: the [`book::AddressBook`] collection
//! - [`model`]: validated field types and [`model::Record`]
//! - [`store`]: snapshot persistence
//! - [`config`]: configuration management
//! - [`error`]: error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod repl;
pub mod store;
