//! # Rolodex Architecture
//!
//! Rolodex is a **UI-agnostic contact book library**: named contacts with phones,
//! a birthday, an email, an address, a free-text note and tags. The binary is one
//! client of it; nothing below the CLI knows it is running in a terminal.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the loaded AddressBook, saves it after changes      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic and user-facing messages                  │
//! │  - Operates on Rust types, returns CmdResult                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain (book.rs, record.rs, fields.rs, validation.rs)      │
//! │  - Validated field types, Record, AddressBook               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Validation at the Edges
//!
//! Every field value goes through [`validation`] on the way in, whether it comes
//! from an argument or from the saved JSON. A [`record::Record`] therefore never
//! holds a malformed phone, date or email, and code past construction does not
//! re-check.
//!
//! ## Testing Strategy
//!
//! 1. **Domain and commands**: unit tests next to the code, fixtures from
//!    [`store::memory::fixtures`].
//! 2. **API**: dispatch and persistence, against `InMemoryStore`.
//! 3. **CLI**: `tests/cli.rs` runs the binary against a temporary `ROLODEX_HOME`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`book`]: The address book and the birthday window
//! - [`record`]: A single contact
//! - [`fields`]: Validated field newtypes (`Phone`, `Birthday`, `Email`, `Tag`)
//! - [`validation`]: Raw input checks shared by the field types
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod record;
pub mod store;
pub mod validation;
