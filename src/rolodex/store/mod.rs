//! # Storage Layer
//!
//! The persistence boundary for rolodex. The [`DataStore`] trait is the only
//! contract the rest of the crate relies on: hand out an [`AddressBook`] on
//! startup, take one back after a mutation.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage
//!   - The whole book in one JSON file (`contacts.json` by default)
//!   - Written atomically (temp file + rename)
//!   - A missing file loads as an empty book
//!
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!   - No persistence
//!   - Counts saves so tests can assert a mutation was persisted
//!
//! ## Storage Format
//!
//! ```text
//! $ROLODEX_HOME/
//! ├── contacts.json   # JSON array of records, in address book order
//! └── config.json     # RolodexConfig
//! ```
//!
//! Each record stores `name`, `phones`, `birthday` (ISO date or null),
//! `email`, `note`, `address` and `tags`. Loading re-validates every field.

use crate::book::AddressBook;
use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for address book persistence.
pub trait DataStore {
    /// Load the saved book, or an empty one if nothing was saved yet.
    fn load(&self) -> Result<AddressBook>;

    /// Persist the whole book, replacing the previous snapshot.
    fn save(&mut self, book: &AddressBook) -> Result<()>;
}
