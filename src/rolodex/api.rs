//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for all rolodex operations, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the in-memory [`AddressBook`], loaded once from the store
//! - **Dispatches** to the appropriate command function
//! - **Persists** the book after every command that reports a change
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no formatting and holds no business rules; those belong in
//! `commands/*.rs`.
//!
//! ## Generic Over DataStore
//!
//! `RolodexApi<S: DataStore>` is generic over the storage backend:
//! - Production: `RolodexApi<FileStore>`
//! - Testing: `RolodexApi<InMemoryStore>`

use crate::book::AddressBook;
use crate::commands::{self, CmdResult, RolodexPaths};
use crate::config::RolodexConfig;
use crate::error::Result;
use crate::store::DataStore;
use chrono::{Local, NaiveDate};
use tracing::debug;

/// The main API facade for rolodex operations.
pub struct RolodexApi<S: DataStore> {
    store: S,
    book: AddressBook,
    paths: RolodexPaths,
    config: RolodexConfig,
}

impl<S: DataStore> RolodexApi<S> {
    pub fn new(store: S, paths: RolodexPaths, config: RolodexConfig) -> Result<Self> {
        let book = store.load()?;
        Ok(Self {
            store,
            book,
            paths,
            config,
        })
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&mut self, result: Result<CmdResult>) -> Result<CmdResult> {
        let result = result?;
        if result.modified {
            debug!("saving address book after change");
            self.store.save(&self.book)?;
        }
        Ok(result)
    }

    // --- Contacts ---

    pub fn add_contact(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        let result = commands::contacts::add(&mut self.book, name, phone);
        self.persist(result)
    }

    pub fn rename_contact(&mut self, old_name: &str, new_name: &str) -> Result<CmdResult> {
        let result = commands::contacts::rename(&mut self.book, old_name, new_name);
        self.persist(result)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<CmdResult> {
        let result = commands::contacts::delete(&mut self.book, name);
        self.persist(result)
    }

    pub fn all_contacts(&self) -> Result<CmdResult> {
        commands::contacts::list_all(&self.book)
    }

    pub fn search_contacts(&self, query: &str) -> Result<CmdResult> {
        commands::contacts::search(&self.book, query)
    }

    // --- Phones ---

    pub fn show_phones(&self, name: &str) -> Result<CmdResult> {
        commands::phones::show(&self.book, name)
    }

    pub fn edit_phone(&mut self, name: &str, old: &str, new: &str) -> Result<CmdResult> {
        let result = commands::phones::edit(&mut self.book, name, old, new);
        self.persist(result)
    }

    pub fn remove_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        let result = commands::phones::remove(&mut self.book, name, phone);
        self.persist(result)
    }

    // --- Notes ---

    pub fn add_note(&mut self, name: &str, text: &str) -> Result<CmdResult> {
        let result = commands::notes::add(&mut self.book, name, text);
        self.persist(result)
    }

    pub fn edit_note(&mut self, name: &str, text: &str) -> Result<CmdResult> {
        let result = commands::notes::edit(&mut self.book, name, text);
        self.persist(result)
    }

    pub fn remove_note(&mut self, name: &str) -> Result<CmdResult> {
        let result = commands::notes::remove(&mut self.book, name);
        self.persist(result)
    }

    pub fn show_note(&self, name: &str) -> Result<CmdResult> {
        commands::notes::show(&self.book, name)
    }

    // --- Birthdays ---

    pub fn set_birthday(&mut self, name: &str, birthday: &str) -> Result<CmdResult> {
        let result = commands::birthdays::set(&mut self.book, name, birthday);
        self.persist(result)
    }

    pub fn show_birthday(&self, name: &str) -> Result<CmdResult> {
        commands::birthdays::show(&self.book, name)
    }

    /// Upcoming birthdays from today; `days` falls back to the configured window.
    pub fn upcoming_birthdays(&self, days: Option<u32>) -> Result<CmdResult> {
        self.upcoming_birthdays_on(Local::now().date_naive(), days)
    }

    pub fn upcoming_birthdays_on(&self, today: NaiveDate, days: Option<u32>) -> Result<CmdResult> {
        let window = days.unwrap_or(self.config.birthday_window);
        commands::birthdays::upcoming(&self.book, today, window)
    }

    // --- Emails ---

    pub fn set_email(&mut self, name: &str, email: &str) -> Result<CmdResult> {
        let result = commands::emails::set(&mut self.book, name, email);
        self.persist(result)
    }

    pub fn edit_email(&mut self, name: &str, email: &str) -> Result<CmdResult> {
        let result = commands::emails::edit(&mut self.book, name, email);
        self.persist(result)
    }

    pub fn remove_email(&mut self, name: &str) -> Result<CmdResult> {
        let result = commands::emails::remove(&mut self.book, name);
        self.persist(result)
    }

    // --- Addresses ---

    pub fn set_address(&mut self, name: &str, address: &str) -> Result<CmdResult> {
        let result = commands::addresses::set(&mut self.book, name, address);
        self.persist(result)
    }

    pub fn edit_address(&mut self, name: &str, address: &str) -> Result<CmdResult> {
        let result = commands::addresses::edit(&mut self.book, name, address);
        self.persist(result)
    }

    pub fn remove_address(&mut self, name: &str) -> Result<CmdResult> {
        let result = commands::addresses::remove(&mut self.book, name);
        self.persist(result)
    }

    // --- Tags ---

    pub fn add_tags(&mut self, name: &str, tags: &[String]) -> Result<CmdResult> {
        let result = commands::tags::add(&mut self.book, name, tags);
        self.persist(result)
    }

    pub fn remove_tag(&mut self, name: &str, tag: &str) -> Result<CmdResult> {
        let result = commands::tags::remove(&mut self.book, name, tag);
        self.persist(result)
    }

    pub fn show_tags(&self, name: &str) -> Result<CmdResult> {
        commands::tags::show(&self.book, name)
    }

    pub fn search_by_tag(&self, tag: &str) -> Result<CmdResult> {
        commands::tags::search(&self.book, tag)
    }

    pub fn group_by_tag(&self) -> Result<CmdResult> {
        commands::tags::group(&self.book)
    }

    // --- Config ---

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{BirthdayEntry, CmdMessage, MessageLevel};
