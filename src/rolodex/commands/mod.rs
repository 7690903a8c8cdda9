//! # Command Layer
//!
//! Business logic for every rolodex command. Each command takes the
//! [`AddressBook`](crate::book::AddressBook) it works on plus plain Rust
//! arguments, and returns a [`CmdResult`]: records to list, birthday
//! entries, tag groups and leveled messages. Nothing here prints, colors or
//! touches the filesystem; persisting the book is the API layer's job.
//!
//! Failures that stop a command (unknown contact on a mutation, invalid
//! field) are `Err`. Outcomes that are worth telling the user about but are
//! not failures (nothing matched, tag was not there) are warning messages.

use crate::config::RolodexConfig;
use crate::record::Record;
use chrono::NaiveDate;
use std::path::PathBuf;

pub mod addresses;
pub mod birthdays;
pub mod config;
pub mod contacts;
pub mod emails;
pub mod helpers;
pub mod notes;
pub mod phones;
pub mod tags;

#[derive(Debug, Clone)]
pub struct RolodexPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A birthday inside the requested window, detached from the book.
#[derive(Debug, Clone)]
pub struct BirthdayEntry {
    pub record: Record,
    pub date: NaiveDate,
    pub days_until: i64,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_records: Vec<Record>,
    pub upcoming: Vec<BirthdayEntry>,
    pub tag_groups: Vec<(String, Vec<Record>)>,
    pub config: Option<RolodexConfig>,
    pub messages: Vec<CmdMessage>,
    /// Whether the command changed the book and it needs saving.
    pub modified: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_upcoming(mut self, upcoming: Vec<BirthdayEntry>) -> Self {
        self.upcoming = upcoming;
        self
    }

    pub fn with_tag_groups(mut self, groups: Vec<(String, Vec<Record>)>) -> Self {
        self.tag_groups = groups;
        self
    }

    pub fn with_config(mut self, config: RolodexConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// A result for a command that changed the book.
    pub fn modified() -> Self {
        Self {
            modified: true,
            ..Self::default()
        }
    }
}
